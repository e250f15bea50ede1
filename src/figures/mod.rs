pub mod annual_cost;
pub mod av_market;
pub mod initial_investment;
pub mod robotaxi_market;

pub use annual_cost::AnnualCostFigure;
pub use av_market::AvMarketFigure;
pub use initial_investment::InitialInvestmentFigure;
pub use robotaxi_market::RobotaxiMarketFigure;

use crate::charts::{CanvasId, MountedChart};

pub fn build(canvas: CanvasId) -> MountedChart {
    match canvas {
        CanvasId::AvMarket => MountedChart::Line(AvMarketFigure::chart()),
        CanvasId::RobotaxiMarket => MountedChart::Line(RobotaxiMarketFigure::chart()),
        CanvasId::AnnualCost => MountedChart::Doughnut(AnnualCostFigure::chart()),
        CanvasId::InitialInvestment => {
            MountedChart::HorizontalBar(InitialInvestmentFigure::chart())
        }
    }
}
