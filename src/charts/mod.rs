pub mod doughnut;
pub mod format;
pub mod hbar;
mod legend;
pub mod line;
pub mod model;
pub mod registry;

pub use doughnut::DoughnutChart;
pub use hbar::HBarChart;
pub use line::LineChart;
pub use model::{BarSeries, ChartConfig, ChartStyle, DoughnutSlice, LegendPosition, LineSeries};
pub use registry::{CanvasId, ChartRegistry, MountedChart};
