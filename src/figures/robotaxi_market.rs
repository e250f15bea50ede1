use iced::Color;

use crate::charts::{ChartStyle, LineChart, LineSeries};
use crate::data::market_growth;
use crate::theme::SECONDARY_ACCENT;

pub struct RobotaxiMarketFigure;

impl RobotaxiMarketFigure {
    pub fn title() -> &'static str {
        "The Robotaxi Revolution"
    }

    pub fn subtitle() -> &'static str {
        "Forecast robotaxi market value, 2022 to 2031"
    }

    pub fn chart() -> LineChart {
        let points = market_growth::ROBOTAXI_MARKET
            .iter()
            .map(|(year, value)| (year.to_string(), *value))
            .collect();

        let series = LineSeries::new(market_growth::ROBOTAXI_MARKET_LABEL, SECONDARY_ACCENT, points)
            .with_fill(Color {
                a: 0.3,
                ..SECONDARY_ACCENT
            })
            .with_tension(0.1);

        LineChart::new(vec![series]).with_style(ChartStyle::common())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_spans_the_forecast_window() {
        let chart = RobotaxiMarketFigure::chart();
        let series = chart.series();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points[0].0, "2022");
        assert_eq!(series[0].points[1], ("2031".to_owned(), 118.61));
    }
}
