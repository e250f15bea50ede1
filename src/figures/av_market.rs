use iced::Color;

use crate::charts::{ChartConfig, ChartStyle, LineChart, LineSeries};
use crate::data::market_growth;
use crate::theme::PRIMARY_ACCENT;

pub struct AvMarketFigure;

impl AvMarketFigure {
    pub fn title() -> &'static str {
        "Total AV Market Projection"
    }

    pub fn subtitle() -> &'static str {
        "Projected global market value, 2024 to 2034"
    }

    pub fn chart() -> LineChart {
        let points = market_growth::AV_MARKET
            .iter()
            .map(|(year, value)| (year.to_string(), *value))
            .collect();

        let series = LineSeries::new(market_growth::AV_MARKET_LABEL, PRIMARY_ACCENT, points)
            .with_fill(Color {
                a: 0.2,
                ..PRIMARY_ACCENT
            })
            .with_tension(0.4);

        LineChart::new(vec![series])
            .with_style(ChartStyle::common())
            .with_config(ChartConfig {
                padding: 40.0,
                grid_lines: 5,
                point_radius: 5.0,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_carries_one_filled_series() {
        let chart = AvMarketFigure::chart();
        let series = chart.series();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points.len(), 2);
        assert!(series[0].fill.is_some());
        assert_eq!(series[0].tension, 0.4);
        assert_eq!(series[0].points[0], ("2024".to_owned(), 1.7));
    }
}
