use iced::Color;

use crate::charts::format::{wrap_label, MAX_LABEL_WIDTH};
use crate::charts::{BarSeries, ChartStyle, HBarChart};
use crate::data::initial_investment;
use crate::theme::{PRIMARY_ACCENT, SECONDARY_ACCENT};

pub struct InitialInvestmentFigure;

impl InitialInvestmentFigure {
    pub fn title() -> &'static str {
        "The Multi-Million Dollar Buy-In"
    }

    pub fn subtitle() -> &'static str {
        "Up-front investment estimates before the first vehicle deploys"
    }

    pub fn chart() -> HBarChart {
        let categories = initial_investment::CATEGORIES
            .iter()
            .map(|label| wrap_label(label, MAX_LABEL_WIDTH))
            .collect();

        let series = vec![
            BarSeries {
                name: initial_investment::LOW_ESTIMATE_LABEL.to_owned(),
                color: Color {
                    a: 0.7,
                    ..SECONDARY_ACCENT
                },
                border: SECONDARY_ACCENT,
                values: initial_investment::LOW_ESTIMATE.to_vec(),
            },
            BarSeries {
                name: initial_investment::HIGH_ESTIMATE_LABEL.to_owned(),
                color: Color {
                    a: 0.7,
                    ..PRIMARY_ACCENT
                },
                border: PRIMARY_ACCENT,
                values: initial_investment::HIGH_ESTIMATE.to_vec(),
            },
        ];

        HBarChart::new(categories, series).with_style(ChartStyle::horizontal_bar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_category_labels_are_wrapped() {
        let chart = InitialInvestmentFigure::chart();

        assert_eq!(
            chart.categories()[2],
            vec!["Autonomous".to_owned(), "Logistics Hub".to_owned()]
        );
        assert_eq!(
            chart.categories()[1],
            vec!["Hardware".to_owned(), "Integration".to_owned()]
        );
    }

    #[test]
    fn low_and_high_estimates_align_with_categories() {
        let chart = InitialInvestmentFigure::chart();

        assert_eq!(chart.series().len(), 2);
        for series in chart.series() {
            assert_eq!(series.values.len(), chart.categories().len());
        }
        assert_eq!(chart.series()[0].values, vec![2.0, 0.5, 16.3]);
        assert_eq!(chart.series()[1].values, vec![8.0, 2.0, 16.3]);
    }
}
