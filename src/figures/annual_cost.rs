use iced::Color;

use crate::charts::{ChartStyle, DoughnutChart, DoughnutSlice};
use crate::data::annual_cost;
use crate::theme::{
    GREY_DARK, GREY_LIGHT, ORANGE_DARK, ORANGE_LIGHT, ORANGE_PALE, PRIMARY_ACCENT,
    SECONDARY_ACCENT, WHITE,
};

const PALETTE: [Color; 7] = [
    PRIMARY_ACCENT,
    SECONDARY_ACCENT,
    ORANGE_LIGHT,
    GREY_LIGHT,
    ORANGE_DARK,
    GREY_DARK,
    ORANGE_PALE,
];

pub struct AnnualCostFigure;

impl AnnualCostFigure {
    pub fn title() -> &'static str {
        "The ~$61,500 Annual Burden Per Vehicle"
    }

    pub fn subtitle() -> &'static str {
        "Recurring operating cost per fleet vehicle, by category"
    }

    pub fn chart() -> DoughnutChart {
        let slices = annual_cost::CATEGORIES
            .iter()
            .enumerate()
            .map(|(index, (label, value))| DoughnutSlice {
                label: (*label).to_owned(),
                value: *value,
                color: PALETTE[index % PALETTE.len()],
            })
            .collect();

        DoughnutChart::new(annual_cost::DATASET_LABEL, slices)
            .with_border(WHITE, 3.0)
            .with_style(ChartStyle::doughnut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_has_a_slice_per_cost_category() {
        let chart = AnnualCostFigure::chart();

        assert_eq!(chart.slices().len(), 7);
        assert_eq!(chart.slices()[0].label, "Vehicle Amortization");
        assert_eq!(chart.slices()[0].value, 22_000.0);
    }

    #[test]
    fn slice_colors_alternate_through_the_palette() {
        let chart = AnnualCostFigure::chart();

        assert_eq!(chart.slices()[0].color, PRIMARY_ACCENT);
        assert_eq!(chart.slices()[1].color, SECONDARY_ACCENT);
        assert_eq!(chart.slices()[6].color, ORANGE_PALE);
    }
}
