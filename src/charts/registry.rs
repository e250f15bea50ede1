use std::collections::BTreeMap;

use iced::widget::canvas::Canvas;
use iced::{Element, Fill, Length};

use super::{DoughnutChart, HBarChart, LineChart};
use crate::message::Message;
use crate::screens::Page;

#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Copy)]
pub enum CanvasId {
    AvMarket,
    RobotaxiMarket,
    AnnualCost,
    InitialInvestment,
}

impl CanvasId {
    pub const ALL: [CanvasId; 4] = [
        CanvasId::AvMarket,
        CanvasId::RobotaxiMarket,
        CanvasId::AnnualCost,
        CanvasId::InitialInvestment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CanvasId::AvMarket => "av-market-chart",
            CanvasId::RobotaxiMarket => "robotaxi-market-chart",
            CanvasId::AnnualCost => "annual-cost-chart",
            CanvasId::InitialInvestment => "initial-investment-chart",
        }
    }

    pub fn hosted_on(&self, page: Page) -> bool {
        matches!(page, Page::Home)
    }
}

pub enum MountedChart {
    Line(LineChart),
    Doughnut(DoughnutChart),
    HorizontalBar(HBarChart),
}

impl MountedChart {
    pub fn view(&self) -> Element<'_, Message> {
        match self {
            MountedChart::Line(chart) => Canvas::new(chart)
                .width(Fill)
                .height(Length::Fixed(280.0))
                .into(),
            MountedChart::Doughnut(chart) => Canvas::new(chart)
                .width(Fill)
                .height(Length::Fixed(300.0))
                .into(),
            MountedChart::HorizontalBar(chart) => Canvas::new(chart)
                .width(Fill)
                .height(Length::Fixed(280.0))
                .into(),
        }
    }
}

// Owns every live chart, keyed by canvas. A canvas never holds more than
// one live chart: mounting over an occupied canvas drops the old chart
// before the new one is bound.
#[derive(Default)]
pub struct ChartRegistry {
    mounted: BTreeMap<CanvasId, MountedChart>,
}

impl ChartRegistry {
    pub fn mount(&mut self, page: Page, canvas: CanvasId, chart: MountedChart) -> bool {
        if !canvas.hosted_on(page) {
            log::warn!(
                "canvas {} is not attached on the {} page, skipping mount",
                canvas.label(),
                page.label()
            );
            return false;
        }

        if self.mounted.remove(&canvas).is_some() {
            log::debug!("replacing live chart on {}", canvas.label());
        }

        self.mounted.insert(canvas, chart);
        true
    }

    pub fn unmount(&mut self, canvas: CanvasId) {
        // Unmounting an absent chart is a no-op.
        self.mounted.remove(&canvas);
    }

    pub fn unmount_all(&mut self) {
        self.mounted.clear();
    }

    pub fn get(&self, canvas: CanvasId) -> Option<&MountedChart> {
        self.mounted.get(&canvas)
    }

    pub fn live_count(&self) -> usize {
        self.mounted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures;

    #[test]
    fn mount_replaces_live_chart_on_same_canvas() {
        let mut registry = ChartRegistry::default();

        assert!(registry.mount(
            Page::Home,
            CanvasId::AvMarket,
            figures::build(CanvasId::AvMarket)
        ));
        assert!(registry.mount(
            Page::Home,
            CanvasId::AvMarket,
            figures::build(CanvasId::AvMarket)
        ));

        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn mount_is_refused_off_the_home_page() {
        let mut registry = ChartRegistry::default();

        assert!(!registry.mount(
            Page::GroundSolutions,
            CanvasId::AnnualCost,
            figures::build(CanvasId::AnnualCost)
        ));

        assert_eq!(registry.live_count(), 0);
        assert!(registry.get(CanvasId::AnnualCost).is_none());
    }

    #[test]
    fn double_unmount_is_a_noop() {
        let mut registry = ChartRegistry::default();

        registry.mount(
            Page::Home,
            CanvasId::AnnualCost,
            figures::build(CanvasId::AnnualCost),
        );
        registry.unmount(CanvasId::AnnualCost);
        registry.unmount(CanvasId::AnnualCost);

        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn unmount_all_releases_every_canvas() {
        let mut registry = ChartRegistry::default();

        for canvas in CanvasId::ALL {
            registry.mount(Page::Home, canvas, figures::build(canvas));
        }
        assert_eq!(registry.live_count(), 4);

        registry.unmount_all();
        assert_eq!(registry.live_count(), 0);
        for canvas in CanvasId::ALL {
            assert!(registry.get(canvas).is_none());
        }
    }
}
