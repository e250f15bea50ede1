use iced::Color;

use crate::theme::{DARK_TEXT, GRID_LINE, TOOLTIP_BG, WHITE};

#[derive(Debug, Clone)]
pub struct LineSeries {
    pub name: String,
    pub color: Color,
    pub fill: Option<Color>,
    pub tension: f32,
    pub points: Vec<(String, f32)>,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, color: Color, points: Vec<(String, f32)>) -> Self {
        Self {
            name: name.into(),
            color,
            fill: None,
            tension: 0.0,
            points,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_tension(mut self, tension: f32) -> Self {
        self.tension = tension;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DoughnutSlice {
    pub label: String,
    pub value: f32,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: String,
    pub color: Color,
    pub border: Color,
    pub values: Vec<f32>,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub padding: f32,
    pub grid_lines: usize,
    pub point_radius: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            grid_lines: 5,
            point_radius: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendPosition {
    Top,
    Bottom { padding: f32 },
}

// Shared styling for every chart: legend text, tooltip colors, axis ticks,
// and grid visibility (value axis gridded, category axis not).
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub legend_color: Color,
    pub legend_position: LegendPosition,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
    pub tick_color: Color,
    pub y_grid: Option<Color>,
    pub x_grid: Option<Color>,
}

impl ChartStyle {
    pub fn common() -> Self {
        Self {
            legend_color: DARK_TEXT,
            legend_position: LegendPosition::Top,
            tooltip_background: TOOLTIP_BG,
            tooltip_text: WHITE,
            tick_color: DARK_TEXT,
            y_grid: Some(GRID_LINE),
            x_grid: None,
        }
    }

    pub fn doughnut() -> Self {
        Self {
            legend_position: LegendPosition::Bottom { padding: 15.0 },
            ..Self::common()
        }
    }

    // Axes are swapped on the horizontal bar, so the grid follows the value
    // axis to the x side.
    pub fn horizontal_bar() -> Self {
        Self {
            x_grid: Some(GRID_LINE),
            y_grid: None,
            ..Self::common()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_style_grids_value_axis_only() {
        let style = ChartStyle::common();
        assert!(style.y_grid.is_some());
        assert!(style.x_grid.is_none());
        assert_eq!(style.legend_position, LegendPosition::Top);
    }

    #[test]
    fn doughnut_moves_legend_to_bottom() {
        let style = ChartStyle::doughnut();
        assert_eq!(
            style.legend_position,
            LegendPosition::Bottom { padding: 15.0 }
        );
        assert!(style.y_grid.is_some());
    }

    #[test]
    fn horizontal_bar_swaps_grid_axes() {
        let style = ChartStyle::horizontal_bar();
        assert!(style.x_grid.is_some());
        assert!(style.y_grid.is_none());
    }
}
