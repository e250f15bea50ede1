use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Size, Theme};

use super::format::{format_millions, format_usd, join_label};
use super::legend;
use super::line::draw_tooltip;
use super::model::{BarSeries, ChartConfig, ChartStyle};

// Grouped horizontal bars: categories on the y axis, values on x.
pub struct HBarChart {
    cache: Cache,
    categories: Vec<Vec<String>>,
    series: Vec<BarSeries>,
    config: ChartConfig,
    style: ChartStyle,
}

impl HBarChart {
    pub fn new(categories: Vec<Vec<String>>, series: Vec<BarSeries>) -> Self {
        Self {
            cache: Cache::new(),
            categories,
            series,
            config: ChartConfig::default(),
            style: ChartStyle::horizontal_bar(),
        }
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    pub fn series(&self) -> &[BarSeries] {
        &self.series
    }

    fn max_value(&self) -> f32 {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .fold(0.0_f32, f32::max)
            .max(1.0)
    }

    fn gutter(&self) -> f32 {
        let longest = self
            .categories
            .iter()
            .flat_map(|lines| lines.iter())
            .map(|line| line.len())
            .max()
            .unwrap_or(0);

        (longest as f32 * 6.5 + 16.0).max(self.config.padding)
    }

    fn plot_area(&self, size: Size) -> Option<Rectangle> {
        let padding = self.config.padding;
        let gutter = self.gutter();

        if size.width <= gutter + padding || size.height <= padding * 2.0 {
            return None;
        }

        Some(Rectangle {
            x: gutter,
            y: padding,
            width: size.width - gutter - padding,
            height: size.height - padding * 2.0,
        })
    }

    fn bar_rect(&self, plot: Rectangle, category: usize, series: usize, value: f32) -> Rectangle {
        let band = plot.height / self.categories.len() as f32;
        let thickness = band * 0.8 / self.series.len() as f32;
        let inset = band * 0.1;

        Rectangle {
            x: plot.x,
            y: plot.y + category as f32 * band + inset + series as f32 * thickness,
            width: (value / self.max_value()) * plot.width,
            height: thickness,
        }
    }
}

impl canvas::Program<crate::message::Message> for HBarChart {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<crate::message::Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        if self.categories.is_empty() || self.series.is_empty() {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let Some(plot) = self.plot_area(frame.size()) else {
                return;
            };

            let entries: Vec<_> = self
                .series
                .iter()
                .map(|series| (series.name.clone(), series.color))
                .collect();
            legend::draw(
                frame,
                Point::new(plot.x, 6.0),
                plot.width,
                &entries,
                &self.style,
            );

            let bottom = plot.y + plot.height;
            let max = self.max_value();

            let grid_lines = self.config.grid_lines.max(1);
            for i in 0..=grid_lines {
                let t = i as f32 / grid_lines as f32;
                let x = plot.x + t * plot.width;

                if let Some(grid_color) = self.style.x_grid {
                    let line = Path::line(Point::new(x, plot.y), Point::new(x, bottom));
                    frame.stroke(
                        &line,
                        Stroke::default().with_width(1.0).with_color(grid_color),
                    );
                }

                let tick = (t * max * 100.0).round() / 100.0;
                frame.fill_text(Text {
                    content: format_millions(tick),
                    position: Point::new(x, bottom + 8.0),
                    color: self.style.tick_color,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }

            let band = plot.height / self.categories.len() as f32;
            for (category_index, lines) in self.categories.iter().enumerate() {
                let band_center = plot.y + category_index as f32 * band + band / 2.0;
                let stack_height = lines.len() as f32 * 13.0;

                for (line_index, line) in lines.iter().enumerate() {
                    frame.fill_text(Text {
                        content: line.clone(),
                        position: Point::new(
                            plot.x - 8.0,
                            band_center - stack_height / 2.0 + line_index as f32 * 13.0,
                        ),
                        color: self.style.tick_color,
                        size: 11.0.into(),
                        align_x: iced::alignment::Horizontal::Right.into(),
                        ..Text::default()
                    });
                }

                if let Some(grid_color) = self.style.y_grid {
                    let y = plot.y + category_index as f32 * band;
                    let line = Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y));
                    frame.stroke(
                        &line,
                        Stroke::default().with_width(1.0).with_color(grid_color),
                    );
                }

                for (series_index, series) in self.series.iter().enumerate() {
                    let Some(value) = series.values.get(category_index) else {
                        continue;
                    };

                    let rect = self.bar_rect(plot, category_index, series_index, *value);
                    let bar = Path::rectangle(
                        Point::new(rect.x, rect.y),
                        Size::new(rect.width, rect.height),
                    );
                    frame.fill(&bar, series.color);
                    frame.stroke(
                        &bar,
                        Stroke::default().with_width(2.0).with_color(series.border),
                    );
                }
            }

            let y_axis = Path::line(Point::new(plot.x, plot.y), Point::new(plot.x, bottom));
            frame.stroke(
                &y_axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(self.style.tick_color),
            );
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let Some(plot) = self.plot_area(bounds.size()) else {
                return geometries;
            };

            'hit: for category_index in 0..self.categories.len() {
                for (series_index, series) in self.series.iter().enumerate() {
                    let Some(value) = series.values.get(category_index) else {
                        continue;
                    };

                    let rect = self.bar_rect(plot, category_index, series_index, *value);
                    if !rect.contains(cursor_pos) {
                        continue;
                    }

                    let mut overlay = Frame::new(renderer, bounds.size());
                    let title = join_label(&self.categories[category_index]);
                    let body = format!("{}: {}", series.name, format_usd(*value as f64));
                    draw_tooltip(&mut overlay, bounds, cursor_pos, &title, &body, &self.style);
                    geometries.push(overlay.into_geometry());
                    break 'hit;
                }
            }
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
