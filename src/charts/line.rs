use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Size, Theme};

use super::format::format_usd;
use super::legend;
use super::model::{ChartConfig, ChartStyle, LineSeries};

pub struct LineChart {
    cache: Cache,
    series: Vec<LineSeries>,
    config: ChartConfig,
    style: ChartStyle,
}

impl LineChart {
    pub fn new(series: Vec<LineSeries>) -> Self {
        Self {
            cache: Cache::new(),
            series,
            config: ChartConfig::default(),
            style: ChartStyle::common(),
        }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    fn value_bounds(&self) -> Option<(f32, f32)> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;

        for series in &self.series {
            for (_, value) in &series.points {
                min = min.min(*value);
                max = max.max(*value);
            }
        }

        if !min.is_finite() {
            return None;
        }

        if min == max {
            min -= 1.0;
            max += 1.0;
        }

        Some((min, max))
    }

    fn screen_points(&self, series: &LineSeries, plot: Rectangle, range: (f32, f32)) -> Vec<Point> {
        let (min, max) = range;
        let count = series.points.len();

        series
            .points
            .iter()
            .enumerate()
            .map(|(index, (_, value))| {
                let t = if count < 2 {
                    0.5
                } else {
                    index as f32 / (count - 1) as f32
                };
                let x = plot.x + t * plot.width;
                let y = plot.y + plot.height - ((value - min) / (max - min)) * plot.height;
                Point::new(x, y)
            })
            .collect()
    }

    fn plot_area(&self, size: Size) -> Option<Rectangle> {
        let padding = self.config.padding;

        if size.width <= padding * 2.0 || size.height <= padding * 2.0 {
            return None;
        }

        Some(Rectangle {
            x: padding,
            y: padding,
            width: size.width - padding * 2.0,
            height: size.height - padding * 2.0,
        })
    }
}

fn curve_path(points: &[Point], tension: f32, close_to_baseline: Option<f32>) -> Path {
    Path::new(|builder| {
        let Some(first) = points.first() else {
            return;
        };

        builder.move_to(*first);

        if tension <= 0.0 || points.len() < 3 {
            for point in &points[1..] {
                builder.line_to(*point);
            }
        } else {
            for index in 0..points.len() - 1 {
                let previous = points[index.saturating_sub(1)];
                let start = points[index];
                let end = points[index + 1];
                let after = points[(index + 2).min(points.len() - 1)];

                let control_a = Point::new(
                    start.x + (end.x - previous.x) * tension / 3.0,
                    start.y + (end.y - previous.y) * tension / 3.0,
                );
                let control_b = Point::new(
                    end.x - (after.x - start.x) * tension / 3.0,
                    end.y - (after.y - start.y) * tension / 3.0,
                );

                builder.bezier_curve_to(control_a, control_b, end);
            }
        }

        if let Some(baseline) = close_to_baseline {
            let last = points[points.len() - 1];
            builder.line_to(Point::new(last.x, baseline));
            builder.line_to(Point::new(first.x, baseline));
            builder.close();
        }
    })
}

impl canvas::Program<crate::message::Message> for LineChart {
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
        let Some(range) = self.value_bounds() else {
            return geometries;
        };

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

            let left = plot.x;
            let top = plot.y;
            let right = plot.x + plot.width;
            let bottom = plot.y + plot.height;

            let grid_lines = self.config.grid_lines.max(1);
            for i in 0..=grid_lines {
                let t = i as f32 / grid_lines as f32;
                let y = bottom - t * plot.height;

                if let Some(grid_color) = self.style.y_grid {
                    let line = Path::line(Point::new(left, y), Point::new(right, y));
                    frame.stroke(
                        &line,
                        Stroke::default().with_width(1.0).with_color(grid_color),
                    );
                }

                let value = range.0 + t * (range.1 - range.0);
                frame.fill_text(Text {
                    content: format!("{value:.2}"),
                    position: Point::new(left - 8.0, y - 6.0),
                    color: self.style.tick_color,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Right.into(),
                    ..Text::default()
                });
            }

            if let Some(series) = self.series.first() {
                let points = self.screen_points(series, plot, range);
                for (point, (label, _)) in points.iter().zip(&series.points) {
                    if let Some(grid_color) = self.style.x_grid {
                        let line =
                            Path::line(Point::new(point.x, top), Point::new(point.x, bottom));
                        frame.stroke(
                            &line,
                            Stroke::default().with_width(1.0).with_color(grid_color),
                        );
                    }

                    frame.fill_text(Text {
                        content: label.clone(),
                        position: Point::new(point.x, bottom + 8.0),
                        color: self.style.tick_color,
                        size: 11.0.into(),
                        align_x: iced::alignment::Horizontal::Center.into(),
                        ..Text::default()
                    });
                }
            }

            for series in &self.series {
                let points = self.screen_points(series, plot, range);
                if points.len() < 2 {
                    continue;
                }

                if let Some(fill) = series.fill {
                    let area = curve_path(&points, series.tension, Some(bottom));
                    frame.fill(&area, fill);
                }

                let line = curve_path(&points, series.tension, None);
                frame.stroke(
                    &line,
                    Stroke::default().with_width(2.0).with_color(series.color),
                );

                for point in &points {
                    let marker = Path::circle(*point, self.config.point_radius);
                    frame.fill(&marker, series.color);
                }
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let Some(plot) = self.plot_area(bounds.size()) else {
                return geometries;
            };

            let mut nearest: Option<(Point, &str, &LineSeries, f32, f32)> = None;
            for series in &self.series {
                let points = self.screen_points(series, plot, range);
                for (point, (label, value)) in points.iter().zip(&series.points) {
                    let dx = point.x - cursor_pos.x;
                    let dy = point.y - cursor_pos.y;
                    let distance = dx * dx + dy * dy;

                    if nearest.map(|(.., best)| distance < best).unwrap_or(true) {
                        nearest = Some((*point, label.as_str(), series, *value, distance));
                    }
                }
            }

            if let Some((point, label, series, value, distance)) = nearest {
                if distance <= 40.0 * 40.0 {
                    let mut overlay = Frame::new(renderer, bounds.size());

                    let highlight = Path::circle(point, self.config.point_radius + 2.0);
                    overlay.stroke(
                        &highlight,
                        Stroke::default().with_width(2.0).with_color(series.color),
                    );

                    let body = format!("{}: {}", series.name, format_usd(value as f64));
                    draw_tooltip(&mut overlay, bounds, point, label, &body, &self.style);

                    geometries.push(overlay.into_geometry());
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
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

pub(super) fn draw_tooltip(
    frame: &mut Frame,
    bounds: Rectangle,
    anchor: Point,
    title: &str,
    body: &str,
    style: &ChartStyle,
) {
    let padding = 8.0;
    let width = title.len().max(body.len()) as f32 * 7.0 + padding * 2.0;
    let height = 38.0;

    let mut x = anchor.x + 12.0;
    let mut y = anchor.y - height - 12.0;

    if x + width > bounds.width {
        x = anchor.x - width - 12.0;
    }
    if y < 0.0 {
        y = anchor.y + 12.0;
    }

    let rect = Path::rectangle(Point::new(x, y), Size::new(width, height));
    frame.fill(&rect, style.tooltip_background);

    frame.fill_text(Text {
        content: title.to_owned(),
        position: Point::new(x + padding, y + 5.0),
        color: style.tooltip_text,
        size: 13.0.into(),
        ..Text::default()
    });
    frame.fill_text(Text {
        content: body.to_owned(),
        position: Point::new(x + padding, y + 21.0),
        color: style.tooltip_text,
        size: 12.0.into(),
        ..Text::default()
    });
}
