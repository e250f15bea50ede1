use iced::mouse;
use iced::widget::canvas::{self, path::Arc, Cache, Frame, Geometry, Path, Stroke};
use iced::{Point, Radians, Rectangle, Renderer, Size, Theme};

use super::format::format_usd;
use super::legend;
use super::line::draw_tooltip;
use super::model::{ChartStyle, DoughnutSlice, LegendPosition};

const CUTOUT: f32 = 0.5;

pub struct DoughnutChart {
    cache: Cache,
    name: String,
    slices: Vec<DoughnutSlice>,
    border: iced::Color,
    border_width: f32,
    style: ChartStyle,
}

impl DoughnutChart {
    pub fn new(name: impl Into<String>, slices: Vec<DoughnutSlice>) -> Self {
        Self {
            cache: Cache::new(),
            name: name.into(),
            slices,
            border: crate::theme::WHITE,
            border_width: 3.0,
            style: ChartStyle::doughnut(),
        }
    }

    pub fn with_border(mut self, border: iced::Color, width: f32) -> Self {
        self.border = border;
        self.border_width = width;
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn slices(&self) -> &[DoughnutSlice] {
        &self.slices
    }

    fn legend_entries(&self) -> Vec<(String, iced::Color)> {
        self.slices
            .iter()
            .map(|slice| (slice.label.clone(), slice.color))
            .collect()
    }

    fn ring(&self, size: Size) -> (Point, f32, f32) {
        let legend_space = match self.style.legend_position {
            LegendPosition::Bottom { padding } => {
                padding + legend::measure(size.width - 24.0, &self.legend_entries())
            }
            LegendPosition::Top => 0.0,
        };

        let plot_height = (size.height - legend_space).max(1.0);
        let center = Point::new(size.width / 2.0, plot_height / 2.0);
        let outer = (size.width.min(plot_height) * 0.35).max(1.0);

        (center, outer, outer * CUTOUT)
    }
}

impl canvas::Program<crate::message::Message> for DoughnutChart {
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
        if self.slices.is_empty() {
            return geometries;
        }

        let total: f32 = self.slices.iter().map(|slice| slice.value).sum();
        if total <= 0.0 {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let size = frame.size();
            let (center, outer, inner) = self.ring(size);

            let mut start = -std::f32::consts::FRAC_PI_2;
            for slice in &self.slices {
                let sweep = (slice.value / total) * std::f32::consts::TAU;
                let segment = ring_segment(center, outer, inner, start, start + sweep);

                frame.fill(&segment, slice.color);
                frame.stroke(
                    &segment,
                    Stroke::default()
                        .with_width(self.border_width)
                        .with_color(self.border),
                );

                start += sweep;
            }

            if let LegendPosition::Bottom { padding } = self.style.legend_position {
                let entries = self.legend_entries();
                let height = legend::measure(size.width - 24.0, &entries);
                legend::draw(
                    frame,
                    Point::new(12.0, size.height - height - padding / 2.0),
                    size.width - 24.0,
                    &entries,
                    &self.style,
                );
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let (center, outer, inner) = self.ring(bounds.size());

            if let Some(index) = hit_test(&self.slices, total, center, outer, inner, cursor_pos) {
                let slice = &self.slices[index];
                let mut overlay = Frame::new(renderer, bounds.size());

                let mut start = -std::f32::consts::FRAC_PI_2;
                for previous in &self.slices[..index] {
                    start += (previous.value / total) * std::f32::consts::TAU;
                }
                let sweep = (slice.value / total) * std::f32::consts::TAU;
                let segment = ring_segment(center, outer, inner, start, start + sweep);
                overlay.fill(&segment, brighten(slice.color, 1.15));
                overlay.stroke(
                    &segment,
                    Stroke::default()
                        .with_width(self.border_width)
                        .with_color(self.border),
                );

                let body = format!("{}: {}", self.name, format_usd(slice.value as f64));
                draw_tooltip(&mut overlay, bounds, cursor_pos, &slice.label, &body, &self.style);

                geometries.push(overlay.into_geometry());
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

fn ring_segment(center: Point, outer: f32, inner: f32, start: f32, end: f32) -> Path {
    Path::new(|builder| {
        builder.move_to(Point::new(
            center.x + outer * start.cos(),
            center.y + outer * start.sin(),
        ));
        builder.arc(Arc {
            center,
            radius: outer,
            start_angle: Radians(start),
            end_angle: Radians(end),
        });
        builder.line_to(Point::new(
            center.x + inner * end.cos(),
            center.y + inner * end.sin(),
        ));
        builder.arc(Arc {
            center,
            radius: inner,
            start_angle: Radians(end),
            end_angle: Radians(start),
        });
        builder.close();
    })
}

fn hit_test(
    slices: &[DoughnutSlice],
    total: f32,
    center: Point,
    outer: f32,
    inner: f32,
    cursor_pos: Point,
) -> Option<usize> {
    let dx = cursor_pos.x - center.x;
    let dy = cursor_pos.y - center.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance < inner || distance > outer {
        return None;
    }

    let mut angle = dy.atan2(dx);
    if angle < -std::f32::consts::FRAC_PI_2 {
        angle += std::f32::consts::TAU;
    }

    let mut start = -std::f32::consts::FRAC_PI_2;
    for (index, slice) in slices.iter().enumerate() {
        let sweep = (slice.value / total) * std::f32::consts::TAU;
        if angle >= start && angle <= start + sweep {
            return Some(index);
        }
        start += sweep;
    }

    None
}

fn brighten(color: iced::Color, factor: f32) -> iced::Color {
    iced::Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        a: color.a,
    }
}
