use iced::widget::canvas::{Frame, Path, Text};
use iced::{Color, Point, Size};

use super::model::ChartStyle;

const SWATCH: f32 = 12.0;
const ROW_HEIGHT: f32 = 18.0;
const ITEM_GAP: f32 = 16.0;

// Height the entries will consume when drawn into the given width.
pub fn measure(width: f32, entries: &[(String, iced::Color)]) -> f32 {
    let mut x = 0.0;
    let mut rows = 1.0;

    for (label, _) in entries {
        let item_width = SWATCH + 6.0 + label.len() as f32 * 7.0;

        if x > 0.0 && x + item_width > width {
            x = 0.0;
            rows += 1.0;
        }

        x += item_width + ITEM_GAP;
    }

    rows * ROW_HEIGHT
}

// Lays out swatch + label entries left to right, wrapping into extra rows
// when the width runs out. Returns the total height consumed.
pub fn draw(
    frame: &mut Frame,
    origin: Point,
    width: f32,
    entries: &[(String, Color)],
    style: &ChartStyle,
) -> f32 {
    let mut x = origin.x;
    let mut y = origin.y;

    for (label, color) in entries {
        let item_width = SWATCH + 6.0 + label.len() as f32 * 7.0;

        if x > origin.x && x + item_width > origin.x + width {
            x = origin.x;
            y += ROW_HEIGHT;
        }

        let swatch = Path::rectangle(
            Point::new(x, y + (ROW_HEIGHT - SWATCH) / 2.0),
            Size::new(SWATCH, SWATCH),
        );
        frame.fill(&swatch, *color);

        frame.fill_text(Text {
            content: label.clone(),
            position: Point::new(x + SWATCH + 6.0, y + 3.0),
            color: style.legend_color,
            size: 12.0.into(),
            ..Text::default()
        });

        x += item_width + ITEM_GAP;
    }

    y - origin.y + ROW_HEIGHT
}
