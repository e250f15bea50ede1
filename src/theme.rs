use iced::{widget::button, Background, Color, Theme};

pub const PRIMARY_ACCENT: Color = Color::from_rgb8(0xff, 0x7f, 0x00);
pub const SECONDARY_ACCENT: Color = Color::from_rgb8(0x80, 0x80, 0x80);
pub const DARK_TEXT: Color = Color::from_rgb8(0x33, 0x33, 0x33);
pub const LIGHT_BG: Color = Color::from_rgb8(0xf8, 0xf8, 0xf8);
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

pub const ORANGE_LIGHT: Color = Color::from_rgb8(0xff, 0x99, 0x33);
pub const ORANGE_DARK: Color = Color::from_rgb8(0xcc, 0x66, 0x00);
pub const ORANGE_PALE: Color = Color::from_rgb8(0xff, 0xbf, 0x80);
pub const GREY_LIGHT: Color = Color::from_rgb8(0xa0, 0xa0, 0xa0);
pub const GREY_DARK: Color = Color::from_rgb8(0x66, 0x66, 0x66);

pub const GRID_LINE: Color = Color::from_rgba8(0x80, 0x80, 0x80, 0.1);
pub const TOOLTIP_BG: Color = Color::from_rgba8(0x33, 0x33, 0x33, 0.9);

pub const DRAWER_BG: Color = Color::from_rgb8(0x26, 0x21, 0x1c);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x33, 0x2a, 0x22);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xff, 0xf4, 0xe8);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0xb3, 0xa8, 0x9c);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xff, 0xf7, 0xef);

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = PRIMARY_ACCENT;

    if matches!(status, button::Status::Hovered) {
        background.a = 0.85;
    }

    if matches!(status, button::Status::Pressed) {
        background.a = 0.7;
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_ON_ACCENT,
        ..Default::default()
    }
}

pub fn card_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = WHITE;

    if matches!(status, button::Status::Hovered) {
        background = LIGHT_BG;
    }

    if matches!(status, button::Status::Pressed) {
        background.a = 0.9;
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: DARK_TEXT,
        ..Default::default()
    }
}
