mod app;
mod charts;
mod contact;
mod data;
mod figures;
mod message;
mod screens;
mod theme;

use app::App;
use iced::Settings;
use lucide_icons::LUCIDE_FONT_BYTES;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .theme(App::theme)
        .settings(Settings {
            fonts: vec![LUCIDE_FONT_BYTES.into()],
            ..Default::default()
        })
        .window_size((1280.0, 800.0))
        .run()
}
