use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::message::Message;
use crate::screens::{Page, Section};
use crate::theme::{accent_button_style, SECONDARY_ACCENT, WHITE};

pub fn view<'a>() -> Element<'a, Message> {
    let hero = container(
        column![
            text("Air Taxi Solutions")
                .size(36)
                .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
            text("Vertiport development for urban air mobility, from siting to operations.")
                .size(16)
                .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Fill)
    .style(|_| iced::widget::container::background(SECONDARY_ACCENT));

    let our_approach = column![
        text("Our Approach").size(24),
        text(
            "Urban air mobility needs ground infrastructure before the first passenger flight: \
             landing pads, charging, passenger handling, and airspace-adjacent permitting. AVIM \
             develops vertiport sites in step with operator route plans."
        )
        .size(14),
    ]
    .spacing(12);

    let our_facilities = column![
        text("Our Facilities").size(24),
        row![
            capability("Vertiport Pads", "Rooftop and ground-level landing infrastructure."),
            capability("eVTOL Charging", "High-rate charging matched to aircraft duty cycles."),
            capability("Passenger Lounges", "Boarding, safety screening, and transfers."),
        ]
        .spacing(16),
        button(text("Plan a route with us").size(14))
            .on_press(Message::Navigate(Page::Home, Some(Section::Contact)))
            .style(accent_button_style)
            .padding(10),
    ]
    .spacing(12);

    container(column![hero, our_approach, our_facilities].spacing(48).padding(24))
        .width(Fill)
        .into()
}

fn capability<'a>(title: &'static str, body: &'static str) -> Element<'a, Message> {
    container(column![text(title).size(16), text(body).size(13)].spacing(6))
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}
