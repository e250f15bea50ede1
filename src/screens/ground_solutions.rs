use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::message::Message;
use crate::screens::{Page, Section};
use crate::theme::{accent_button_style, PRIMARY_ACCENT, WHITE};

pub fn view<'a>() -> Element<'a, Message> {
    let hero = container(
        column![
            text("Ground AV Solutions")
                .size(36)
                .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
            text("Depots, charging yards, and servicing facilities for autonomous ground fleets.")
                .size(16)
                .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Fill)
    .style(|_| iced::widget::container::background(PRIMARY_ACCENT));

    let the_need = column![
        text("The Need").size(24),
        text(
            "Ground AV operators carry every cost of fleet readiness themselves: charging, \
             cleaning, calibration, storage, and dispatch. Each city launch repeats the same \
             capital-heavy build-out."
        )
        .size(14),
    ]
    .spacing(12);

    let our_facilities = column![
        text("Our Facilities").size(24),
        row![
            facility("Charging Yards", "High-throughput DC charging with automated handling."),
            facility("Service Bays", "Sensor calibration, cleaning, and preventive maintenance."),
            facility("Dispatch Hubs", "Staging, data offload, and fleet turnaround in one site."),
        ]
        .spacing(16),
    ]
    .spacing(12);

    let problem_solve = column![
        text("What We Solve").size(24),
        text(
            "AVIM turns per-city infrastructure projects into a service contract: one partner, \
             one depot footprint, predictable operating cost per vehicle."
        )
        .size(14),
        button(text("Talk to our team").size(14))
            .on_press(Message::Navigate(Page::Home, Some(Section::Contact)))
            .style(accent_button_style)
            .padding(10),
    ]
    .spacing(12);

    container(
        column![hero, the_need, our_facilities, problem_solve]
            .spacing(48)
            .padding(24),
    )
    .width(Fill)
    .into()
}

fn facility<'a>(title: &'static str, body: &'static str) -> Element<'a, Message> {
    container(column![text(title).size(16), text(body).size(13)].spacing(6))
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}
