use iced::widget::{column, container, text};
use iced::{Alignment, Element, Fill};

use crate::message::Message;
use crate::theme::{DARK_TEXT, PRIMARY_ACCENT, WHITE};

const MILESTONES: &[(&str, &str)] = &[
    ("2025", "First urban depot site study and anchor operator agreements."),
    ("2026", "Flagship ground AV depot opens: charging, servicing, dispatch."),
    ("2028", "Multi-city depot network with shared data infrastructure."),
    ("2030", "First vertiport co-located with a ground depot."),
    ("2034", "Integrated ground and air infrastructure across key metros."),
];

pub fn view<'a>() -> Element<'a, Message> {
    let hero = container(
        column![
            text("Future Timeline")
                .size(36)
                .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
            text("Where AVIM is heading as autonomous fleets scale.")
                .size(16)
                .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Fill)
    .style(|_| iced::widget::container::background(DARK_TEXT));

    let mut milestones = column![text("Our Approach, Year by Year").size(24)].spacing(16);
    for (year, description) in MILESTONES {
        milestones = milestones.push(
            column![
                text(*year).size(16).style(|_| iced::widget::text::Style {
                    color: Some(PRIMARY_ACCENT)
                }),
                text(*description).size(14),
            ]
            .spacing(4),
        );
    }

    container(column![hero, milestones].spacing(48).padding(24))
        .width(Fill)
        .into()
}
