use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Fill, Length};
use lucide_icons::iced::{icon_car, icon_hard_drive, icon_plane};

use crate::charts::{CanvasId, ChartRegistry, MountedChart};
use crate::contact::{ContactField, ContactForm};
use crate::data::annual_cost;
use crate::figures::{
    AnnualCostFigure, AvMarketFigure, InitialInvestmentFigure, RobotaxiMarketFigure,
};
use crate::message::Message;
use crate::screens::{Page, Section};
use crate::theme::{
    accent_button_style, card_button_style, DARK_TEXT, GREY_DARK, PRIMARY_ACCENT, WHITE,
};

pub fn view<'a>(charts: &'a ChartRegistry, contact: &'a ContactForm) -> Element<'a, Message> {
    let content = column![
        hero(),
        services(),
        infographic(charts),
        about(),
        partnerships(),
        careers(),
        investors(),
        news(),
        contact_section(contact),
    ]
    .spacing(48)
    .padding(24);

    container(content).width(Fill).into()
}

fn hero<'a>() -> Element<'a, Message> {
    let cta = button(text("Discover Our Solutions").size(16))
        .on_press(Message::Navigate(Page::Home, Some(Section::Services)))
        .style(accent_button_style)
        .padding(12);

    let content = column![
        text("Empowering the Future of Autonomous Mobility")
            .size(40)
            .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
        text(
            "AVIM provides the essential infrastructure solutions that enable autonomous \
             vehicle companies to scale efficiently and focus on their core technology."
        )
        .size(18)
        .style(|_| iced::widget::text::Style { color: Some(WHITE) }),
        cta,
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .padding(48)
        .width(Fill)
        .style(|_| iced::widget::container::background(PRIMARY_ACCENT))
        .into()
}

fn services<'a>() -> Element<'a, Message> {
    let cards = row![
        service_card(
            icon_car(),
            "Ground AV Solutions",
            "Comprehensive infrastructure for autonomous ground vehicles.",
            Message::Navigate(Page::GroundSolutions, None),
        ),
        service_card(
            icon_plane(),
            "Air Taxi Solutions",
            "Pioneering vertiport development for urban air mobility.",
            Message::Navigate(Page::AirTaxiSolutions, None),
        ),
        service_card(
            icon_hard_drive(),
            "AV Data & Operations Hubs",
            "Physical hubs for secure data storage, high-volume charging, and integrated \
             operational support.",
            Message::Navigate(Page::Home, Some(Section::InfographicSection)),
        ),
    ]
    .spacing(16);

    column![section_heading("Our Core Infrastructure Services"), cards]
        .spacing(24)
        .into()
}

fn service_card<'a>(
    icon: iced::widget::Text<'a>,
    title: &'static str,
    description: &'static str,
    on_press: Message,
) -> Element<'a, Message> {
    let body = column![
        icon.size(32).style(|_| iced::widget::text::Style {
            color: Some(PRIMARY_ACCENT)
        }),
        text(title).size(18),
        text(description).size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Fill);

    button(body)
        .on_press(on_press)
        .style(card_button_style)
        .padding(20)
        .width(Fill)
        .into()
}

fn infographic(charts: &ChartRegistry) -> Element<'_, Message> {
    let header = column![
        text("Our Vision: The Road Ahead").size(32).style(|_| {
            iced::widget::text::Style {
                color: Some(PRIMARY_ACCENT),
            }
        }),
        text("Understanding the Compelling Case for AV Infrastructure-as-a-Service").size(18),
        text(
            "Dive deep into the data supporting the crucial need for outsourced, specialized \
             infrastructure for autonomous vehicle companies."
        )
        .size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let market_growth = column![
        section_heading("An Unprecedented Growth Trajectory"),
        row![
            chart_section(
                AvMarketFigure::title(),
                AvMarketFigure::subtitle(),
                charts.get(CanvasId::AvMarket),
            ),
            chart_section(
                RobotaxiMarketFigure::title(),
                RobotaxiMarketFigure::subtitle(),
                charts.get(CanvasId::RobotaxiMarket),
            ),
        ]
        .spacing(16),
    ]
    .spacing(24);

    let financial_burden = column![
        section_heading("The High Cost of Going It Alone"),
        text(
            "AV companies face immense capital and operational expenditures, tying up \
             resources that could be focused on core technology development."
        )
        .size(14),
        row![
            chart_section(
                AnnualCostFigure::title(),
                AnnualCostFigure::subtitle(),
                charts.get(CanvasId::AnnualCost),
            ),
            chart_section(
                InitialInvestmentFigure::title(),
                InitialInvestmentFigure::subtitle(),
                charts.get(CanvasId::InitialInvestment),
            ),
        ]
        .spacing(16),
    ]
    .spacing(16);

    column![
        header,
        market_growth,
        financial_burden,
        iaas_model(),
        service_breakdown(),
        conclusion(),
    ]
    .spacing(48)
    .into()
}

// Renders the section frame even when its chart never mounted; the canvas
// slot simply stays empty.
fn chart_section<'a>(
    title: &'static str,
    subtitle: &'static str,
    chart: Option<&'a MountedChart>,
) -> Element<'a, Message> {
    let mut section = column![text(title).size(18), text(subtitle).size(14)].spacing(8);

    if let Some(chart) = chart {
        section = section.push(chart.view());
    }

    container(section)
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}

fn iaas_model<'a>() -> Element<'a, Message> {
    let light = |content: &'static str| {
        text(content)
            .size(14)
            .style(|_| iced::widget::text::Style { color: Some(WHITE) })
    };

    let fragmented = column![
        light("The Current Fragmented Model"),
        light("Mapping vendor, charging network, maintenance shop, software provider,"),
        light("calibration service, data annotator."),
        light("Complex, costly, and inefficient multi-vendor management."),
    ]
    .spacing(6)
    .width(Fill);

    let integrated = column![
        light("The Integrated IaaS Model"),
        light("One partner for data, charging, maintenance, and operations."),
        light("Simple, scalable, and cost-effective single-point solution."),
    ]
    .spacing(6)
    .width(Fill);

    let content = column![
        text("The Strategic Shift: Infrastructure-as-a-Service")
            .size(24)
            .style(|_| iced::widget::text::Style {
                color: Some(PRIMARY_ACCENT)
            }),
        light(
            "By outsourcing infrastructure, AV operators convert heavy capital expenditures \
             into predictable operational costs."
        ),
        row![fragmented, integrated].spacing(24),
    ]
    .spacing(16);

    container(content)
        .padding(32)
        .width(Fill)
        .style(|_| iced::widget::container::background(DARK_TEXT))
        .into()
}

fn service_breakdown<'a>() -> Element<'a, Message> {
    let pillar = |title: &'static str, body: &'static str, callout: &'static str| {
        container(
            column![
                text(title).size(18),
                text(body).size(14),
                text(callout).size(13).style(|_| iced::widget::text::Style {
                    color: Some(GREY_DARK)
                }),
            ]
            .spacing(8),
        )
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
    };

    column![
        section_heading("The Three Pillars of AV Infrastructure"),
        row![
            pillar(
                "AV Data Management & Storage",
                "On-site, secure data storage and management so AV companies can offload \
                 massive data burdens and focus on analysis.",
                "Key challenge: AVs generate petabytes of data daily.",
            ),
            pillar(
                "Automated Charging & Depots",
                "Full-service charging depots: site selection, permitting, automated vehicle \
                 handling, cleaning, and smart energy management.",
                "Key insight: local operations account for ~50% of shared AV mobility costs.",
            ),
            pillar(
                "Specialized Maintenance",
                "AI-driven predictive diagnostics and precise calibration of sensitive \
                 sensors like LiDAR and cameras.",
                "Key requirement: sensors require annual recalibration.",
            ),
        ]
        .spacing(16),
    ]
    .spacing(24)
    .into()
}

fn conclusion<'a>() -> Element<'a, Message> {
    let cta = button(text("Partner With The Future").size(16))
        .on_press(Message::Navigate(Page::Home, Some(Section::Contact)))
        .style(accent_button_style)
        .padding(12);

    column![
        section_heading("A Clear and Compelling Market Need"),
        text(
            "The path to profitability for AV companies is paved with efficiency. The immense \
             costs and operational complexity of building proprietary infrastructure create an \
             undeniable opportunity for an integrated, scalable third-party provider."
        )
        .size(14),
        cta,
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn about<'a>() -> Element<'a, Message> {
    let leader = |name: &'static str, role: &'static str, bio: &'static str| {
        container(
            column![
                text(name).size(16),
                text(role).size(13).style(|_| iced::widget::text::Style {
                    color: Some(PRIMARY_ACCENT)
                }),
                text(bio).size(13),
            ]
            .spacing(4),
        )
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
    };

    column![
        section_heading("About AVIM"),
        text(
            "AVIM is an infrastructure development company focused on the critical needs of \
             emerging autonomous vehicle and electric fleet industries: purpose-built real \
             estate for charging, storage, servicing, and dispatching, starting in key urban \
             markets."
        )
        .size(14),
        text("Meet Our Leadership").size(20),
        row![
            leader(
                "Teddy O'Brien",
                "CEO & Co-founder",
                "Driving the vision for autonomous vehicle infrastructure.",
            ),
            leader(
                "Jane Doe",
                "COO & Co-founder",
                "Visionary in urban tech and smart infrastructure.",
            ),
            leader(
                "John Smith",
                "CTO & Co-founder",
                "AI and robotics expert in complex autonomous systems.",
            ),
        ]
        .spacing(16),
    ]
    .spacing(24)
    .into()
}

fn partnerships<'a>() -> Element<'a, Message> {
    let cta = button(text("Explore Partnership Opportunities").size(14))
        .on_press(Message::Navigate(Page::Home, Some(Section::Contact)))
        .style(accent_button_style)
        .padding(10);

    column![
        section_heading("Partner with AVIM"),
        text(
            "AVIM partners with AV companies, electric fleet operators, and urban developers \
             to provide the specialized infrastructure needed for efficient, expansive \
             operations."
        )
        .size(14),
        cta,
    ]
    .spacing(16)
    .into()
}

fn careers<'a>() -> Element<'a, Message> {
    let job = |title: &'static str, terms: &'static str, body: &'static str| {
        container(
            column![
                text(title).size(16),
                text(terms).size(13).style(|_| iced::widget::text::Style {
                    color: Some(PRIMARY_ACCENT)
                }),
                text(body).size(13),
                button(text("Apply Now").size(13))
                    .on_press(Message::Navigate(Page::Home, Some(Section::Contact)))
                    .style(accent_button_style)
                    .padding(8),
            ]
            .spacing(8),
        )
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
    };

    column![
        section_heading("Join Our Team"),
        row![
            job(
                "Real Estate Development Lead",
                "Full-time | Denver, CO",
                "Lead site acquisition, zoning, and development for our initial AV/EV fleet \
                 depots in target urban markets.",
            ),
            job(
                "Infrastructure Project Manager",
                "Full-time | Flexible (US-based)",
                "Oversee the design, construction, and integration of charging, servicing, \
                 and connectivity infrastructure within AV/EV depots.",
            ),
        ]
        .spacing(16),
    ]
    .spacing(24)
    .into()
}

fn investors<'a>() -> Element<'a, Message> {
    column![
        section_heading("Investors"),
        text(format!(
            "Every fleet vehicle carries roughly {} in annual operating burden. AVIM converts \
             that recurring spend into infrastructure revenue at depot scale.",
            crate::charts::format::format_usd(annual_cost::total() as f64)
        ))
        .size(14),
    ]
    .spacing(16)
    .into()
}

fn news<'a>() -> Element<'a, Message> {
    column![
        section_heading("News"),
        text(
            "AVIM announces its first urban depot site study and a partnership program for \
             early AV fleet operators."
        )
        .size(14),
    ]
    .spacing(16)
    .into()
}

fn contact_field<'a>(
    placeholder: &'static str,
    value: &'a str,
    target: ContactField,
) -> iced::widget::TextInput<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |value| Message::ContactEdited(target, value))
        .padding(10)
}

fn contact_section(contact: &ContactForm) -> Element<'_, Message> {
    let mut form = column![
        contact_field("Name", &contact.name, ContactField::Name),
        contact_field("Email", &contact.email, ContactField::Email),
        contact_field("Company", &contact.company, ContactField::Company),
        contact_field("How can we help?", &contact.message, ContactField::Message),
        button(text("Send Message").size(14))
            .on_press(Message::ContactSubmitted)
            .style(accent_button_style)
            .padding(10),
    ]
    .spacing(12)
    .max_width(480);

    if contact.submitted {
        form = form.push(text("Thanks! We'll be in touch.").size(14).style(|_| {
            iced::widget::text::Style {
                color: Some(PRIMARY_ACCENT),
            }
        }));
    }

    column![
        section_heading("Contact"),
        form,
        Space::new().height(Length::Fixed(24.0)),
    ]
    .spacing(16)
    .into()
}

fn section_heading<'a>(title: &'static str) -> Element<'a, Message> {
    text(title).size(24).into()
}
