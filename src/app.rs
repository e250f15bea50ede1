use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, column, container, operation, row, scrollable, text, Id, Space};
use iced::{Alignment, Background, Element, Length, Task, Theme};

use crate::charts::{CanvasId, ChartRegistry};
use crate::contact::ContactForm;
use crate::figures;
use crate::message::Message;
use crate::screens::{Page, Section};
use crate::theme::{
    DRAWER_BG, DRAWER_ITEM_BG, DRAWER_TEXT_ACTIVE, DRAWER_TEXT_INACTIVE, PRIMARY_ACCENT,
};
use lucide_icons::iced::{
    icon_calendar_days, icon_car, icon_home, icon_info, icon_mail, icon_panel_left_close,
    icon_panel_left_open, icon_plane,
};

pub struct App {
    theme: Theme,
    current_page: Page,
    sidebar_collapsed: bool,
    charts: ChartRegistry,
    contact: ContactForm,
}

fn page_scroll() -> Id {
    Id::new("page-content")
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let mut app = Self {
            theme: Theme::Light,
            current_page: Page::Home,
            sidebar_collapsed: true,
            charts: ChartRegistry::default(),
            contact: ContactForm::default(),
        };
        app.sync_charts();

        (app, Task::none())
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::Navigate(page, anchor) => {
                // A same-page navigate leaves the mounted charts alone; it is
                // the "scroll to a section on this page" shortcut.
                if self.current_page != page {
                    self.current_page = page;
                    self.sync_charts();
                }

                match anchor {
                    // The section may not exist until the new page has
                    // rendered, so the scroll runs as a follow-up message.
                    Some(section) => Task::done(Message::ScrollTo(section)),
                    None => operation::snap_to(page_scroll(), RelativeOffset::START),
                }
            }
            Message::ScrollTo(section) => match self.current_page.section_offset(section) {
                Some(y) => {
                    log::debug!("scrolling to #{}", section.anchor());
                    operation::snap_to(page_scroll(), RelativeOffset { x: 0.0, y })
                }
                // The anchor is not on this page; skipping the scroll is not
                // a failure.
                None => Task::none(),
            },
            Message::ContactEdited(field, value) => {
                self.contact.field_changed(field, value);
                Task::none()
            }
            Message::ContactSubmitted => {
                if let Some(request) = self.contact.submit() {
                    // Stand-in for the external submission collaborator.
                    log::info!(
                        "contact request from {} <{}> ({}): {}",
                        request.name,
                        request.email,
                        request.company,
                        request.message
                    );
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self) -> Element<'a, Message> {
        let sidebar = self.sidebar_view();
        let content = scrollable(self.content_view())
            .id(page_scroll())
            .width(Length::Fill)
            .height(Length::Fill);

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn sync_charts(&mut self) {
        self.charts.unmount_all();

        if self.current_page == Page::Home {
            for canvas in CanvasId::ALL {
                self.charts
                    .mount(self.current_page, canvas, figures::build(canvas));
            }
        }
    }

    fn sidebar_view<'a>(&'a self) -> Element<'a, Message> {
        let toggle_icon = if self.sidebar_collapsed {
            icon_panel_left_open()
        } else {
            icon_panel_left_close()
        };

        let toggle = button(toggle_icon.size(18))
            .on_press(Message::ToggleSidebar)
            .style(|_theme, status| {
                let mut background = PRIMARY_ACCENT;
                if matches!(status, button::Status::Hovered) {
                    background.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    background.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: DRAWER_TEXT_ACTIVE,
                    ..Default::default()
                }
            });

        let pages = [
            Page::Home,
            Page::GroundSolutions,
            Page::AirTaxiSolutions,
            Page::FutureTimeline,
        ]
        .into_iter()
        .map(|page| self.sidebar_button(page));

        let shortcuts = column![
            self.shortcut_button("About", icon_info(), Section::About),
            self.shortcut_button("Contact", icon_mail(), Section::Contact),
        ]
        .spacing(6);

        let content = column![toggle, Space::new().height(Length::Fixed(12.0))]
            .push(column(pages).spacing(6))
            .push(Space::new().height(Length::Fill))
            .push(shortcuts)
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(64.0)
            } else {
                Length::Fixed(220.0)
            })
            .height(Length::Fill);

        container(content)
            .style(|_| iced::widget::container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button<'a>(&'a self, page: Page) -> Element<'a, Message> {
        let selected = self.current_page == page;
        let icon = match page {
            Page::Home => icon_home(),
            Page::GroundSolutions => icon_car(),
            Page::AirTaxiSolutions => icon_plane(),
            Page::FutureTimeline => icon_calendar_days(),
        }
        .size(18)
        .style(move |_| iced::widget::text::Style {
            color: Some(if selected {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let label_text = text(page.label()).style(move |_| iced::widget::text::Style {
            color: Some(if selected {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                icon,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            row![icon, label_text].spacing(12).align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::Navigate(page, None))
            .width(Length::Fill)
            .style(move |_, status| {
                let background = if selected {
                    PRIMARY_ACCENT
                } else {
                    DRAWER_ITEM_BG
                };

                let mut color = background;
                if matches!(status, button::Status::Hovered) {
                    color.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    color.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                }
            })
            .padding(8)
            .into()
    }

    fn shortcut_button<'a>(
        &'a self,
        label: &'static str,
        icon: iced::widget::Text<'a>,
        section: Section,
    ) -> Element<'a, Message> {
        let icon = icon.size(18).style(|_| iced::widget::text::Style {
            color: Some(DRAWER_TEXT_INACTIVE),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                icon,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            row![
                icon,
                text(label).style(|_| iced::widget::text::Style {
                    color: Some(DRAWER_TEXT_INACTIVE),
                })
            ]
            .spacing(12)
            .align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::Navigate(Page::Home, Some(section)))
            .width(Length::Fill)
            .style(|_, status| {
                let mut color = DRAWER_ITEM_BG;
                if matches!(status, button::Status::Hovered) {
                    color.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    color.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                }
            })
            .padding(8)
            .into()
    }

    fn content_view<'a>(&'a self) -> Element<'a, Message> {
        match self.current_page {
            Page::Home => crate::screens::home::view(&self.charts, &self.contact),
            Page::GroundSolutions => crate::screens::ground_solutions::view(),
            Page::AirTaxiSolutions => crate::screens::air_taxi_solutions::view(),
            Page::FutureTimeline => crate::screens::future_timeline::view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn starts_on_home_with_four_charts() {
        let app = app();
        assert_eq!(app.current_page(), Page::Home);
        assert_eq!(app.charts().live_count(), 4);
    }

    #[test]
    fn navigate_switches_the_current_page() {
        let mut app = app();

        let _ = app.update(Message::Navigate(Page::GroundSolutions, None));
        assert_eq!(app.current_page(), Page::GroundSolutions);

        let _ = app.update(Message::Navigate(Page::FutureTimeline, None));
        assert_eq!(app.current_page(), Page::FutureTimeline);
    }

    #[test]
    fn charts_mount_only_on_the_home_page() {
        let mut app = app();

        let _ = app.update(Message::Navigate(Page::GroundSolutions, None));
        assert_eq!(app.charts().live_count(), 0);

        let _ = app.update(Message::Navigate(Page::Home, None));
        assert_eq!(app.charts().live_count(), 4);
        for canvas in CanvasId::ALL {
            assert!(app.charts().get(canvas).is_some());
        }
    }

    #[test]
    fn same_page_navigate_keeps_mounted_charts() {
        let mut app = app();

        let _ = app.update(Message::Navigate(Page::Home, Some(Section::Services)));
        assert_eq!(app.charts().live_count(), 4);
    }

    #[test]
    fn anchor_navigation_scrolls_after_the_page_change() {
        let mut app = app();

        // Navigate first, then resolve the deferred scroll the way the
        // runtime would.
        let _ = app.update(Message::Navigate(Page::Home, Some(Section::Contact)));
        assert_eq!(app.current_page(), Page::Home);
        assert!(app.current_page().section_offset(Section::Contact).is_some());

        let _ = app.update(Message::ScrollTo(Section::Contact));
        assert_eq!(app.current_page(), Page::Home);
    }

    #[test]
    fn scroll_to_a_missing_anchor_is_silent() {
        let mut app = app();

        let _ = app.update(Message::Navigate(Page::GroundSolutions, None));
        assert_eq!(
            app.current_page().section_offset(Section::Services),
            None
        );
        let _ = app.update(Message::ScrollTo(Section::Services));
        assert_eq!(app.current_page(), Page::GroundSolutions);
    }

    #[test]
    fn contact_submission_round_trip() {
        use crate::contact::ContactField;

        let mut app = app();
        let _ = app.update(Message::ContactEdited(ContactField::Name, "Jane".into()));
        let _ = app.update(Message::ContactEdited(
            ContactField::Email,
            "jane@fleet.example".into(),
        ));
        let _ = app.update(Message::ContactEdited(ContactField::Message, "Hi".into()));
        let _ = app.update(Message::ContactSubmitted);

        assert!(app.contact.submitted);
        assert!(app.contact.name.is_empty());
    }
}
