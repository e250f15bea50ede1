use crate::contact::ContactField;
use crate::screens::{Page, Section};

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    Navigate(Page, Option<Section>),
    ScrollTo(Section),
    ContactEdited(ContactField, String),
    ContactSubmitted,
}
