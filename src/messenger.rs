use crate::dom::Element;
use crate::models::{Severity, StatusMessage};

/// Overwrites the status banner: exactly `message <severity>` as classes, new text, visible.
pub fn show_message(banner: &mut Element, message: &StatusMessage) {
    banner.clear_classes();
    banner.add_class("message");
    banner.add_class(message.severity.class_name());
    banner.set_text(&message.text);
}

/// Reads back what [`show_message`] wrote, if the banner is showing anything.
pub fn current_message(banner: &Element) -> Option<StatusMessage> {
    if banner.is_hidden() || !banner.has_class("message") {
        return None;
    }
    let severity = banner
        .classes()
        .iter()
        .find_map(|class| Severity::from_class_name(class))
        .unwrap_or_default();
    Some(StatusMessage::new(banner.text(), severity))
}
