//! Turns catalog data into page elements.

use crate::dom::Element;
use crate::formatter::initials_from_email;
use crate::models::{Activity, ActivityCatalog};

pub const EMPTY_CATALOG_TEXT: &str = "No activities available.";
pub const LOAD_FAILURE_TEXT: &str = "Unable to load activities.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const PLACEHOLDER_AVATAR: &str = "–";

pub const ACTIVITY_CARD_CLASS: &str = "activity-card";
pub const UNREGISTER_CLASS: &str = "unregister";

/// Writes a catalog into the page. Swappable so the controller can be driven
/// without the element builders below.
pub trait Renderer: Send {
    fn render_activities(
        &self,
        list: &mut Element,
        select: &mut Element,
        catalog: &ActivityCatalog,
    );

    fn render_load_failure(&self, list: &mut Element);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomRenderer;

impl Renderer for DomRenderer {
    fn render_activities(
        &self,
        list: &mut Element,
        select: &mut Element,
        catalog: &ActivityCatalog,
    ) {
        render_activities(list, select, catalog);
    }

    fn render_load_failure(&self, list: &mut Element) {
        replace_with_notice(list, LOAD_FAILURE_TEXT);
    }
}

fn avatar(initials: impl Into<String>) -> Element {
    Element::new("span").with_class("avatar").with_text(initials)
}

fn participant_entry(activity_name: &str, email: &str) -> Element {
    Element::new("li")
        .with_child(avatar(initials_from_email(email)))
        .with_child(Element::new("span").with_class("email").with_text(email))
        .with_child(
            Element::new("button")
                .with_class(UNREGISTER_CLASS)
                .with_attribute("data-activity", activity_name)
                .with_attribute("data-email", email)
                .with_text("Unregister"),
        )
}

/// Titled roster for one activity, or a placeholder entry when nobody signed up.
pub fn build_participants_list(activity_name: &str, participants: &[String]) -> Element {
    let mut list = Element::new("ul").with_class("participants-list");

    if participants.is_empty() {
        list.append_child(
            Element::new("li")
                .with_child(avatar(PLACEHOLDER_AVATAR))
                .with_child(
                    Element::new("span")
                        .with_class("email")
                        .with_text(NO_PARTICIPANTS_TEXT),
                ),
        );
    } else {
        for email in participants {
            list.append_child(participant_entry(activity_name, email));
        }
    }

    Element::new("div")
        .with_class("participants")
        .with_child(Element::new("h5").with_text("Participants"))
        .with_child(list)
}

pub fn build_activity_card(activity: &Activity) -> Element {
    Element::new("div")
        .with_class(ACTIVITY_CARD_CLASS)
        .with_child(Element::new("h4").with_text(&activity.name))
        .with_child(Element::new("p").with_text(&activity.description))
        .with_child(Element::new("p").with_text(format!("Schedule: {}", activity.schedule)))
        .with_child(Element::new("p").with_text(format!("Capacity: {}", activity.capacity_label())))
        .with_child(build_participants_list(&activity.name, &activity.participants))
}

pub fn build_option(name: &str) -> Element {
    Element::new("option")
        .with_attribute("value", name)
        .with_text(name)
}

fn replace_with_notice(list: &mut Element, text: &str) {
    list.clear();
    list.append_child(Element::new("p").with_text(text));
}

/// Rebuilds the card list and the select options from `catalog`.
///
/// Only the placeholder option (empty value) survives a render. An empty catalog
/// swaps the list for a notice and adds no options, so a fresh select stays as it was.
pub fn render_activities(list: &mut Element, select: &mut Element, catalog: &ActivityCatalog) {
    select.retain_children(|option| option.value().is_empty());

    if catalog.is_empty() {
        replace_with_notice(list, EMPTY_CATALOG_TEXT);
    } else {
        list.clear();
        for activity in catalog {
            list.append_child(build_activity_card(activity));
            select.append_child(build_option(&activity.name));
        }
    }

    if catalog.get(select.value()).is_none() {
        select.set_value("");
    }
}
