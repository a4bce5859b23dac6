//! In-memory document model the renderer writes into and the window paints.

use std::collections::BTreeMap;

pub const ACTIVITIES_LIST_ID: &str = "activities-list";
pub const ACTIVITY_SELECT_ID: &str = "activity";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";

pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn clear_classes(&mut self) {
        self.classes.clear();
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// The `value` attribute, empty when unset.
    pub fn value(&self) -> &str {
        self.attribute("value").unwrap_or_default()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.set_attribute("value", value);
    }

    /// Own text only; see [`Element::text_content`] for the subtree.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Concatenated text of this element and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn retain_children(&mut self, keep: impl FnMut(&Element) -> bool) {
        self.children.retain(keep);
    }

    /// Drops all children and own text, like assigning an empty `innerHTML`.
    pub fn clear(&mut self) {
        self.text.clear();
        self.children.clear();
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(HIDDEN_CLASS)
    }

    /// Depth-first search of this subtree, including `self`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// All elements in this subtree matching `predicate`, in document order.
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if predicate(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(predicate, found);
        }
    }
}

/// The elements the controller binds to, looked up by their fixed ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub activities_list: Element,
    pub message: Element,
    signup_form: Element,
}

impl Page {
    pub fn new() -> Self {
        let placeholder = Element::new("option")
            .with_attribute("value", "")
            .with_text("-- Select an activity --");

        let signup_form = Element::new("form")
            .with_id(SIGNUP_FORM_ID)
            .with_child(
                Element::new("input")
                    .with_id(EMAIL_INPUT_ID)
                    .with_attribute("type", "email")
                    .with_attribute("value", ""),
            )
            .with_child(
                Element::new("select")
                    .with_id(ACTIVITY_SELECT_ID)
                    .with_attribute("value", "")
                    .with_child(placeholder),
            );

        Page {
            activities_list: Element::new("div")
                .with_id(ACTIVITIES_LIST_ID)
                .with_child(Element::new("p").with_text("Loading activities...")),
            signup_form,
            message: Element::new("div")
                .with_id(MESSAGE_ID)
                .with_class(HIDDEN_CLASS),
        }
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        [&self.activities_list, &self.signup_form, &self.message]
            .into_iter()
            .find_map(|root| root.find(&|el: &Element| el.id() == Some(id)))
    }

    pub fn email_input(&self) -> &Element {
        &self.signup_form.children[0]
    }

    pub fn activity_select(&self) -> &Element {
        &self.signup_form.children[1]
    }

    /// Borrows the list and the select together, as the renderer needs both.
    pub fn render_targets(&mut self) -> (&mut Element, &mut Element) {
        (&mut self.activities_list, &mut self.signup_form.children[1])
    }

    pub fn email_input_mut(&mut self) -> &mut Element {
        &mut self.signup_form.children[0]
    }

    pub fn activity_select_mut(&mut self) -> &mut Element {
        &mut self.signup_form.children[1]
    }

    pub fn set_form_values(&mut self, email: &str, activity: &str) {
        self.email_input_mut().set_value(email);
        self.activity_select_mut().set_value(activity);
    }

    pub fn reset_form(&mut self) {
        self.set_form_values("", "");
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new()
    }
}
