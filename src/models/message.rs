#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class_name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn from_class_name(class: &str) -> Option<Severity> {
        match class {
            "info" => Some(Severity::Info),
            "success" => Some(Severity::Success),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        StatusMessage {
            text: text.into(),
            severity,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }
}
