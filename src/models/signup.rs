use serde::Deserialize;

/// Built from the form on submit and dropped once the request finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity_name: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(activity_name: impl Into<String>, email: impl Into<String>) -> Self {
        SignupRequest {
            activity_name: activity_name.into(),
            email: email.into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: String,
}
