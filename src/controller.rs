//! Load → render → submit → reload cycle, one function per transition.

use crate::api::DataClient;
use crate::dom::Page;
use crate::error::{LoadError, SignupError};
use crate::messenger::show_message;
use crate::models::{ActivityCatalog, SignupRequest, SignupResponse, StatusMessage};
use crate::renderer::{DomRenderer, Renderer};
use log::{debug, warn};
use std::fmt::Display;

const LOAD_FALLBACK: &str = "Error loading activities";
const SIGNUP_FALLBACK: &str = "Signup failed";
const UNREGISTER_FALLBACK: &str = "Unregister failed";
const SIGNED_UP: &str = "Signed up successfully";
const UNREGISTERED: &str = "Unregistered successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Loading,
    /// Interactive. `load_failed` marks a list showing the failure notice.
    Rendered { load_failed: bool },
    Submitting,
    /// Interactive after a rejected signup or unregister; the form is untouched.
    ErrorShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, no request sent.
    Invalid,
    Rejected,
    /// Request accepted and the catalog reloaded.
    Accepted,
}

pub struct Controller<C, R = DomRenderer> {
    client: C,
    renderer: R,
    page: Page,
    state: ControllerState,
}

impl<C: DataClient> Controller<C, DomRenderer> {
    pub fn new(client: C, page: Page) -> Self {
        Controller::with_renderer(client, DomRenderer, page)
    }
}

impl<C: DataClient, R: Renderer> Controller<C, R> {
    pub fn with_renderer(client: C, renderer: R, page: Page) -> Self {
        Controller {
            client,
            renderer,
            page,
            state: ControllerState::Loading,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn on_page_ready(&mut self) {
        self.load().await;
    }

    pub async fn load(&mut self) {
        self.begin_load();
        let result = self.client.fetch_activities().await.map_err(LoadError::from);
        self.finish_load(result);
    }

    pub fn begin_load(&mut self) {
        debug!("{:?} -> Loading", self.state);
        self.state = ControllerState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<ActivityCatalog, LoadError>) {
        match result {
            Ok(catalog) => {
                let (list, select) = self.page.render_targets();
                self.renderer.render_activities(list, select, &catalog);
                self.state = ControllerState::Rendered { load_failed: false };
            }
            Err(e) => {
                warn!("Loading activities failed (status {:?}): {}", e.status(), e);
                self.renderer.render_load_failure(&mut self.page.activities_list);
                self.show(StatusMessage::error(error_text(&e, LOAD_FALLBACK)));
                self.state = ControllerState::Rendered { load_failed: true };
            }
        }
        debug!("Loading -> {:?}", self.state);
    }

    pub async fn on_submit(&mut self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(_) => return SubmitOutcome::Invalid,
        };

        let result = self.client.signup(&request).await.map_err(SignupError::from);
        let outcome = self.finish_submit(result);
        if outcome == SubmitOutcome::Accepted {
            self.load().await;
        }
        outcome
    }

    /// Reads the form. Blank fields leave the state as it was and show a validation error.
    pub fn begin_submit(&mut self) -> Result<SignupRequest, SignupError> {
        let email = self.page.email_input().value().trim().to_owned();
        let activity = self.page.activity_select().value().to_owned();

        if email.is_empty() || activity.is_empty() {
            let err = SignupError::MissingFields;
            self.show(StatusMessage::error(err.to_string()));
            return Err(err);
        }

        debug!("{:?} -> Submitting", self.state);
        self.state = ControllerState::Submitting;
        Ok(SignupRequest::new(activity, email))
    }

    pub fn finish_submit(&mut self, result: Result<SignupResponse, SignupError>) -> SubmitOutcome {
        match result {
            Ok(response) => {
                self.show(StatusMessage::success(or_default(response.message, SIGNED_UP)));
                self.page.reset_form();
                SubmitOutcome::Accepted
            }
            Err(e) => {
                warn!("Signup failed (status {:?}): {}", e.status(), e);
                self.show(StatusMessage::error(error_text(&e, SIGNUP_FALLBACK)));
                self.state = ControllerState::ErrorShown;
                SubmitOutcome::Rejected
            }
        }
    }

    pub async fn on_unregister(&mut self, activity_name: &str, email: &str) -> SubmitOutcome {
        let request = self.begin_unregister(activity_name, email);
        let result = self.client.unregister(&request).await.map_err(SignupError::from);
        let outcome = self.finish_unregister(result);
        if outcome == SubmitOutcome::Accepted {
            self.load().await;
        }
        outcome
    }

    pub fn begin_unregister(&mut self, activity_name: &str, email: &str) -> SignupRequest {
        debug!("{:?} -> Submitting (unregister)", self.state);
        self.state = ControllerState::Submitting;
        SignupRequest::new(activity_name, email)
    }

    pub fn finish_unregister(
        &mut self,
        result: Result<SignupResponse, SignupError>,
    ) -> SubmitOutcome {
        match result {
            Ok(response) => {
                self.show(StatusMessage::success(or_default(response.message, UNREGISTERED)));
                SubmitOutcome::Accepted
            }
            Err(e) => {
                warn!("Unregister failed (status {:?}): {}", e.status(), e);
                self.show(StatusMessage::error(error_text(&e, UNREGISTER_FALLBACK)));
                self.state = ControllerState::ErrorShown;
                SubmitOutcome::Rejected
            }
        }
    }

    fn show(&mut self, message: StatusMessage) {
        show_message(&mut self.page.message, &message);
    }
}

fn error_text(err: &impl Display, fallback: &str) -> String {
    or_default(err.to_string(), fallback)
}

fn or_default(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_owned()
    } else {
        text
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
