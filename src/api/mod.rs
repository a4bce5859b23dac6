//! HTTP access to the activities backend.

pub mod activities;
pub mod signup;

use crate::error::ClientError;
use crate::models::{ActivityCatalog, SignupRequest, SignupResponse};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// The network operations the controller depends on.
#[async_trait]
pub trait DataClient: Send + Sync {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ClientError>;

    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ClientError>;

    async fn unregister(&self, request: &SignupRequest) -> Result<SignupResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpDataClient {
    client: Client,
    base_url: Url,
}

impl HttpDataClient {
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(HttpDataClient { client, base_url })
    }
}

#[async_trait]
impl DataClient for HttpDataClient {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ClientError> {
        activities::get_activities(&self.client, &self.base_url).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ClientError> {
        signup::post_signup(&self.client, &self.base_url, request).await
    }

    async fn unregister(&self, request: &SignupRequest) -> Result<SignupResponse, ClientError> {
        signup::delete_signup(&self.client, &self.base_url, request).await
    }
}

/// Appends percent-encoded path segments to `base_url`, dropping any query.
pub(crate) fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
