use crate::error::ClientError;
use crate::models::{SignupRequest, SignupResponse};
use log::{debug, error, info};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use url::Url;

use super::endpoint;

pub const SIGNUP_FALLBACK: &str = "Signup failed";
pub const UNREGISTER_FALLBACK: &str = "Unregister failed";
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub async fn post_signup(
    client: &Client,
    base_url: &Url,
    request: &SignupRequest,
) -> Result<SignupResponse, ClientError> {
    send_roster_change(client, base_url, request, Method::POST, "signup", SIGNUP_FALLBACK).await
}

pub async fn delete_signup(
    client: &Client,
    base_url: &Url,
    request: &SignupRequest,
) -> Result<SignupResponse, ClientError> {
    send_roster_change(
        client,
        base_url,
        request,
        Method::DELETE,
        "unregister",
        UNREGISTER_FALLBACK,
    )
    .await
}

async fn send_roster_change(
    client: &Client,
    base_url: &Url,
    request: &SignupRequest,
    method: Method,
    action: &str,
    fallback: &str,
) -> Result<SignupResponse, ClientError> {
    let mut url = endpoint(base_url, &["activities", &request.activity_name, action])?;
    url.query_pairs_mut().append_pair("email", &request.email);

    debug!("{} {} for {}", method, url, request.email);
    let resp = client.request(method, url).send().await?;

    if resp.status().is_success() {
        let response = resp.json::<SignupResponse>().await?;
        info!(
            "{} accepted for {} in {}",
            action, request.email, request.activity_name
        );
        Ok(response)
    } else {
        let err = rejection(resp, fallback).await;
        error!("{} rejected: {}", action, err);
        Err(err)
    }
}

async fn rejection(resp: Response, fallback: &str) -> ClientError {
    let status = resp.status();
    let detail = match resp.bytes().await {
        Ok(body) => detail_from_body(&body, fallback),
        Err(_) => UNKNOWN_ERROR.to_owned(),
    };
    ClientError::Rejected { status, detail }
}

/// Picks the user-facing text out of an error body: its `detail` when set, the
/// fallback when the body is JSON without one, "Unknown error" when it is not JSON.
pub fn detail_from_body(body: &[u8], fallback: &str) -> String {
    let body = match serde_json::from_slice::<Value>(body) {
        Ok(body) => body,
        Err(_) => return UNKNOWN_ERROR.to_owned(),
    };

    match body.get("detail") {
        None | Some(Value::Null) => fallback.to_owned(),
        Some(Value::String(detail)) if detail.is_empty() => fallback.to_owned(),
        Some(Value::String(detail)) => detail.clone(),
        Some(other) => other.to_string(),
    }
}
