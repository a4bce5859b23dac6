use super::*;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use std::{collections::HashMap, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

const LISTING: &str = r#"{
    "Swimming Club": {
        "description": "Laps and relays",
        "schedule": "Mondays, 4:00 PM - 5:00 PM",
        "max_participants": 2,
        "participants": ["a@x.com", "b@x.com"]
    },
    "Chess Club": {
        "description": "Learn strategies",
        "schedule": "Fridays, 3:30 PM - 5:00 PM",
        "max_participants": 12,
        "participants": []
    }
}"#;

#[derive(Clone, Default)]
struct ServerState {
    calls: Arc<Mutex<Vec<(String, String, String)>>>,
}

async fn list_activities() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], LISTING)
}

async fn broken_listing() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn malformed_listing() -> impl IntoResponse {
    Json(json!({"Chess Club": {"description": "no schedule"}}))
}

fn roster_reply(name: &str, email: &str, verb: &str) -> Response {
    match name {
        "Full" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Activity full"})),
        )
            .into_response(),
        "Quiet" => (StatusCode::BAD_REQUEST, Json(json!({}))).into_response(),
        "Broken" => (StatusCode::BAD_GATEWAY, "upstream exploded").into_response(),
        "Missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Activity not found"})),
        )
            .into_response(),
        _ => Json(json!({"message": format!("{verb} {email} for {name}")})).into_response(),
    }
}

async fn signup_handler(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let email = params.get("email").cloned().unwrap_or_default();
    state
        .calls
        .lock()
        .await
        .push(("signup".to_owned(), name.clone(), email.clone()));
    roster_reply(&name, &email, "Signed up")
}

async fn unregister_handler(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let email = params.get("email").cloned().unwrap_or_default();
    state
        .calls
        .lock()
        .await
        .push(("unregister".to_owned(), name.clone(), email.clone()));
    roster_reply(&name, &email, "Unregistered")
}

async fn spawn_backend() -> anyhow::Result<(Url, ServerState)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let state = ServerState::default();
    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup_handler))
        .route("/activities/:name/unregister", delete(unregister_handler))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((Url::parse(&format!("http://{addr}"))?, state))
}

async fn spawn_listing_only(app: Router) -> anyhow::Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(Url::parse(&format!("http://{addr}"))?)
}

#[test]
fn endpoint_encodes_path_segments() {
    let base = Url::parse("http://localhost:8000").unwrap();
    let url = endpoint(&base, &["activities", "Chess Club", "signup"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/activities/Chess%20Club/signup");

    let url = endpoint(&base, &["activities", "AC/DC Fans", "signup"]).unwrap();
    assert_eq!(url.path(), "/activities/AC%2FDC%20Fans/signup");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let base = Url::parse("http://school.example/api/?stale=1").unwrap();
    let url = endpoint(&base, &["activities"]).unwrap();
    assert_eq!(url.as_str(), "http://school.example/api/activities");
}

#[test]
fn rejects_base_without_path() {
    let base = Url::parse("mailto:office@school.example").unwrap();
    assert!(matches!(
        HttpDataClient::new(base),
        Err(ClientError::InvalidBaseUrl(_))
    ));
}

#[tokio::test]
async fn fetches_catalog_in_listing_order() {
    let (base, _) = spawn_backend().await.expect("spawn server");
    let client = HttpDataClient::new(base).unwrap();

    let catalog = client.fetch_activities().await.expect("catalog");
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, ["Swimming Club", "Chess Club"]);
    assert_eq!(
        catalog.get("Swimming Club").unwrap().participants,
        ["a@x.com", "b@x.com"]
    );
}

#[tokio::test]
async fn listing_error_status_is_fetch_failure() {
    let base = spawn_listing_only(Router::new().route("/activities", get(broken_listing)))
        .await
        .expect("spawn server");
    let client = HttpDataClient::new(base).unwrap();

    let err = client.fetch_activities().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch activities");
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn malformed_listing_is_an_error() {
    let base = spawn_listing_only(Router::new().route("/activities", get(malformed_listing)))
        .await
        .expect("spawn server");
    let client = HttpDataClient::new(base).unwrap();

    let err = client.fetch_activities().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpDataClient::new(Url::parse(&format!("http://{addr}")).unwrap()).unwrap();
    let err = client.fetch_activities().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "{err:?}");
}

#[tokio::test]
async fn signup_encodes_name_and_email() {
    let (base, state) = spawn_backend().await.expect("spawn server");
    let client = HttpDataClient::new(base).unwrap();

    let response = client
        .signup(&SignupRequest::new("Chess Club", "mary+chess@mergington.edu"))
        .await
        .expect("signup");
    assert_eq!(
        response.message,
        "Signed up mary+chess@mergington.edu for Chess Club"
    );

    let calls = state.calls.lock().await;
    assert_eq!(
        *calls,
        [(
            "signup".to_owned(),
            "Chess Club".to_owned(),
            "mary+chess@mergington.edu".to_owned()
        )]
    );
}

#[tokio::test]
async fn signup_rejection_uses_detail() {
    let (base, _) = spawn_backend().await.expect("spawn server");
    let client = HttpDataClient::new(base).unwrap();

    let err = client
        .signup(&SignupRequest::new("Full", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Activity full");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

    let err = client
        .signup(&SignupRequest::new("Missing", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Activity not found");
}

#[tokio::test]
async fn signup_rejection_without_detail_falls_back() {
    let (base, _) = spawn_backend().await.expect("spawn server");
    let client = HttpDataClient::new(base).unwrap();

    let err = client
        .signup(&SignupRequest::new("Quiet", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Signup failed");

    let err = client
        .signup(&SignupRequest::new("Broken", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown error");
}

#[tokio::test]
async fn unregister_sends_delete() {
    let (base, state) = spawn_backend().await.expect("spawn server");
    let client = HttpDataClient::new(base).unwrap();

    let response = client
        .unregister(&SignupRequest::new("Drama Club", "a@x.com"))
        .await
        .expect("unregister");
    assert_eq!(response.message, "Unregistered a@x.com for Drama Club");

    let err = client
        .unregister(&SignupRequest::new("Quiet", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unregister failed");

    let calls = state.calls.lock().await;
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(verb, _, _)| verb == "unregister"));
}
