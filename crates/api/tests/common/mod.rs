//! Shared helpers for HTTP-level integration tests.
//!
//! Mounts minimal echo handlers behind [`ValidatedJson`] so tests exercise
//! the extractor and error responses exactly as a real router would.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::{post, put};
use axum::{Json, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;
use ucn_api::error::AppResult;
use ucn_api::extract::ValidatedJson;
use ucn_api::response::DataResponse;
use ucn_api::state::AppState;
use ucn_core::config::ValidationConfig;
use ucn_core::validation::{ChangePassword, LoginRequest, RegisterUser, UpdateProfile};

/// Build a test router with the default validation configuration.
pub fn build_test_app() -> Router {
    build_test_app_with(ValidationConfig::default())
}

/// Build a test router with an explicit validation configuration.
pub fn build_test_app_with(config: ValidationConfig) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/change-password", put(change_password))
        .route("/update-profile", put(update_profile))
        .with_state(AppState::new(config))
}

async fn register(
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<DataResponse<serde_json::Value>>)> {
    let data = serde_json::json!({
        "email": input.email,
        "dni": input.dni,
        "full_name": input.full_name,
        "birthday": input.birthday,
    });
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

async fn login(
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<DataResponse<String>>> {
    Ok(Json(DataResponse { data: input.email }))
}

async fn change_password(
    ValidatedJson(_input): ValidatedJson<ChangePassword>,
) -> AppResult<StatusCode> {
    Ok(StatusCode::NO_CONTENT)
}

async fn update_profile(
    ValidatedJson(input): ValidatedJson<UpdateProfile>,
) -> AppResult<Json<DataResponse<Option<String>>>> {
    Ok(Json(DataResponse { data: input.email }))
}

/// Send a request with a JSON body.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// PUT a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a raw (possibly malformed) body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
