// src/api/handlers.rs
// Request handlers for the mesostic API

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::mesostic::build_mesostic;

/// JSON submission body for `POST /app`
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spinestring: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub spine: String,
    pub poem: String,
}

/// Urlencoded form body for `POST /app/{spine}`
#[derive(Debug, Deserialize)]
pub struct FormSubmit {
    #[serde(default)]
    pub text: String,
}

/// `POST /app` — JSON submission. Both fields are required.
pub async fn submit_json(
    State(state): State<Arc<AppState>>,
    Json(submit): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    if submit.text.is_empty() || submit.spinestring.is_empty() {
        return Err(ApiError::bad_request("empty text or spinestring"));
    }

    let poem = build_mesostic(&submit.spinestring, None, &submit.text)?;
    state.metrics.record_post();

    info!(spine = %submit.spinestring, "new JSON submission");
    Ok(Json(SubmitResponse {
        spine: submit.spinestring,
        poem,
    }))
}

/// `POST /app/{spine}` — form submission; the path segment is the spine.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(spine): Path<String>,
    Form(form): Form<FormSubmit>,
) -> Result<String, ApiError> {
    if form.text.is_empty() {
        return Err(ApiError::bad_request("empty text"));
    }

    let poem = build_mesostic(&spine, None, &form.text)?;
    state.metrics.record_post();

    info!(spine = %spine, "new form submission");
    Ok(poem)
}

/// `POST /upload` — multipart submission. The `source` file field holds
/// the text; an optional `spinestring` field overrides the spine.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<String, ApiError> {
    let mut source: Option<String> = None;
    let mut spine: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("unreadable multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(format!("unreadable field {name}: {e}")))?;

        match name.as_str() {
            "source" => source = Some(value),
            "spinestring" => spine = Some(value),
            _ => {}
        }
    }

    let source = source.ok_or_else(|| ApiError::bad_request("missing source field"))?;
    let spine = spine
        .or_else(|| state.config.spine_override.clone())
        .ok_or_else(|| ApiError::bad_request("missing spinestring field"))?;

    let poem = build_mesostic(&spine, None, &source)?;
    state.metrics.record_post();

    info!(spine = %spine, bytes = source.len(), "new upload");
    Ok(poem)
}

/// `GET /` — a poem chosen by chance operations from the store.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    match state.store.random().await? {
        Some((title, poem)) => Ok(format!("{title}\n\n{poem}\n")),
        None => Err(ApiError::not_found("no poems in the store yet")),
    }
}

/// `GET /ping` — readiness. Counted, not logged.
pub async fn ping(State(state): State<Arc<AppState>>) -> &'static str {
    state.metrics.record_ping();
    "pong\n"
}
