use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;

use crate::error::{AppError, LIST_FAILED};
use crate::models::Submission;
use crate::state::SharedState;
use crate::submission::{fields, parser};

pub const SAVED: &str = "✅ Message saved!";

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let raw = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;
    tracing::debug!("Incoming form data: {raw}");

    let input = fields::extract(&raw)?;
    let submission = state.submissions.submit(input).await?;
    tracing::info!(id = %submission.id, "Contact message saved");

    Ok((StatusCode::CREATED, SAVED))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state
        .submissions
        .list()
        .await
        .map_err(|e| AppError::store(LIST_FAILED, e))?;
    Ok(Json(submissions))
}
