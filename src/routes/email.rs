use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::AppError;
use crate::routes::AppState;
use leadrelay_contact::{ContactSubmission, DeliveryResult};

/// POST /api/email/send
///
/// Accepts the ten contact-form fields (all optional) and makes exactly one
/// delivery attempt. Success and failure both come back as structured JSON;
/// the transport's error text is passed through verbatim.
pub async fn send(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<impl IntoResponse, AppError> {
    match state.relay.relay(&submission).await {
        DeliveryResult::Sent { id } => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Email sent successfully!", "id": id })),
        )),
        DeliveryResult::Failed { error } => Err(AppError::Transport(error)),
    }
}
