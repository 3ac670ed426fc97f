use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sequenceit_notification::{ContactSubmission, compose_contact_mail};
use serde_json::json;
use validator::Validate;

use crate::routes::AppState;

fn missing_fields() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Missing required fields" })),
    )
        .into_response()
}

fn send_failed(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to send email", "details": details })),
    )
        .into_response()
}

/// POST /api/send-email - Sends a contact submission to the contact inbox
/// over SMTP. Nothing is sent unless name, email and message are present.
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable send-email payload");
            return missing_fields();
        }
    };

    if submission.validate().is_err() {
        return missing_fields();
    }

    let mail = match compose_contact_mail(&submission, &state.config.email.contact_address) {
        Ok(mail) => mail,
        Err(err) => {
            tracing::error!(error = %err, "failed to render contact email");
            return send_failed(err.to_string());
        }
    };

    match state.mailer.send(mail).await {
        Ok(message_id) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Email sent successfully",
                "messageId": message_id,
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "failed to send contact email");
            send_failed(format!("{err:#}"))
        }
    }
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
