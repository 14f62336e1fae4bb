use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

/// Map a domain failure to an HTTP response.
///
/// `NameMismatch` gets the same 404 as `NotFound` but a distinct `error`
/// code, so callers can tell "no such id" apart from "id exists, name filter
/// failed".
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        DomainError::NameMismatch => {
            json_error(StatusCode::NOT_FOUND, "name_mismatch", "item name does not match")
        }
        DomainError::AlreadyExists(id) => json_error(
            StatusCode::CONFLICT,
            "already_exists",
            format!("item '{id}' already exists"),
        ),
        DomainError::InvalidItem(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_item", msg),
        DomainError::InvalidArgument(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", msg)
        }
        DomainError::Internal(msg) => {
            tracing::error!(error = %msg, "internal inventory failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
