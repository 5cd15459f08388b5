use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pdv_core::DomainError;

/// Map a domain failure onto an HTTP response.
///
/// The message is `Display` output: fixed user-facing wording for the
/// business-rule kinds, the collaborator's own wording for `NotFound`.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::AlreadyProcessed => {
            json_error(StatusCode::CONFLICT, "already_processed", message)
        }
        DomainError::DuplicateLine => json_error(StatusCode::CONFLICT, "duplicate_line", message),
        DomainError::InsertFailed
        | DomainError::RemoveFailed
        | DomainError::SaveFailed
        | DomainError::DeleteFailed => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
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
