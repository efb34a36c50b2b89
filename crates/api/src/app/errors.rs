use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use foodlab_repository::RepositoryError;

/// Map repository insertion failures to protocol responses.
///
/// A generator invariant violation is an internal fault and must never
/// be presented as not-found; it has already been logged by the store.
pub fn repository_error_to_response(err: RepositoryError<u64>) -> axum::response::Response {
    match err {
        RepositoryError::DuplicateId { .. } => {
            json_error(StatusCode::CONFLICT, "conflict", err.to_string())
        }
        RepositoryError::IdGenerationConflict { .. } => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

pub fn human_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "human not found")
}

pub fn favorite_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "favorite not found")
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
