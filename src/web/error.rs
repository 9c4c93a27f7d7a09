//! Web error types for the activities API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::registry::RegistryError;

/// Error type for web API operations.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request with validation error.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body; `detail` matches the API contract.
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<RegistryError> for WebError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ActivityNotFound(_) => {
                WebError::NotFound("Activity not found".to_string())
            }
            RegistryError::AlreadyRegistered { activity, email } => WebError::BadRequest(format!(
                "{email} is already signed up for {activity}"
            )),
            RegistryError::NotRegistered { activity, email } => {
                WebError::BadRequest(format!("{email} is not signed up for {activity}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_kinds_map_to_contractual_details() {
        let not_found: WebError =
            RegistryError::ActivityNotFound("Ghost Club".to_string()).into();
        assert!(matches!(not_found, WebError::NotFound(ref msg) if msg == "Activity not found"));

        let duplicate: WebError = RegistryError::AlreadyRegistered {
            activity: "Chess Club".to_string(),
            email: "x@e.edu".to_string(),
        }
        .into();
        assert!(
            matches!(duplicate, WebError::BadRequest(ref msg) if msg.contains("already signed up"))
        );

        let absent: WebError = RegistryError::NotRegistered {
            activity: "Chess Club".to_string(),
            email: "x@e.edu".to_string(),
        }
        .into();
        assert!(matches!(absent, WebError::BadRequest(ref msg) if msg.contains("not signed up")));
    }
}
