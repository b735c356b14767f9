use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use team_tracker_core::errors::Error as CoreError;
use thiserror::Error;
use tower::{timeout::error::Elapsed, BoxError};

/// Field name to the messages collected for it.
pub type ValidationDetails = BTreeMap<String, Vec<String>>;

pub const VALIDATION_MESSAGE: &str = "Invalid request data";
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Invalid request data")]
    Validation { details: ValidationDetails },
    #[error("Request timed out")]
    Timeout,
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// A failure raised by a middleware layer rather than a handler.
    #[error("{0}")]
    Middleware(String),
}

impl ApiError {
    /// A validation error carrying one message for one field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut details = ValidationDetails::new();
        details.insert(field.to_string(), vec![message.into()]);
        ApiError::Validation { details }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(CoreError::TeamMemberNotFound(_)) => {
                (StatusCode::NOT_FOUND, "TEAM_MEMBER_NOT_FOUND")
            }
            ApiError::Core(CoreError::GoalNotFound(_)) => (StatusCode::NOT_FOUND, "GOAL_NOT_FOUND"),
            ApiError::Core(CoreError::Validation(_)) | ApiError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            ApiError::Timeout => (StatusCode::REQUEST_TIMEOUT, "REQUEST_TIMEOUT"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            ApiError::Core(_) | ApiError::Middleware(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ValidationDetails>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(code, error = ?self, "Request failed");
        } else {
            tracing::warn!(code, error = %self, "Request rejected");
        }

        let (message, details) = match self {
            ApiError::Validation { details } => (VALIDATION_MESSAGE.to_string(), Some(details)),
            ApiError::Core(CoreError::Validation(e)) => {
                let mut details = ValidationDetails::new();
                details.insert("request".to_string(), vec![e.to_string()]);
                (VALIDATION_MESSAGE.to_string(), Some(details))
            }
            _ if status.is_server_error() => (INTERNAL_MESSAGE.to_string(), None),
            e => (e.to_string(), None),
        };

        let body = Json(ErrorEnvelope {
            error: ErrorBody {
                code,
                message,
                details,
            },
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Turns errors from the middleware stack into enveloped responses.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Middleware(err.to_string())
    }
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_field("body", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid_field("id", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid_field("query", rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use team_tracker_core::errors::DatabaseError;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_goal_not_found_envelope() {
        let (status, body) = body_json(CoreError::GoalNotFound(42).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "GOAL_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Goal with ID 42 does not exist");
        assert!(body["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn test_validation_envelope_has_details() {
        let err = ApiError::invalid_field(
            "goalText",
            "GoalText must be between 1 and 500 characters",
        );
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Invalid request data");
        assert_eq!(
            body["error"]["details"]["goalText"][0],
            "GoalText must be between 1 and 500 characters"
        );
    }

    #[tokio::test]
    async fn test_elapsed_timeout_is_enveloped() {
        let err = handle_middleware_error(Box::new(Elapsed::new())).await;
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body["error"]["code"], "REQUEST_TIMEOUT");
        assert_eq!(body["error"]["message"], "Request timed out");
    }

    #[tokio::test]
    async fn test_other_middleware_errors_are_internal() {
        let err = handle_middleware_error("layer exploded".into()).await;
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An unexpected error occurred");
    }

    #[tokio::test]
    async fn test_database_errors_are_hidden() {
        let err = CoreError::Database(DatabaseError::QueryFailed("disk I/O error".into()));
        let (status, body) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["error"]["message"], "An unexpected error occurred");
    }
}
