//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

use super::helpers;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Dotted error key for programmatic handling (e.g. "error.idexists")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Entity the error relates to, when one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            entity: None,
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Rejected entity operation that also carries failure alert headers
    BadRequestAlert {
        entity_name: String,
        error_key: String,
        message: String,
    },
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    /// Build the alert-carrying rejection used by the entity handlers.
    pub fn bad_request_alert(
        entity_name: impl Into<String>,
        error_key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        AppError::BadRequestAlert {
            entity_name: entity_name.into(),
            error_key: error_key.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequestAlert {
                entity_name,
                error_key,
                message,
            } => {
                let headers = helpers::create_failure_alert(&entity_name, &error_key, &message);
                let error =
                    ApiError::new(format!("error.{}", error_key), message).with_entity(entity_name);
                (StatusCode::BAD_REQUEST, headers, Json(error)).into_response()
            }
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ApiError::new("error.notfound", msg)),
            )
                .into_response(),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("error.badrequest", msg)),
            )
                .into_response(),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("error.internal", msg)),
            )
                .into_response(),
            AppError::Repository(e) => {
                let (status, code) = match &e {
                    RepositoryError::NotFound(_) => (StatusCode::NOT_FOUND, "error.notfound"),
                    RepositoryError::ValidationError(_) => {
                        (StatusCode::BAD_REQUEST, "error.validation")
                    }
                    RepositoryError::ConfigurationError(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "error.configuration")
                    }
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "error.repository"),
                };
                (status, Json(ApiError::new(code, e.to_string()))).into_response()
            }
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
