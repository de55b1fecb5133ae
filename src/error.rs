use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gmail::GmailError;

/// Application error type.
///
/// Every failure a handler can hit is translated into one of these variants so
/// that downstream faults never reach the client unclassified.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid authorization code")]
    InvalidAuthorizationCode,

    #[error("No e-statement found")]
    StatementNotFound,

    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GmailError> for ApiError {
    fn from(e: GmailError) -> Self {
        match e {
            GmailError::CodeRejected => ApiError::InvalidAuthorizationCode,
            GmailError::NoStatement => ApiError::StatementNotFound,
            GmailError::Api { status } => {
                ApiError::UpstreamUnavailable(format!("gmail api returned status {status}"))
            }
            GmailError::Http(e) => ApiError::UpstreamUnavailable(e.to_string()),
        }
    }
}

impl ApiError {
    /// 401 responses carry a Bearer challenge, as the token endpoint's clients
    /// expect.
    fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::InvalidCredentials | ApiError::InvalidToken)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::EmailTaken => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidCredentials | ApiError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            ApiError::InvalidAuthorizationCode => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::StatementNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::UpstreamUnavailable(msg) => {
                tracing::error!(error = %msg, "upstream failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream service unavailable".to_string(),
                )
            }
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let challenge = self.is_auth_failure();
        let mut response = (status, Json(json!({ "error": message }))).into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
