//! Web Error Types
//!
//! Errors raised by page handlers and their conversion to HTML error
//! pages with appropriate status codes. Backend response bodies never
//! reach the page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::BackendError;
use crate::web::pages;

/// Web layer error types
#[derive(Error, Debug)]
pub enum WebError {
    /// Backend call failed
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebError {
    /// HTTP status and machine-readable code for the error
    pub fn status_code(&self) -> (StatusCode, &'static str) {
        match self {
            WebError::Backend(BackendError::Timeout) => {
                (StatusCode::GATEWAY_TIMEOUT, "BACKEND_TIMEOUT")
            }
            WebError::Backend(BackendError::InvalidBaseUrl(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            WebError::Backend(_) => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR"),
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            WebError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }

    /// Message safe to show to the user
    fn user_message(&self) -> &'static str {
        match self {
            WebError::Backend(BackendError::Timeout) => "The backend did not respond in time.",
            WebError::Backend(_) => "Failed to fetch data from the backend.",
            _ => "Something went wrong.",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Request failed"
        );

        let page = pages::error_page(status, self.user_message(), &request_id);

        (status, page).into_response()
    }
}

/// Result type for page handlers
pub type WebResult<T> = Result<T, WebError>;
