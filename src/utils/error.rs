use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{context}")]
    Database {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn database(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Database {
            context: context.into(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound(msg) => {
                error!(message = %msg, "Resource not found");
            }
            AppError::Database { context, source } => {
                error!(error = ?source, message = %context, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        self.log();

        // Not-found responses carry only a message; store failures also
        // attach the underlying cause for diagnostics.
        let (message, cause) = match self {
            AppError::NotFound(msg) => (msg, None),
            AppError::Database { context, source } => (context, Some(source.to_string())),
        };

        error_response(message, cause, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("Ticket not found or already closed.".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let err = AppError::database("Failed to create ticket", sqlx::Error::PoolClosed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_display_uses_context() {
        let err = AppError::database("Failed to close ticket", sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "Failed to close ticket");
    }
}
