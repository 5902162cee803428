//! Greeting Error Types
//!
//! Route-level error variants that render through the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::error::field::{FieldError, FieldLocation};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

use crate::domain::value_objects::NAME_FIELD;

/// Greeting-specific result type alias
pub type GreetingResult<T> = Result<T, GreetingError>;

/// Greeting-specific error variants
#[derive(Debug, Error)]
pub enum GreetingError {
    /// No registered route matches the request path
    #[error("Route not found: {path}")]
    RouteNotFound { path: String },

    /// One or more request parameters failed validation
    #[error("Request validation failed")]
    Validation(Vec<FieldError>),

    /// The path segment could not be extracted (e.g. not UTF-8 once decoded)
    #[error("Invalid path parameter")]
    InvalidPath {
        field: FieldError,
        #[source]
        source: PathRejection,
    },

    /// The query string could not be deserialized (e.g. a repeated key)
    #[error("Invalid query string")]
    InvalidQuery {
        field: FieldError,
        #[source]
        source: QueryRejection,
    },

    /// `a + b` does not fit in a signed 64-bit integer
    #[error("Sum of {a} and {b} is out of range")]
    SumOutOfRange { a: i64, b: i64 },
}

impl GreetingError {
    pub fn invalid_path(source: PathRejection) -> Self {
        let field = FieldError::new(FieldLocation::Path, NAME_FIELD, "string", source.body_text());
        GreetingError::InvalidPath { field, source }
    }

    pub fn invalid_query(source: QueryRejection) -> Self {
        let field = FieldError::new(
            FieldLocation::Query,
            "query",
            "urlencoded query string",
            source.body_text(),
        );
        GreetingError::InvalidQuery { field, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GreetingError::RouteNotFound { .. } => ErrorKind::NotFound,
            GreetingError::Validation(_)
            | GreetingError::InvalidPath { .. }
            | GreetingError::InvalidQuery { .. }
            | GreetingError::SumOutOfRange { .. } => ErrorKind::UnprocessableEntity,
        }
    }

    /// Convert to AppError, keeping extractor rejections as the error source
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        let message = self.to_string();

        match self {
            GreetingError::RouteNotFound { .. } => AppError::not_found("Route not found"),
            GreetingError::Validation(errors) => {
                AppError::new(kind, message).with_field_errors(errors)
            }
            GreetingError::InvalidPath { field, source } => AppError::new(kind, message)
                .with_field_error(field)
                .with_source(source),
            GreetingError::InvalidQuery { field, source } => AppError::new(kind, message)
                .with_field_error(field)
                .with_source(source),
            GreetingError::SumOutOfRange { .. } => AppError::new(kind, message)
                .with_field_error(FieldError::new(
                    FieldLocation::Response,
                    "resultado",
                    "integer",
                    "Result does not fit in a 64-bit signed integer",
                ))
                .with_action("Use smaller operands"),
        }
    }

    fn log(&self) {
        match self {
            GreetingError::RouteNotFound { path } => {
                tracing::debug!(path = %path, "No route matched");
            }
            GreetingError::Validation(errors) => {
                tracing::debug!(
                    error_count = errors.len(),
                    error = %self,
                    "Rejected request parameters"
                );
            }
            GreetingError::InvalidPath { source, .. } => {
                tracing::debug!(error = %source, "Path extraction rejected");
            }
            GreetingError::InvalidQuery { source, .. } => {
                tracing::debug!(error = %source, "Query extraction rejected");
            }
            GreetingError::SumOutOfRange { a, b } => {
                tracing::debug!(a = *a, b = *b, "Sum overflowed");
            }
        }
    }
}

impl IntoResponse for GreetingError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<Vec<FieldError>> for GreetingError {
    fn from(errors: Vec<FieldError>) -> Self {
        GreetingError::Validation(errors)
    }
}

impl From<FieldError> for GreetingError {
    fn from(error: FieldError) -> Self {
        GreetingError::Validation(vec![error])
    }
}
