//! Axum integration - renders [`AppError`] as an HTTP response

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::app_error::AppError;

impl AppError {
    /// RFC 7807 Problem Details body
    ///
    /// `errors` is only present when field-level validation errors were attached.
    pub fn problem_details(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        if !self.field_errors().is_empty() {
            body["errors"] = serde_json::json!(self.field_errors());
        }

        body
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.problem_details())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::field::{FieldError, FieldLocation};

    #[test]
    fn test_not_found_body_has_no_errors() {
        let body = AppError::not_found("Route not found").problem_details();
        assert_eq!(body["status"], 404);
        assert_eq!(body["title"], "Not Found");
        assert_eq!(body["detail"], "Route not found");
        assert!(body["action"].is_null());
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let body = AppError::unprocessable("Request validation failed")
            .with_field_error(FieldError::invalid(
                FieldLocation::Query,
                "a",
                "integer",
                "foo",
            ))
            .problem_details();

        assert_eq!(body["status"], 422);
        assert_eq!(body["type"], "https://httpstatuses.io/422");
        assert_eq!(body["errors"][0]["field"], "a");
        assert_eq!(body["errors"][0]["location"], "query");
        assert_eq!(body["errors"][0]["expected"], "integer");
        assert_eq!(body["errors"][0]["input"], "foo");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::unprocessable("bad").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
