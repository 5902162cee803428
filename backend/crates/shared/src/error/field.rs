//! Field Error - Per-parameter validation failures
//!
//! A [`FieldError`] names one request parameter that failed validation,
//! where it was read from, and the type it was expected to have.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// パラメータの取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    /// URL パスのセグメント
    Path,
    /// クエリ文字列
    Query,
    /// レスポンスの算出値
    Response,
}

impl FieldLocation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldLocation::Path => "path",
            FieldLocation::Query => "query",
            FieldLocation::Response => "response",
        }
    }
}

/// 検証に失敗したパラメータ 1 件分
///
/// ## Examples
/// ```rust
/// use kernel::error::field::{FieldError, FieldLocation};
///
/// let err = FieldError::missing(FieldLocation::Query, "b", "integer");
/// assert_eq!(err.field(), "b");
/// assert!(err.input().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    location: FieldLocation,
    field: Cow<'static, str>,
    expected: Cow<'static, str>,
    message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
}

impl FieldError {
    pub fn new(
        location: FieldLocation,
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            location,
            field: field.into(),
            expected: expected.into(),
            message: message.into(),
            input: None,
        }
    }

    /// 必須パラメータが送られなかった
    pub fn missing(
        location: FieldLocation,
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(location, field, expected, "Field required")
    }

    /// 値は送られたが期待した型として解釈できなかった
    pub fn invalid(
        location: FieldLocation,
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
        input: impl Into<String>,
    ) -> Self {
        let expected = expected.into();
        let message = format!("Input should be a valid {}", expected);
        Self::new(location, field, expected, message).with_input(input)
    }

    /// 受け取った生の入力値を記録
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn location(&self) -> FieldLocation {
        self.location
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}: {}",
            self.location.as_str(),
            self.field,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing() {
        let err = FieldError::missing(FieldLocation::Query, "a", "integer");
        assert_eq!(err.location(), FieldLocation::Query);
        assert_eq!(err.expected(), "integer");
        assert_eq!(err.message(), "Field required");
        assert_eq!(err.to_string(), "query.a: Field required");
    }

    #[test]
    fn test_invalid_keeps_input() {
        let err = FieldError::invalid(FieldLocation::Query, "b", "integer", "abc");
        assert_eq!(err.input(), Some("abc"));
        assert_eq!(err.message(), "Input should be a valid integer");
    }

    #[test]
    fn test_serialize_skips_absent_input() {
        let err = FieldError::missing(FieldLocation::Query, "b", "integer");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location": "query",
                "field": "b",
                "expected": "integer",
                "message": "Field required",
            })
        );
    }
}
