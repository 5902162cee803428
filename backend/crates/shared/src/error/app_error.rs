//! Application Error - Unified error type for the application
//!
//! Defines the [`AppError`] struct.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::field::FieldError;
use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// すべてのルートが最終的にこの型でエラーを返します。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `action` - ユーザーが取るべきアクション（オプション）
/// * `errors` - 検証に失敗したパラメータの一覧
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::AppError;
/// use kernel::error::field::{FieldError, FieldLocation};
///
/// let err = AppError::unprocessable("Request validation failed")
///     .with_field_error(FieldError::missing(FieldLocation::Query, "a", "integer"))
///     .with_action("Send both `a` and `b` as integers");
/// assert_eq!(err.status_code(), 422);
/// assert_eq!(err.field_errors().len(), 1);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    errors: Vec<FieldError>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            errors: Vec::new(),
            source: None,
        }
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 422 Unprocessable Entity エラー
    #[inline]
    pub fn unprocessable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// ユーザー向けアクションを設定
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 検証エラーを 1 件追加
    #[inline]
    pub fn with_field_error(mut self, error: FieldError) -> Self {
        self.errors.push(error);
        self
    }

    /// 検証エラーをまとめて追加
    pub fn with_field_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = FieldError>,
    {
        self.errors.extend(errors);
        self
    }

    /// 元のエラーを設定（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[inline]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if !self.errors.is_empty() {
            builder.field("errors", &self.errors);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::field::FieldLocation;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Route not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Route not found");
        assert!(err.action().is_none());
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::not_found("test").status_code(), 404);
        assert_eq!(AppError::unprocessable("test").status_code(), 422);
    }

    #[test]
    fn test_field_errors_accumulate() {
        let err = AppError::unprocessable("Request validation failed")
            .with_field_error(FieldError::missing(FieldLocation::Query, "a", "integer"))
            .with_field_errors([FieldError::invalid(
                FieldLocation::Query,
                "b",
                "integer",
                "abc",
            )]);

        let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, ["a", "b"]);
    }

    #[test]
    fn test_with_source() {
        let parse_err = "abc".parse::<i64>().unwrap_err();
        let err = AppError::unprocessable("Invalid integer").with_source(parse_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("Route not found");
        assert_eq!(err.to_string(), "[Not Found] Route not found");

        let err = AppError::unprocessable("Request validation failed")
            .with_field_error(FieldError::missing(FieldLocation::Query, "b", "integer"))
            .with_action("Retry with an integer");
        assert_eq!(
            err.to_string(),
            "[Unprocessable Entity] Request validation failed; query.b: Field required (Action: Retry with an integer)"
        );
    }
}
