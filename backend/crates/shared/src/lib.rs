//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the API vocabulary:
//! - The unified error type and result alias
//! - Field-level validation errors reported to clients
//! - RFC 7807 rendering of errors (feature `axum`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all routes.

pub mod error {
    pub mod app_error;
    pub mod field;
    pub mod kind;
    #[cfg(feature = "axum")]
    pub mod response;
}
