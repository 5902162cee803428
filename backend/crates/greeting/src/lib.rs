//! Greeting API
//!
//! Three stateless routes:
//! - `GET /` - fixed welcome message
//! - `GET /saudacao/{nome}` - greets the name taken from the path
//! - `GET /soma?a=&b=` - adds two integer query parameters
//!
//! Layered like the other backend crates:
//! - `domain/` - Value objects and pure response builders
//! - `application/` - One use case per route
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Validation failures are 422 with RFC 7807 bodies listing every bad field;
//! unmatched paths are 404.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use error::{GreetingError, GreetingResult};
pub use presentation::router::greeting_router;
