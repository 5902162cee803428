//! Application Layer
//!
//! One use case per route.

pub mod greet;
pub mod sum;
pub mod welcome;

// Re-exports
pub use greet::{GreetOutput, greet};
pub use sum::{SumInput, SumOutput, sum};
pub use welcome::{WelcomeOutput, welcome};
