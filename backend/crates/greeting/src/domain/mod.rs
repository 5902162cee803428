//! Domain Layer
//!
//! Value objects and the pure functions that produce response values.

pub mod services;
pub mod value_objects;

// Re-exports
pub use value_objects::{Operand, PersonName, SumOperands};
