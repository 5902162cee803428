//! Domain Services
//!
//! Pure functions that build the response values.

use crate::domain::value_objects::{PersonName, SumOperands};

const WELCOME_MESSAGE: &str = "Olá, mundo! 🚀";

/// Fixed greeting served at `/`
pub fn welcome_message() -> &'static str {
    WELCOME_MESSAGE
}

/// `Olá, {nome}!` with the name interpolated as-is
pub fn greeting_for(name: &PersonName) -> String {
    format!("Olá, {}!", name)
}

/// Sum of both operands, `None` when it does not fit in an `i64`
pub fn checked_sum(operands: &SumOperands) -> Option<i64> {
    operands.a.value().checked_add(operands.b.value())
}
