//! Domain Value Objects
//!
//! Immutable, already-validated request inputs.

use kernel::error::field::{FieldError, FieldLocation};
use std::fmt;

/// Path parameter holding the name to greet
pub const NAME_FIELD: &str = "nome";

/// Query parameter names of the two summands
pub const LEFT_OPERAND_FIELD: &str = "a";
pub const RIGHT_OPERAND_FIELD: &str = "b";

const INTEGER: &str = "integer";
const STRING: &str = "string";

/// Name taken verbatim from the `/saudacao/{nome}` segment
///
/// No format rules apply beyond being non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(FieldError::missing(FieldLocation::Path, NAME_FIELD, STRING));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signed 64-bit integer read from a query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand(i64);

impl Operand {
    /// Parse the raw query value of `field`
    ///
    /// Surrounding ASCII whitespace is ignored, a leading `+` or `-` is accepted, and
    /// so is a fractional part made only of zeros (`3.0`, `3.`). A missing value and an
    /// unparsable value are reported differently so the client can tell which one happened.
    pub fn parse(field: &'static str, raw: Option<&str>) -> Result<Self, FieldError> {
        let raw = raw.ok_or_else(|| FieldError::missing(FieldLocation::Query, field, INTEGER))?;

        strip_zero_fraction(raw.trim_ascii())
            .parse::<i64>()
            .map(Self)
            .map_err(|_| FieldError::invalid(FieldLocation::Query, field, INTEGER, raw))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// `"12.000"` -> `"12"`; anything with a non-zero fraction is returned unchanged
fn strip_zero_fraction(raw: &str) -> &str {
    match raw.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole,
        _ => raw,
    }
}

/// Both summands of `/soma`, only constructible when each one parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumOperands {
    pub a: Operand,
    pub b: Operand,
}

impl SumOperands {
    /// Validate both operands, collecting every failure instead of stopping at the first
    pub fn parse(a: Option<&str>, b: Option<&str>) -> Result<Self, Vec<FieldError>> {
        match (
            Operand::parse(LEFT_OPERAND_FIELD, a),
            Operand::parse(RIGHT_OPERAND_FIELD, b),
        ) {
            (Ok(a), Ok(b)) => Ok(Self { a, b }),
            (a, b) => Err([a.err(), b.err()].into_iter().flatten().collect()),
        }
    }
}
