//! Sum Use Case

use crate::domain::services::checked_sum;
use crate::domain::value_objects::SumOperands;
use crate::error::{GreetingError, GreetingResult};

/// Input DTO for the sum, carrying the raw query values
#[derive(Debug, Clone, Default)]
pub struct SumInput {
    pub a: Option<String>,
    pub b: Option<String>,
}

/// Output DTO for the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumOutput {
    pub result: i64,
}

/// Validate both operands, then add them
pub fn sum(input: SumInput) -> GreetingResult<SumOutput> {
    let operands = SumOperands::parse(input.a.as_deref(), input.b.as_deref())?;

    let result = checked_sum(&operands).ok_or(GreetingError::SumOutOfRange {
        a: operands.a.value(),
        b: operands.b.value(),
    })?;

    Ok(SumOutput { result })
}
