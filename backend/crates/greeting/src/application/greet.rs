//! Greet Use Case

use crate::domain::services::greeting_for;
use crate::domain::value_objects::PersonName;
use crate::error::GreetingResult;

/// Output DTO for the personal greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetOutput {
    pub message: String,
}

/// Greet `raw_name` exactly as it was received
pub fn greet(raw_name: impl Into<String>) -> GreetingResult<GreetOutput> {
    let name = PersonName::new(raw_name)?;

    Ok(GreetOutput {
        message: greeting_for(&name),
    })
}
