//! Welcome Use Case

use crate::domain::services::welcome_message;

/// Output DTO for the root greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeOutput {
    pub message: &'static str,
}

pub fn welcome() -> WelcomeOutput {
    WelcomeOutput {
        message: welcome_message(),
    }
}
