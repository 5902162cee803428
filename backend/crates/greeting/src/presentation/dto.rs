//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Response for GET /
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Response for GET /saudacao/{nome}
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    #[serde(rename = "mensagem")]
    pub message: String,
}

/// Query for GET /soma
///
/// Kept as raw strings so a bad operand becomes a field-level 422
/// instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SumQuery {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
}

/// Response for GET /soma
#[derive(Debug, Clone, Serialize)]
pub struct SumResponse {
    #[serde(rename = "resultado")]
    pub result: i64,
}
