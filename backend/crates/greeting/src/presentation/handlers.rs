//! HTTP Handlers

use crate::application::{self, SumInput};
use crate::error::{GreetingError, GreetingResult};
use crate::presentation::dto::{GreetingResponse, SumQuery, SumResponse, WelcomeResponse};
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::Uri;

/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    let output = application::welcome();

    Json(WelcomeResponse {
        message: output.message,
    })
}

/// GET /saudacao/{nome}
pub async fn greet(
    path: Result<Path<String>, PathRejection>,
) -> GreetingResult<Json<GreetingResponse>> {
    // Only reachable when the segment is not valid UTF-8 once percent-decoded
    let Path(name) = path.map_err(GreetingError::invalid_path)?;

    let output = application::greet(name)?;

    Ok(Json(GreetingResponse {
        message: output.message,
    }))
}

/// GET /soma?a={int}&b={int}
pub async fn sum(
    query: Result<Query<SumQuery>, QueryRejection>,
) -> GreetingResult<Json<SumResponse>> {
    let Query(query) = query.map_err(GreetingError::invalid_query)?;

    let output = application::sum(SumInput {
        a: query.a,
        b: query.b,
    })?;

    tracing::debug!(result = output.result, "Sum computed");

    Ok(Json(SumResponse {
        result: output.result,
    }))
}

/// Fallback for every unmatched path, `/saudacao/` included
pub async fn route_not_found(uri: Uri) -> GreetingError {
    GreetingError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
