//! HTTP API routes and handlers

use axum::{
    Json, Router,
    extract::{Query, RawQuery, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use percent_encoding::percent_decode_str;
use saygate_invoker::{InvocationPayload, InvokeError, Invoker};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};
use utoipa_swagger_ui::SwaggerUi;

use super::types::*;

/// Per-process handler state. Immutable once built, so requests never
/// observe each other.
pub struct Gateway {
    invoker: Arc<dyn Invoker>,
    function_name: String,
}

impl Gateway {
    pub fn new(invoker: Arc<dyn Invoker>, function_name: impl Into<String>) -> Self {
        Self {
            invoker,
            function_name: function_name.into(),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }
}

type AppState = Arc<Gateway>;

/// Create the router with the API endpoint and its documentation
pub fn create_router(gateway: AppState, doc: utoipa::openapi::OpenApi) -> Router {
    Router::new()
        .route("/say", get(say))
        .with_state(gateway)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", doc))
}

// ============================================
// Errors
// ============================================

#[derive(Debug)]
pub enum ApiError {
    /// `keyword` missing, empty or undecodable
    Validation,
    Invocation(InvokeError),
}

impl From<InvokeError> for ApiError {
    fn from(err: InvokeError) -> Self {
        ApiError::Invocation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation => (StatusCode::BAD_REQUEST, "Bad request"),
            ApiError::Invocation(err) => {
                error!("Remote invocation failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

// ============================================
// Say
// ============================================

/// Get a keyword
///
/// Use to request a keyword. The keyword is forwarded to the remote function
/// and its response is returned unmodified.
#[utoipa::path(
    get,
    path = "/say",
    tag = "say",
    params(
        ("keyword" = String, Query, description = "Keyword to say")
    ),
    responses(
        (status = 200, description = "A successful response"),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn say(
    State(gateway): State<AppState>,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<SayQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    if raw_query.as_deref().is_some_and(|raw| !is_well_formed(raw)) {
        debug!("Rejected malformed percent-encoding in query string");
        return Err(ApiError::Validation);
    }

    let keyword = match query {
        Ok(Query(SayQuery {
            keyword: Some(keyword),
        })) if !keyword.is_empty() => keyword,
        Ok(_) => return Err(ApiError::Validation),
        Err(rejection) => {
            debug!("Rejected query string: {}", rejection);
            return Err(ApiError::Validation);
        }
    };

    let start = Instant::now();
    let payload = InvocationPayload::new(keyword).to_bytes()?;

    debug!(function = %gateway.function_name, "HTTP say request");

    let body = gateway
        .invoker
        .invoke(&gateway.function_name, payload)
        .await?;

    debug!(
        bytes = body.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Invocation succeeded"
    );

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Form decoding replaces bad escapes and invalid UTF-8 instead of failing,
/// which would forward a keyword the caller never sent.
fn is_well_formed(raw_query: &str) -> bool {
    raw_query.split(['&', '=']).all(|part| {
        let bytes = part.as_bytes();
        let escapes_complete = bytes
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == b'%')
            .all(|(i, _)| {
                bytes
                    .get(i + 1..i + 3)
                    .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
            });

        escapes_complete && percent_decode_str(part).decode_utf8().is_ok()
    })
}
