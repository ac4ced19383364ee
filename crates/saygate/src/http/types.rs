//! HTTP API request and response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================
// Say
// ============================================

#[derive(Debug, Deserialize)]
pub struct SayQuery {
    pub keyword: Option<String>,
}

// ============================================
// Error
// ============================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
