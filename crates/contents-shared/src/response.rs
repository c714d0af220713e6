//! Small fixed-shape response bodies.

use serde::{Deserialize, Serialize};

/// `{"detail": ...}` body used for errors and delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Not found")
    }

    pub fn invalid_json() -> Self {
        Self::new("Invalid JSON")
    }

    pub fn deleted() -> Self {
        Self::new("Deleted")
    }
}

/// Liveness body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
