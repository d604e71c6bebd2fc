//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?limit=` for newest-first listings.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}
