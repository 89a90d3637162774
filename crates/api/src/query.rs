//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that can resolve relations
/// (`?include=all`).
#[derive(Debug, Default, Deserialize)]
pub struct IncludeParams {
    pub include: Option<String>,
}

impl IncludeParams {
    /// `true` when the caller asked for nested relations.
    pub fn includes_relations(&self) -> bool {
        self.include.as_deref() == Some("all")
    }
}
