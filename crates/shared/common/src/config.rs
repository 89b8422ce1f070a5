//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Remote store connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base URL of the store (e.g., "https://example.firebaseio.com")
    pub url: String,
    /// Credential passed with every request, if the store requires one
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000".to_string(),
            auth_token: None,
        }
    }
}
