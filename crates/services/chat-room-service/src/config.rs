//! Chat room service configuration.

use std::env;

use common::StoreConfig;

const DEFAULT_STORE_URL: &str = "http://localhost:9000";

/// Chat room service configuration.
#[derive(Debug, Clone, Default)]
pub struct ChatRoomServiceConfig {
    /// Remote store connection
    pub store: StoreConfig,
}

impl ChatRoomServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig {
                url: env::var("CHAT_STORE_URL")
                    .or_else(|_| env::var("STORE_URL"))
                    .unwrap_or_else(|_| DEFAULT_STORE_URL.to_string()),
                auth_token: env::var("CHAT_STORE_AUTH")
                    .ok()
                    .filter(|token| !token.is_empty()),
            },
        }
    }

    /// Override the store URL.
    pub fn with_store_url(mut self, url: impl Into<String>) -> Self {
        self.store.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_store() {
        let config = ChatRoomServiceConfig::default();
        assert_eq!(config.store.url, DEFAULT_STORE_URL);
        assert!(config.store.auth_token.is_none());
    }

    #[test]
    fn store_url_can_be_overridden() {
        let config = ChatRoomServiceConfig::default().with_store_url("https://chat.example.com");
        assert_eq!(config.store.url, "https://chat.example.com");
    }
}
