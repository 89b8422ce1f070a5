//! Remote store client seam and its adapters.
//!
//! The store is a hierarchical key-value service addressed by slash-delimited
//! paths. Every call is a single request that completes exactly once.

mod memory;
#[cfg(feature = "http")]
mod rest;

use async_trait::async_trait;
use serde_json::{Map, Value};

use common::StoreResult;

pub use memory::MemoryStore;
#[cfg(feature = "http")]
pub use rest::RestStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hierarchical key-value store client.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Read the value at `path` (`None` when nothing is stored there)
    async fn get(&self, path: &str) -> StoreResult<Option<Value>>;

    /// Replace the value at `path`
    async fn set(&self, path: &str, value: Value) -> StoreResult<()>;

    /// Write several absolute paths as one atomic request
    async fn update(&self, values: Map<String, Value>) -> StoreResult<()>;
}

/// Split a store path into its non-empty segments.
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split(domain::PATH_SEPARATOR)
        .filter(|s| !s.is_empty())
        .collect()
}
