//! In-process hierarchical store.
//!
//! Behaves like a realtime-database tree: writes create intermediate nodes,
//! `null` and empty objects are never stored, and a multi-path update is
//! applied to a copy of the tree that is swapped in only when every write
//! succeeded.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use common::{StoreError, StoreResult};

use super::{segments, StoreClient};

/// In-memory `StoreClient` holding the whole tree as one JSON value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    root: RwLock<Value>,
    offline: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing tree
    pub fn with_root(root: Value) -> Self {
        Self {
            root: RwLock::new(normalize(root)),
            offline: AtomicBool::new(false),
        }
    }

    /// Make every subsequent request fail as a transport error (or recover)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Copy of the whole tree
    pub async fn snapshot(&self) -> Value {
        self.root.read().await.clone()
    }

    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("memory store is offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn get(&self, path: &str) -> StoreResult<Option<Value>> {
        self.ensure_online()?;

        let root = self.root.read().await;
        let mut node = &*root;
        for segment in segments(path) {
            match node.get(segment) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }

        debug!(path, found = !node.is_null(), "memory store read");
        Ok((!node.is_null()).then(|| node.clone()))
    }

    async fn set(&self, path: &str, value: Value) -> StoreResult<()> {
        self.ensure_online()?;

        let mut root = self.root.write().await;
        write(&mut root, &segments(path), normalize(value));
        debug!(path, "memory store write");
        Ok(())
    }

    async fn update(&self, values: Map<String, Value>) -> StoreResult<()> {
        self.ensure_online()?;
        validate_update(&values)?;

        let mut root = self.root.write().await;
        let mut next = root.clone();
        for (path, value) in values {
            write(&mut next, &segments(&path), normalize(value));
        }
        *root = next;

        debug!("memory store multi-path update applied");
        Ok(())
    }
}

/// Reject empty paths and paths nested inside another path of the same update.
fn validate_update(values: &Map<String, Value>) -> StoreResult<()> {
    let paths: Vec<(&str, Vec<&str>)> = values
        .keys()
        .map(|path| (path.as_str(), segments(path)))
        .collect();

    for (i, (path, segs)) in paths.iter().enumerate() {
        if segs.is_empty() {
            return Err(StoreError::invalid_request(format!(
                "update path '{}' does not name a child",
                path
            )));
        }
        for (other, other_segs) in &paths[i + 1..] {
            if segs.starts_with(other_segs) || other_segs.starts_with(segs) {
                return Err(StoreError::invalid_request(format!(
                    "update paths '{}' and '{}' overlap",
                    path, other
                )));
            }
        }
    }

    Ok(())
}

/// Store `value` under `segs`, creating or pruning intermediate objects.
fn write(node: &mut Value, segs: &[&str], value: Value) {
    let Some((head, rest)) = segs.split_first() else {
        *node = value;
        return;
    };

    if !node.is_object() {
        if value.is_null() {
            return;
        }
        *node = Value::Object(Map::new());
    }

    let mut emptied = false;
    if let Value::Object(map) = node {
        let child = map.entry(head.to_string()).or_insert(Value::Null);
        write(child, rest, value);
        if child.is_null() {
            map.remove(*head);
        }
        emptied = map.is_empty();
    }
    if emptied {
        *node = Value::Null;
    }
}

/// Drop `null` members and empty objects; an object left empty becomes `null`.
fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, normalize(v)))
                .filter(|(_, v)| !v.is_null())
                .collect();
            if map.is_empty() {
                Value::Null
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}
