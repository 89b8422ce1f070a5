//! Realtime-database REST client.
//!
//! `GET`/`PUT` address `{base}/{path}.json`; multi-path updates are one
//! `PATCH {base}/.json`. One round trip per call, no retries.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use common::{StoreConfig, StoreError, StoreResult};

use super::{segments, StoreClient};

/// REST-backed `StoreClient`.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base: Url,
    auth_token: Option<String>,
}

/// Error body returned by the store (`{"error": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl RestStore {
    /// Create a client for the store described by `config`.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        Self::with_client(Client::new(), config)
    }

    /// Create a client reusing an existing HTTP client.
    pub fn with_client(client: Client, config: &StoreConfig) -> StoreResult<Self> {
        let base = Url::parse(&config.url).map_err(|e| {
            StoreError::invalid_request(format!("invalid store url '{}': {}", config.url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(StoreError::invalid_request(format!(
                "store url '{}' cannot be a base",
                config.url
            )));
        }

        Ok(Self {
            client,
            base,
            auth_token: config.auth_token.clone(),
        })
    }

    /// Build the `.json` endpoint for a store path.
    pub fn endpoint(&self, path: &str) -> StoreResult<Url> {
        let mut url = self.base.clone();
        let segs = segments(path);
        {
            let mut parts = url.path_segments_mut().map_err(|_| {
                StoreError::invalid_request(format!("store url '{}' cannot be a base", self.base))
            })?;
            parts.pop_if_empty();
            match segs.split_last() {
                Some((last, parents)) => {
                    parts.extend(parents);
                    parts.push(&format!("{}.json", last));
                }
                None => {
                    parts.push(".json");
                }
            }
        }

        if let Some(token) = &self.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }

        Ok(url)
    }
}

#[async_trait]
impl StoreClient for RestStore {
    async fn get(&self, path: &str) -> StoreResult<Option<Value>> {
        let url = self.endpoint(path)?;
        debug!(path, "store GET");

        let response = check(self.client.get(url).send().await?).await?;
        let value: Value = response.json().await?;

        Ok(present(value))
    }

    async fn set(&self, path: &str, value: Value) -> StoreResult<()> {
        let url = self.endpoint(path)?;
        debug!(path, "store PUT");

        check(self.client.put(url).json(&value).send().await?).await?;
        Ok(())
    }

    async fn update(&self, values: Map<String, Value>) -> StoreResult<()> {
        let url = self.endpoint("")?;
        debug!(paths = values.len(), "store PATCH");

        check(self.client.patch(url).json(&values).send().await?).await?;
        Ok(())
    }
}

/// Turn a non-success response into a `StoreError`.
async fn check(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = error_message(response.text().await.unwrap_or_default());
    debug!(status = status.as_u16(), %message, "store request rejected");

    Err(status_error(status, message))
}

/// A JSON `null` body means nothing is stored at the path.
fn present(value: Value) -> Option<Value> {
    (!value.is_null()).then_some(value)
}

/// The store's `error` field when the body is `{"error": "..."}`, else the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body)
}

fn status_error(status: StatusCode, message: String) -> StoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::PermissionDenied(message),
        _ => StoreError::Status {
            status: status.as_u16(),
            message,
        },
    }
}
