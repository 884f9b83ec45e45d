//! DID document resolution, kept as a thin, independently-testable helper.
//! Not wired into the ingestion hot path: the engine persists `creator_did`
//! as the opaque identifier it receives from the commit stream and never
//! blocks a write on a network round trip to resolve it to a handle.

use crate::error::GuzzleError;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const DEFAULT_PLC_DIRECTORY: &str = "https://plc.directory";
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

struct CacheEntry {
    document: Value,
    fetched_at: Instant,
}

/// Resolves `did:plc:*` identifiers against a PLC directory, with a small
/// TTL cache so repeated lookups of the same creator don't re-hit the
/// network on every call.
pub struct IdentityResolver {
    plc_url: String,
    client: reqwest::Client,
    cache: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::with_plc_url(DEFAULT_PLC_DIRECTORY.to_string())
    }

    pub fn with_plc_url(plc_url: String) -> Self {
        Self {
            plc_url,
            client: reqwest::Client::new(),
            cache: RwLock::new(HashMap::new()),
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Fetches the DID document for `did`, serving a cached copy when one is
    /// fresh. Returns `NotFound` when the directory returns 404, `Backend`
    /// for any other network or deserialisation failure.
    pub async fn resolve(&self, did: &str) -> Result<Value, GuzzleError> {
        if let Some(cached) = self.cached(did) {
            return Ok(cached);
        }

        let url = format!("{}/{}", self.plc_url.trim_end_matches('/'), did);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GuzzleError::Backend(format!("failed to reach PLC directory: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GuzzleError::NotFound);
        }
        let response = response
            .error_for_status()
            .map_err(|e| GuzzleError::Backend(format!("PLC directory returned an error: {e}")))?;

        let document: Value = response
            .json()
            .await
            .map_err(|e| GuzzleError::Backend(format!("malformed DID document: {e}")))?;

        self.cache.write().insert(
            did.to_string(),
            CacheEntry {
                document: document.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(document)
    }

    fn cached(&self, did: &str) -> Option<Value> {
        let cache = self.cache.read();
        let entry = cache.get(did)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.document.clone())
        } else {
            None
        }
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn caches_a_resolved_document_until_it_expires() {
        let resolver = IdentityResolver::with_plc_url("https://plc.directory".to_string());
        resolver.cache.write().insert(
            "did:plc:abc".to_string(),
            CacheEntry {
                document: serde_json::json!({"id": "did:plc:abc"}),
                fetched_at: Instant::now(),
            },
        );
        let cached = resolver.cached("did:plc:abc").unwrap();
        assert_eq!(cached["id"], "did:plc:abc");
    }

    #[tokio::test]
    async fn treats_an_expired_entry_as_a_miss() {
        let resolver = IdentityResolver::with_plc_url("https://plc.directory".to_string());
        resolver.cache.write().insert(
            "did:plc:abc".to_string(),
            CacheEntry {
                document: serde_json::json!({"id": "did:plc:abc"}),
                fetched_at: Instant::now() - Duration::from_secs(2 * 60 * 60),
            },
        );
        assert!(resolver.cached("did:plc:abc").is_none());
    }
}
