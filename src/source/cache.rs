use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::RawDocument;
use crate::error::Result;
use crate::source::RecordSource;

/// Time-based cache over another record source. A fetched record set stays
/// valid for the TTL window; staleness up to the TTL is acceptable. A zero
/// TTL disables caching entirely.
pub struct CachedSource {
    inner: Arc<dyn RecordSource>,
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    fetched_at: Instant,
    documents: Vec<RawDocument>,
}

impl CachedSource {
    pub fn new(inner: Arc<dyn RecordSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl RecordSource for CachedSource {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<RawDocument>> {
        if self.ttl.is_zero() {
            return self.inner.fetch_all(collection).await;
        }

        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.get(collection) {
            if entry.fetched_at.elapsed() < self.ttl {
                debug!("Cache hit for collection '{}'", collection);
                return Ok(entry.documents.clone());
            }
        }

        let documents = self.inner.fetch_all(collection).await?;
        entries.insert(
            collection.to_string(),
            CacheEntry {
                fetched_at: Instant::now(),
                documents: documents.clone(),
            },
        );
        Ok(documents)
    }
}
