use async_trait::async_trait;

use crate::domain::RawDocument;
use crate::error::Result;

pub mod cache;
pub mod docstore;
pub mod memory;

pub use cache::CachedSource;
pub use docstore::DocStoreSource;
pub use memory::InMemorySource;

/// A store holding crawled video documents. One query shape only: all
/// documents of a named collection, no filtering or pagination.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<RawDocument>>;
}
