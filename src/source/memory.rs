use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::RawDocument;
use crate::error::Result;
use crate::source::RecordSource;

/// In-memory record source for tests and demos.
#[derive(Default)]
pub struct InMemorySource {
    collections: HashMap<String, Vec<RawDocument>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(collection: impl Into<String>, documents: Vec<RawDocument>) -> Self {
        let mut collections = HashMap::new();
        collections.insert(collection.into(), documents);
        Self { collections }
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<RawDocument>> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}
