use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw document as returned by the record source
pub type RawDocument = serde_json::Value;

/// One crawled video after field normalization. All counts are already
/// coerced to integers; unparseable fields arrive here as 0 or `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub url: String,
    /// Absent or null in the source document becomes `None`
    pub channel: Option<String>,
    pub views: u64,
    pub subscribers: u64,
    pub comments: u64,
    /// `None` when the published field was missing or unparseable
    pub published: Option<DateTime<Utc>>,
}
