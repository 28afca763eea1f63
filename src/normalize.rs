//! Field normalization for crawled video documents.
//!
//! The crawler stores counts the way YouTube renders them ("1.2K views",
//! "45K subscribers") and dates as free text. Everything here is total:
//! malformed input degrades to 0 or `None`, it never fails the batch.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::domain::VideoRecord;

/// Parse a human-formatted view count ("12,345", "1.2K views", "3M").
/// Any parse failure yields 0.
pub fn parse_views(raw: &str) -> u64 {
    if raw.is_empty() {
        return 0;
    }
    let cleaned = raw.replace(',', "").replace(" views", "");
    parse_scaled(cleaned.trim(), 'K', 'M')
}

/// Parse a subscriber count ("45K subscribers", "2.1M"). Case-insensitive
/// variant of [`parse_views`]; failures yield 0.
pub fn parse_subscribers(raw: &str) -> u64 {
    if raw.is_empty() {
        return 0;
    }
    let cleaned = raw.to_lowercase().replace("subscribers", "");
    parse_scaled(cleaned.trim(), 'k', 'm')
}

/// Coerce a comment count from either a JSON string or number.
pub fn parse_comments(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_f64().map_or(0, truncate_count),
        Value::String(s) => s.trim().parse::<f64>().map_or(0, truncate_count),
        _ => 0,
    }
}

/// Best-effort parse of a free-text publication date. Returns `None` on
/// anything unparseable so downstream consumers treat it as unknown.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = dateparser::parse(trimmed) {
        return Some(parsed);
    }
    // dateparser covers the common machine formats; these pick up the
    // date-only spellings the crawler has been seen to emit
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%b %d, %Y"))
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Normalize a whole fetched record set. Columns absent from every document
/// (subscribers, comments) default to 0 without per-record parsing.
pub fn normalize_batch(documents: &[Value]) -> Vec<VideoRecord> {
    let has_subscribers = column_present(documents, "subscribers");
    let has_comments = column_present(documents, "comments");
    documents
        .iter()
        .map(|doc| normalize_document(doc, has_subscribers, has_comments))
        .collect()
}

fn normalize_document(doc: &Value, has_subscribers: bool, has_comments: bool) -> VideoRecord {
    let views = field_as_text(doc, "views").map_or(0, |v| parse_views(&v));
    let subscribers = if has_subscribers {
        field_as_text(doc, "subscribers").map_or(0, |v| parse_subscribers(&v))
    } else {
        0
    };
    let comments = if has_comments {
        doc.get("comments").map_or(0, parse_comments)
    } else {
        0
    };
    let published = field_as_text(doc, "published").and_then(|v| parse_published(&v));

    VideoRecord {
        title: field_as_text(doc, "title").unwrap_or_default(),
        url: field_as_text(doc, "url").unwrap_or_default(),
        channel: field_as_text(doc, "channel"),
        views,
        subscribers,
        comments,
        published,
    }
}

fn column_present(documents: &[Value], column: &str) -> bool {
    documents.iter().any(|doc| doc.get(column).is_some())
}

/// A field is treated as text whether the crawler stored it as a string or
/// a bare number; null and missing both come back as `None`.
fn field_as_text(doc: &Value, key: &str) -> Option<String> {
    match doc.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// `K`/`M` suffixes are substring checks, not anchored: "1.5K" parses after
/// the suffix character is removed. The suffix branch swallows its own
/// parse failures rather than falling through.
fn parse_scaled(text: &str, kilo: char, mega: char) -> u64 {
    if text.contains(kilo) {
        return scaled_value(text, kilo, 1_000.0);
    }
    if text.contains(mega) {
        return scaled_value(text, mega, 1_000_000.0);
    }
    text.parse::<f64>().map_or(0, truncate_count)
}

fn scaled_value(text: &str, suffix: char, multiplier: f64) -> u64 {
    text.replace(suffix, "")
        .trim()
        .parse::<f64>()
        .map_or(0, |v| truncate_count(v * multiplier))
}

// Counts are non-negative; `as` saturates negatives and NaN to 0.
fn truncate_count(value: f64) -> u64 {
    if value.is_finite() {
        value as u64
    } else {
        0
    }
}
