//! Required-column validation, run once per load before normalization.

use serde_json::Value;

/// Columns every usable crawl collection must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["views", "published", "channel", "title", "url"];

/// Outcome of validating a fetched record set against [`REQUIRED_COLUMNS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaCheck {
    Ok,
    MissingColumns(Vec<String>),
}

/// A column counts as present when any document carries the key, matching
/// a tabular view built over heterogeneous documents. Null values still
/// count as presence; normalization handles those per record.
pub fn check_required_columns(documents: &[Value]) -> SchemaCheck {
    let mut missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !documents.iter().any(|doc| doc.get(**column).is_some()))
        .map(|column| column.to_string())
        .collect();
    if missing.is_empty() {
        SchemaCheck::Ok
    } else {
        missing.sort();
        SchemaCheck::MissingColumns(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_schema_passes() {
        let docs = vec![json!({
            "views": "1", "published": "2024-01-01", "channel": "c",
            "title": "t", "url": "u"
        })];
        assert_eq!(check_required_columns(&docs), SchemaCheck::Ok);
    }

    #[test]
    fn presence_is_unioned_across_documents() {
        let docs = vec![
            json!({"views": "1", "published": "2024-01-01", "channel": "c"}),
            json!({"title": "t", "url": "u"}),
        ];
        assert_eq!(check_required_columns(&docs), SchemaCheck::Ok);
    }

    #[test]
    fn missing_columns_are_reported_sorted() {
        let docs = vec![json!({"title": "t", "channel": "c"})];
        assert_eq!(
            check_required_columns(&docs),
            SchemaCheck::MissingColumns(vec![
                "published".to_string(),
                "url".to_string(),
                "views".to_string(),
            ])
        );
    }

    #[test]
    fn null_values_still_count_as_present() {
        let docs = vec![json!({
            "views": null, "published": null, "channel": null,
            "title": null, "url": null
        })];
        assert_eq!(check_required_columns(&docs), SchemaCheck::Ok);
    }
}
