//! Word-frequency extraction over video titles.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::domain::VideoRecord;

// Maximal runs of ASCII letters, two or more; digits, punctuation and
// single letters act as separators. Titles are lowercased first.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]{2,}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// The `n` most frequent title words, no stop-word removal or stemming.
/// Ties rank by first occurrence so repeated runs agree.
pub fn top_keywords(records: &[VideoRecord], n: usize) -> Vec<KeywordCount> {
    let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
    let mut next_rank = 0usize;
    for record in records {
        let title = record.title.to_lowercase();
        for token in WORD_PATTERN.find_iter(&title) {
            let entry = counts.entry(token.as_str().to_string()).or_insert_with(|| {
                let first_seen = next_rank;
                next_rank += 1;
                (0, first_seen)
            });
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(String, u64, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(n)
        .map(|(word, count, _)| KeywordCount { word, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> VideoRecord {
        VideoRecord {
            title: title.to_string(),
            url: String::new(),
            channel: None,
            views: 0,
            subscribers: 0,
            comments: 0,
            published: None,
        }
    }

    #[test]
    fn digits_punctuation_and_single_letters_are_not_tokens() {
        let records = vec![titled("Bell's Palsy Treatment 2024!!")];
        let top = top_keywords(&records, 10);
        let words: Vec<&str> = top.iter().map(|k| k.word.as_str()).collect();
        assert!(words.contains(&"bell"));
        assert!(words.contains(&"palsy"));
        assert!(words.contains(&"treatment"));
        assert!(!words.contains(&"2024"));
        assert!(!words.contains(&"s"));
    }

    #[test]
    fn counting_is_case_folded() {
        let records = vec![titled("Recovery tips"), titled("RECOVERY exercises")];
        let top = top_keywords(&records, 1);
        assert_eq!(top[0], KeywordCount { word: "recovery".to_string(), count: 2 });
    }

    #[test]
    fn ties_rank_by_first_occurrence() {
        let records = vec![titled("zebra apple"), titled("zebra apple")];
        let top = top_keywords(&records, 2);
        assert_eq!(top[0].word, "zebra");
        assert_eq!(top[1].word, "apple");
    }

    #[test]
    fn result_is_truncated_to_n() {
        let records = vec![titled("one two three four five six")];
        assert_eq!(top_keywords(&records, 3).len(), 3);
        assert!(top_keywords(&records, 0).is_empty());
        assert_eq!(top_keywords(&[], 15).len(), 0);
    }
}
