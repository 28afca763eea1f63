//! Ranked summaries over normalized video records.
//!
//! Groups are materialized in first-seen order and ranked with a stable
//! descending sort, so equal values keep a reproducible order across runs.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::domain::VideoRecord;

/// One entry in the top-videos ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRank {
    pub title: String,
    pub url: String,
    pub views: u64,
}

/// One entry in a channel ranking; the meaning of `value` depends on the
/// aggregation (video count, max subscribers, summed comments)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRank {
    pub channel: String,
    pub value: u64,
}

/// All records sorted descending by views, truncated to `n`.
pub fn top_videos_by_views(records: &[VideoRecord], n: usize) -> Vec<VideoRank> {
    let mut ranked: Vec<&VideoRecord> = records.iter().collect();
    ranked.sort_by_key(|r| Reverse(r.views));
    ranked
        .into_iter()
        .take(n)
        .map(|r| VideoRank {
            title: r.title.clone(),
            url: r.url.clone(),
            views: r.views,
        })
        .collect()
}

/// Channels ranked by how many videos each one has.
pub fn channels_by_video_count(
    records: &[VideoRecord],
    n: usize,
    exclude_blank: bool,
) -> Vec<ChannelRank> {
    take_top(
        group_channels(records, exclude_blank, |current, _| {
            current.unwrap_or(0) + 1
        }),
        n,
    )
}

/// Channels ranked by the largest subscriber count seen on any of their
/// videos. Max, not sum: the channel's count repeats on every video.
pub fn channels_by_max_subscribers(
    records: &[VideoRecord],
    n: usize,
    exclude_blank: bool,
) -> Vec<ChannelRank> {
    take_top(
        group_channels(records, exclude_blank, |current, record| {
            current.map_or(record.subscribers, |c| c.max(record.subscribers))
        }),
        n,
    )
}

/// Channels ranked by comments summed across their videos.
pub fn channels_by_total_comments(
    records: &[VideoRecord],
    n: usize,
    exclude_blank: bool,
) -> Vec<ChannelRank> {
    take_top(
        group_channels(records, exclude_blank, |current, record| {
            current.unwrap_or(0).saturating_add(record.comments)
        }),
        n,
    )
}

/// Grouping key for a record's channel. With `exclude_blank` set, missing
/// and blank-after-trim channels drop out of the aggregate entirely;
/// otherwise the exact string is the key and missing groups under "".
fn channel_group_key(record: &VideoRecord, exclude_blank: bool) -> Option<String> {
    match (&record.channel, exclude_blank) {
        (Some(name), false) => Some(name.clone()),
        (Some(name), true) => (!name.trim().is_empty()).then(|| name.clone()),
        (None, false) => Some(String::new()),
        (None, true) => None,
    }
}

fn group_channels<F>(records: &[VideoRecord], exclude_blank: bool, mut fold: F) -> Vec<ChannelRank>
where
    F: FnMut(Option<u64>, &VideoRecord) -> u64,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ChannelRank> = Vec::new();
    for record in records {
        let Some(key) = channel_group_key(record, exclude_blank) else {
            continue;
        };
        match index.get(&key) {
            Some(&i) => {
                let current = groups[i].value;
                groups[i].value = fold(Some(current), record);
            }
            None => {
                let value = fold(None, record);
                index.insert(key.clone(), groups.len());
                groups.push(ChannelRank {
                    channel: key,
                    value,
                });
            }
        }
    }
    groups
}

fn take_top(mut groups: Vec<ChannelRank>, n: usize) -> Vec<ChannelRank> {
    groups.sort_by_key(|g| Reverse(g.value));
    groups.truncate(n);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(channel: Option<&str>, views: u64, subscribers: u64, comments: u64) -> VideoRecord {
        VideoRecord {
            title: format!("video with {views} views"),
            url: "https://example.com/v".to_string(),
            channel: channel.map(|c| c.to_string()),
            views,
            subscribers,
            comments,
            published: None,
        }
    }

    #[test]
    fn top_videos_sorts_descending_and_truncates() {
        let records = vec![
            record(Some("a"), 10, 0, 0),
            record(Some("b"), 30, 0, 0),
            record(Some("c"), 20, 0, 0),
        ];
        let top = top_videos_by_views(&records, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].views, 30);
        assert_eq!(top[1].views, 20);
    }

    #[test]
    fn top_videos_ties_keep_input_order() {
        let mut records = vec![
            record(Some("a"), 10, 0, 0),
            record(Some("b"), 10, 0, 0),
            record(Some("c"), 10, 0, 0),
        ];
        records[0].title = "first".to_string();
        records[1].title = "second".to_string();
        records[2].title = "third".to_string();
        let top = top_videos_by_views(&records, 3);
        let titles: Vec<&str> = top.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn n_larger_than_input_returns_everything() {
        let records = vec![record(Some("a"), 1, 0, 0)];
        assert_eq!(top_videos_by_views(&records, 100).len(), 1);
        assert_eq!(channels_by_video_count(&records, 100, true).len(), 1);
        assert!(top_videos_by_views(&records, 0).is_empty());
    }

    #[test]
    fn video_count_groups_by_exact_channel() {
        let records = vec![
            record(Some("A"), 1, 0, 0),
            record(Some("B"), 1, 0, 0),
            record(Some("A"), 1, 0, 0),
        ];
        let counts = channels_by_video_count(&records, 10, true);
        assert_eq!(counts[0], ChannelRank { channel: "A".to_string(), value: 2 });
        assert_eq!(counts[1], ChannelRank { channel: "B".to_string(), value: 1 });
    }

    #[test]
    fn subscriber_ranking_uses_max_not_sum() {
        let records = vec![
            record(Some("A"), 1, 1000, 0),
            record(Some("A"), 1, 1000, 0),
            record(Some("A"), 1, 5000, 0),
        ];
        let ranked = channels_by_max_subscribers(&records, 10, true);
        assert_eq!(ranked[0].value, 5000);
    }

    #[test]
    fn comment_ranking_sums_per_channel() {
        let records = vec![record(Some("B"), 1, 0, 10), record(Some("B"), 1, 0, 5)];
        let ranked = channels_by_total_comments(&records, 10, true);
        assert_eq!(ranked[0].value, 15);
    }

    #[test]
    fn blank_channels_excluded_when_configured() {
        let records = vec![
            record(Some(""), 1, 0, 0),
            record(Some("  "), 1, 0, 0),
            record(None, 1, 0, 0),
            record(Some("real"), 1, 0, 0),
        ];
        let ranked = channels_by_video_count(&records, 10, true);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].channel, "real");
    }

    #[test]
    fn blank_channels_grouped_verbatim_when_not_excluded() {
        let records = vec![
            record(Some(""), 1, 0, 0),
            record(Some("  "), 1, 0, 0),
            record(None, 1, 0, 0),
            record(Some("real"), 1, 0, 0),
        ];
        let ranked = channels_by_video_count(&records, 10, false);
        // "" and the missing channel share a group; "  " stays distinct
        assert_eq!(ranked.len(), 3);
        let empty = ranked.iter().find(|r| r.channel.is_empty()).unwrap();
        assert_eq!(empty.value, 2);
    }

    #[test]
    fn equal_values_rank_in_first_seen_order() {
        let records = vec![
            record(Some("zeta"), 1, 0, 0),
            record(Some("alpha"), 1, 0, 0),
        ];
        let ranked = channels_by_video_count(&records, 10, true);
        assert_eq!(ranked[0].channel, "zeta");
        assert_eq!(ranked[1].channel, "alpha");
    }

    #[test]
    fn rankings_are_idempotent() {
        let records = vec![
            record(Some("a"), 5, 10, 1),
            record(Some("b"), 5, 20, 2),
            record(Some("a"), 7, 10, 3),
        ];
        assert_eq!(
            top_videos_by_views(&records, 5),
            top_videos_by_views(&records, 5)
        );
        assert_eq!(
            channels_by_total_comments(&records, 5, true),
            channels_by_total_comments(&records, 5, true)
        );
    }
}
