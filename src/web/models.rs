//! View models for the dashboard template: bar widths and display values
//! are precomputed so the template stays declarative.

use crate::aggregate::{ChannelRank, VideoRank};
use crate::report::{format_count, DashboardReport};

/// One bar in a horizontal chart, scaled against the section maximum.
pub struct ChartBar {
    pub label: String,
    pub href: Option<String>,
    pub value: String,
    pub percent: u32,
}

pub struct ChartSection {
    pub heading: String,
    pub axis_label: String,
    pub bars: Vec<ChartBar>,
}

/// Entry in the linked top-videos listing
pub struct VideoLink {
    pub title: String,
    pub url: String,
}

pub struct KeywordRow {
    pub word: String,
    pub count: u64,
}

const LISTING_TITLE_CHARS: usize = 60;
const BAR_LABEL_CHARS: usize = 50;

pub fn video_links(ranks: &[VideoRank]) -> Vec<VideoLink> {
    ranks
        .iter()
        .map(|rank| VideoLink {
            title: truncate_label(&rank.title, LISTING_TITLE_CHARS),
            url: rank.url.clone(),
        })
        .collect()
}

pub fn video_section(ranks: &[VideoRank]) -> ChartSection {
    let max = ranks.iter().map(|r| r.views).max().unwrap_or(0);
    ChartSection {
        heading: "Top Videos by Views".to_string(),
        axis_label: "Views".to_string(),
        bars: ranks
            .iter()
            .map(|rank| ChartBar {
                label: truncate_label(&rank.title, BAR_LABEL_CHARS),
                href: Some(rank.url.clone()),
                value: format_count(rank.views),
                percent: percent_of(rank.views, max),
            })
            .collect(),
    }
}

pub fn channel_section(heading: &str, axis_label: &str, ranks: &[ChannelRank]) -> ChartSection {
    let max = ranks.iter().map(|r| r.value).max().unwrap_or(0);
    ChartSection {
        heading: heading.to_string(),
        axis_label: axis_label.to_string(),
        bars: ranks
            .iter()
            .map(|rank| ChartBar {
                label: truncate_label(&rank.channel, BAR_LABEL_CHARS),
                href: None,
                value: format_count(rank.value),
                percent: percent_of(rank.value, max),
            })
            .collect(),
    }
}

pub fn keyword_rows(report: &DashboardReport) -> Vec<KeywordRow> {
    report
        .keywords
        .iter()
        .map(|k| KeywordRow {
            word: k.word.clone(),
            count: k.count,
        })
        .collect()
}

fn percent_of(value: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * 100.0).round() as u32
}

fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_against_the_section_maximum() {
        let ranks = vec![
            ChannelRank { channel: "a".to_string(), value: 200 },
            ChannelRank { channel: "b".to_string(), value: 50 },
        ];
        let section = channel_section("h", "x", &ranks);
        assert_eq!(section.bars[0].percent, 100);
        assert_eq!(section.bars[1].percent, 25);
    }

    #[test]
    fn all_zero_values_render_empty_bars() {
        let ranks = vec![ChannelRank { channel: "a".to_string(), value: 0 }];
        let section = channel_section("h", "x", &ranks);
        assert_eq!(section.bars[0].percent, 0);
    }

    #[test]
    fn long_labels_truncate_on_char_boundaries() {
        let long = "x".repeat(80);
        assert_eq!(truncate_label(&long, 50).chars().count(), 51);
        assert_eq!(truncate_label("short", 50), "short");
    }
}
