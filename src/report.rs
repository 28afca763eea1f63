//! The render-cycle use case: fetch, validate, normalize, aggregate.

use std::fmt::Write as _;
use std::sync::Arc;
use tracing::info;

use crate::aggregate::{self, ChannelRank, VideoRank};
use crate::config::Config;
use crate::domain::RawDocument;
use crate::error::{DashboardError, Result};
use crate::keywords::{self, KeywordCount};
use crate::normalize;
use crate::observability::metrics;
use crate::schema::{self, SchemaCheck};
use crate::source::RecordSource;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub top_videos: usize,
    pub top_channels: usize,
    pub top_keywords: usize,
    pub exclude_blank_channels: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_videos: 5,
            top_channels: 10,
            top_keywords: 15,
            exclude_blank_channels: true,
        }
    }
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        Self {
            top_videos: config.top_videos,
            top_channels: config.top_channels,
            top_keywords: config.top_keywords,
            exclude_blank_channels: config.exclude_blank_channels,
        }
    }
}

/// Everything one render cycle produces.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub record_count: usize,
    pub top_videos: Vec<VideoRank>,
    pub channels_by_videos: Vec<ChannelRank>,
    pub channels_by_subscribers: Vec<ChannelRank>,
    pub channels_by_comments: Vec<ChannelRank>,
    pub keywords: Vec<KeywordCount>,
}

/// Builds a [`DashboardReport`] from an injected record source. Constructed
/// once in `main` and shared; holds no connection state of its own.
pub struct ReportBuilder {
    source: Arc<dyn RecordSource>,
    collection: String,
    options: ReportOptions,
}

impl ReportBuilder {
    pub fn new(source: Arc<dyn RecordSource>, collection: impl Into<String>, options: ReportOptions) -> Self {
        Self {
            source,
            collection: collection.into(),
            options,
        }
    }

    /// One full render cycle. Fatal pre-conditions (empty collection,
    /// missing required columns) surface as typed errors; per-record
    /// normalization failures never do.
    pub async fn build(&self) -> Result<DashboardReport> {
        let mut documents = self.source.fetch_all(&self.collection).await?;
        metrics::documents_fetched(documents.len());

        if documents.is_empty() {
            return Err(DashboardError::NoData);
        }

        drop_internal_ids(&mut documents);

        if let SchemaCheck::MissingColumns(missing) = schema::check_required_columns(&documents) {
            return Err(DashboardError::MissingColumns(missing));
        }

        let records = normalize::normalize_batch(&documents);
        metrics::records_normalized(records.len());

        let options = &self.options;
        let report = DashboardReport {
            record_count: records.len(),
            top_videos: aggregate::top_videos_by_views(&records, options.top_videos),
            channels_by_videos: aggregate::channels_by_video_count(
                &records,
                options.top_channels,
                options.exclude_blank_channels,
            ),
            channels_by_subscribers: aggregate::channels_by_max_subscribers(
                &records,
                options.top_channels,
                options.exclude_blank_channels,
            ),
            channels_by_comments: aggregate::channels_by_total_comments(
                &records,
                options.top_channels,
                options.exclude_blank_channels,
            ),
            keywords: keywords::top_keywords(&records, options.top_keywords),
        };
        metrics::report_built();
        info!(
            "Built dashboard report over {} records from collection '{}'",
            report.record_count, self.collection
        );
        Ok(report)
    }
}

// The store's internal identifier carries no business meaning.
fn drop_internal_ids(documents: &mut [RawDocument]) {
    for doc in documents.iter_mut() {
        if let Some(map) = doc.as_object_mut() {
            map.remove("_id");
        }
    }
}

/// Group digits for display: 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Terminal rendering of a report, one ranked listing per summary.
pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 Dashboard report ({} videos)", report.record_count);

    let _ = writeln!(out, "\nTop videos by views:");
    for (i, video) in report.top_videos.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} - {} views ({})",
            i + 1,
            video.title,
            format_count(video.views),
            video.url
        );
    }

    render_channel_section(&mut out, "Top channels by video count:", &report.channels_by_videos);
    render_channel_section(
        &mut out,
        "Top channels by subscribers:",
        &report.channels_by_subscribers,
    );
    render_channel_section(
        &mut out,
        "Top channels by total comments:",
        &report.channels_by_comments,
    );

    let _ = writeln!(out, "\nTop keywords in titles:");
    for keyword in &report.keywords {
        let _ = writeln!(out, "  {} ({})", keyword.word, keyword.count);
    }
    out
}

fn render_channel_section(out: &mut String, heading: &str, ranks: &[ChannelRank]) {
    let _ = writeln!(out, "\n{heading}");
    for (i, rank) in ranks.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} - {}", i + 1, rank.channel, format_count(rank.value));
    }
}
