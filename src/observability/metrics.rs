//! Counters for the render pipeline, exported via Prometheus when `serve`
//! is configured with a metrics port.

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::{DashboardError, Result};

pub fn documents_fetched(count: usize) {
    counter!("yt_dashboard_documents_fetched_total").increment(count as u64);
}

pub fn records_normalized(count: usize) {
    counter!("yt_dashboard_records_normalized_total").increment(count as u64);
}

pub fn report_built() {
    counter!("yt_dashboard_reports_built_total").increment(1);
}

pub fn dashboard_rendered() {
    counter!("yt_dashboard_pages_rendered_total").increment(1);
}

/// Serve Prometheus metrics on the given port for the process lifetime.
pub fn install_prometheus_exporter(port: u16) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .map_err(|e| DashboardError::Config(format!("Failed to install metrics exporter: {e}")))
}
