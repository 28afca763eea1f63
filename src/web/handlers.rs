use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::error::DashboardError;
use crate::observability::metrics;
use crate::report::DashboardReport;
use crate::web::models;
use crate::web::state::AppState;
use crate::web::templates::{DashboardTemplate, ErrorTemplate, NoDataTemplate};

pub async fn dashboard(State(state): State<AppState>) -> Response {
    match state.report.build().await {
        Ok(report) => {
            let template = dashboard_view(&report);
            metrics::dashboard_rendered();
            Html(template.render().expect("Template rendering failed")).into_response()
        }
        Err(DashboardError::NoData) => {
            let template = NoDataTemplate;
            Html(template.render().expect("Template rendering failed")).into_response()
        }
        Err(e) => {
            error!("Dashboard render failed: {}", e);
            let template = ErrorTemplate {
                message: e.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(template.render().expect("Template rendering failed")),
            )
                .into_response()
        }
    }
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

fn dashboard_view(report: &DashboardReport) -> DashboardTemplate {
    DashboardTemplate {
        record_count: report.record_count,
        video_links: models::video_links(&report.top_videos),
        sections: vec![
            models::video_section(&report.top_videos),
            models::channel_section(
                "Top Channels by Video Count",
                "Videos",
                &report.channels_by_videos,
            ),
            models::channel_section(
                "Top Channels by Subscribers",
                "Subscribers",
                &report.channels_by_subscribers,
            ),
            models::channel_section(
                "Top Channels by Total Comments",
                "Comments",
                &report.channels_by_comments,
            ),
        ],
        keywords: models::keyword_rows(report),
    }
}
