use askama::Template;

use crate::web::models::{ChartSection, KeywordRow, VideoLink};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub record_count: usize,
    pub video_links: Vec<VideoLink>,
    pub sections: Vec<ChartSection>,
    pub keywords: Vec<KeywordRow>,
}

#[derive(Template)]
#[template(path = "no_data.html")]
pub struct NoDataTemplate;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}
