use std::sync::Arc;

use crate::report::ReportBuilder;

#[derive(Clone)]
pub struct AppState {
    pub report: Arc<ReportBuilder>,
}
