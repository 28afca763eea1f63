use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::web::handlers::{dashboard, healthz};
use crate::web::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
