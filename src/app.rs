use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/day/:date", get(handlers::get_day).put(handlers::save_day))
        .route("/api/day/:date/series", get(handlers::get_day_series))
        .route("/api/range", get(handlers::get_range))
        .route(
            "/api/medications",
            get(handlers::get_medications).put(handlers::put_medications),
        )
        .route(
            "/api/pattern",
            get(handlers::get_pattern).put(handlers::put_pattern),
        )
        .route("/api/export", get(handlers::export_data))
        .route("/api/import", post(handlers::import_data))
        .route("/api/sync/pull", post(handlers::sync_pull))
        .route("/api/sync/push", post(handlers::sync_push))
        .with_state(state)
}
