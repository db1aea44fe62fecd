use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/docs", get(handlers::api_docs))
        .route("/api/db/status", get(handlers::db_status))
        .route("/api/db/stats", get(handlers::db_stats))
        .route(
            "/api/dns/records",
            get(handlers::get_records).post(handlers::create_record),
        )
        .route(
            "/api/dns/records/{id}",
            get(handlers::get_record_by_id)
                .put(handlers::update_record)
                .delete(handlers::delete_record),
        )
        .route("/api/dns/status/{domain}", get(handlers::get_domain_status))
        .route(
            "/api/repositories",
            get(handlers::get_repositories).post(handlers::upsert_repository),
        )
        .route("/api/repositories/sync", post(handlers::sync_repositories))
        .route(
            "/api/repositories/{id}",
            get(handlers::get_repository_by_id)
                .put(handlers::update_repository)
                .delete(handlers::delete_repository),
        )
        .route(
            "/api/personal",
            get(handlers::get_personal_info).post(handlers::upsert_personal_info),
        )
        .route(
            "/api/personal/{id}",
            get(handlers::get_personal_info_by_id)
                .put(handlers::update_personal_info)
                .delete(handlers::delete_personal_info),
        )
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/github", get(handlers::github_login))
        .route("/api/auth/github/callback", get(handlers::github_callback))
        .route("/api/auth/google", get(handlers::google_login))
        .route("/api/auth/google/callback", get(handlers::google_callback))
        .route("/api/auth/me", get(handlers::get_current_user))
        .route("/api/auth/logout", post(handlers::logout))
        .with_state(state)
}
