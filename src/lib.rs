use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod services;

pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Resource routers (each applies its own per-route guards)
        .merge(handlers::auth::routes())
        .merge(handlers::companies::routes())
        .merge(handlers::jobs::routes())
        .merge(handlers::users::routes())
        // Global middleware; identification runs for every route and only
        // attaches a principal, per-route guards decide whether to reject
        .layer(axum::middleware::from_fn(middleware::identify))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "jobboard-api",
        "version": version,
        "description": "Job board backend API built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "auth": "POST /auth/token, POST /auth/register (public), GET /auth/me (login)",
            "companies": "/companies[/:handle] (reads public, writes admin)",
            "jobs": "/jobs[/:id] (reads public, writes admin)",
            "users": "/users[/:username] (admin, detail routes admin-or-self)",
        }
    }))
}

async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
