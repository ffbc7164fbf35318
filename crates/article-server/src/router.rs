//! Router assembly for the article HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS and
//! tracing middleware layers. [`build_app`] wraps the router so that a
//! trailing slash on any path routes the same as the bare path.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::home_page))
        .route("/all", get(handlers::articles::list_articles))
        .route("/article", post(handlers::articles::create_article))
        .route("/article/{id}", get(handlers::articles::get_article))
        .route("/update_article", put(handlers::articles::update_article))
        .route(
            "/delete_article/{id}",
            delete(handlers::articles::delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Builds the complete service: [`build_router`] behind trailing-slash
/// normalization.
///
/// Normalization has to run before routing, so it wraps the router rather
/// than being added with `Router::layer`.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
