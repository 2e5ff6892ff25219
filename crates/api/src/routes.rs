use crate::handlers;
use crate::middleware::resolve_client;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/visitors", get(handlers::get_visitors))
        .with_state(state)
}

pub fn create_embed_routes(state: AppState) -> Router {
    Router::new()
        .route("/visitors", get(handlers::get_embed_visitors))
        .with_state(state)
}

/// Content pages. A load of a page that exists is recorded as a visit.
pub fn create_page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_index))
        .route("/{page}", get(handlers::get_page))
        .route_layer(middleware::from_fn(resolve_client))
        .with_state(state)
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state.clone()))
        .nest("/embed", create_embed_routes(state.clone()))
        .nest_service("/static", ServeDir::new(state.static_dir()))
        .merge(create_page_routes(state))
        .layer(TraceLayer::new_for_http())
}
