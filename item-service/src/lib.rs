pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ItemConfig;
use crate::services::ItemStore;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevOps Pipeline Demo API",
        description = "A simple item API to demonstrate a DevOps CI/CD pipeline.",
        version = "1.0.0"
    ),
    paths(
        handlers::root::read_root,
        handlers::items::list_items,
        handlers::items::get_item,
        handlers::items::create_item,
        handlers::health::health_check,
    ),
    components(
        schemas(
            models::Item,
            dtos::MessageResponse,
            service_core::error::ErrorResponse,
            dtos::HealthResponse,
        )
    ),
    tags(
        (name = "Root", description = "Service greeting"),
        (name = "Items", description = "Item catalogue"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: ItemConfig,
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(config: ItemConfig, store: Arc<dyn ItemStore>) -> Self {
        Self { config, store }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::read_root))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/items/:item_id", get(handlers::get_item))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics::metrics));

    if state.config.docs_enabled {
        app = app.route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));
    }

    app.with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        .layer(from_fn(request_id_middleware))
}
