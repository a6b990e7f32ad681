use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, ServiceInfo};

use crate::openapi::ApiDoc;

pub mod auth;
pub mod gcd;
pub mod theory;

use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service healthy")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service info")))]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "GCD Visualizer API",
        docs: "/docs",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full application router: public info/theory/auth routes plus
/// token-protected GCD routes, with CORS and per-request tracing.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/gcd/calculate", post(gcd::calculate))
        .route("/gcd/history", get(gcd::list_history))
        .route(
            "/gcd/history/:id",
            get(gcd::get_history_item).delete(gcd::delete_history_item),
        )
        .route("/theory/euclid", get(theory::euclid))
        .route("/theory/complexity", get(theory::complexity))
        .route("/theory/applications", get(theory::applications))
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
