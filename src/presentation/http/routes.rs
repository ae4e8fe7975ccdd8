// src/presentation/http/routes.rs
use crate::presentation::http::middleware::contact_rate_limit_layer;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, categories, contact},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Assemble the application router. The contact limiter keys on the client
/// IP, so it needs `into_make_service_with_connect_info`; in-process callers
/// without connect info pass `false`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit_contact: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let mut contact_routes =
        Router::new().route("/api/helper/contact", post(contact::submit_contact));
    if rate_limit_contact {
        if let Some(limiter) = contact_rate_limit_layer() {
            contact_routes = contact_routes.layer(limiter);
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/articles/most-viewed", get(articles::most_viewed))
        .route("/api/articles/archive", get(articles::archive))
        .route(
            "/api/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/articles/{id}/views", post(articles::record_view))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/categories/{id}", get(categories::get_category))
        .route("/api/auth/is-authenticated", post(auth::is_authenticated))
        .merge(contact_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
