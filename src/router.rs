use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use account_master_config::{CorsConfig, ServerConfig};
use account_master_observability::logging_middleware;

use crate::docs::ApiDoc;
use crate::middleware::auth::authenticate;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Assembles the full application.
///
/// Everything under `/user` sits behind [`authenticate`]; the docs UIs are
/// public. Request logging runs after routing so it can record the matched
/// route.
pub fn init_router(state: AppState, server: &ServerConfig) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/user",
            init_users_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .route_layer(middleware::from_fn(logging_middleware))
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout))
        .layer(CatchPanicLayer::new())
        .layer(cors)
}
