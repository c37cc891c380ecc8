use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{app_module::AppState, health::health_controller, text::text_controller::text_router};

pub fn application_router() -> Router {
    Router::new()
        .route("/", get(health_controller::health))
        .nest("/text", text_router())
}

/// Full application: routes plus tracing, CORS and the shared state.
pub fn build_app(state: AppState) -> Router {
    Router::new().merge(application_router()).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(
                CorsLayer::new()
                    .allow_origin(tower_http::cors::Any)
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any),
            )
            .into_inner(),
    )
}
