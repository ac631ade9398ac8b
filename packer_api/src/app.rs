use std::sync::Arc;

use aide::{openapi::OpenApi, transform::TransformOpenApi};
use axum::{Extension, Router, http::Method, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    docs::docs_routes,
    index::{health_handler, index_handler},
    routes::api_routes,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> (Router, Arc<OpenApi>) {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .nest_api_service("/api/v1", api_routes(state.clone()))
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::clone(&api)))
        .with_state(state);

    (app, api)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Packer Open API")
        .description("Splits an amount into the fewest fixed-size packs.")
}
