use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

use crate::state::AppState;

const OPENAPI_JSON: &str = "/docs/private/api.json";
const DOCS_TITLE: &str = "Packer";

/// Interactive API references, both reading the document served at `OPENAPI_JSON`.
pub fn docs_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(OPENAPI_JSON)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| {
                    op.summary("Scalar API reference")
                        .description("Browse the calculator endpoints and try `POST /api/v1/optimize`.")
                        .tag("docs")
                },
            ),
        )
        .api_route(
            "/swagger",
            get_with(
                Swagger::new(OPENAPI_JSON)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| {
                    op.summary("Swagger UI")
                        .description("Same OpenAPI document rendered by Swagger UI.")
                        .tag("docs")
                },
            ),
        )
        .route("/private/api.json", get(serve_openapi))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
