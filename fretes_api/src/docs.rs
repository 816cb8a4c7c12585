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

const OPENAPI_JSON_URL: &str = "/docs/private/api.json";
const DOCS_TITLE: &str = "Quero Fretes API";

/// Scalar reference at `/docs`, Swagger UI at `/docs/swagger`, both reading
/// the generated document.
pub fn docs_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(OPENAPI_JSON_URL)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| op.description("Freight calculator API reference."),
            ),
        )
        .api_route(
            "/swagger",
            get_with(
                Swagger::new(OPENAPI_JSON_URL)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| op.description("Swagger UI over the same document."),
            ),
        )
        .route("/private/api.json", get(serve_openapi_json))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}

async fn serve_openapi_json(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
