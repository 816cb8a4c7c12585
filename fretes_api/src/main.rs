mod antt;
mod cities;
mod config;
mod docs;
mod error;
mod pagination;
mod state;

use crate::antt::routes::antt_routes;
use crate::cities::cities_handler;
use crate::config::ApiConfig;
use crate::docs::docs_routes;
use crate::state::AppState;
use aide::axum::routing::get_with;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::{Extension, serve};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = ApiConfig::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .nest_api_service("/antt", antt_routes(state.clone()))
        .api_route(
            "/cities",
            get_with(cities_handler, |op| {
                op.description("Cities that can be used as origin or destination.")
            }),
        )
        .finish_api_with(&mut api, api_docs);

    if std::env::args().any(|a| a == "--generate-openapi") {
        use std::fs::File;
        use std::io::Write;

        std::fs::create_dir_all("schemas")?;
        let mut file = File::create("schemas/openapi.json")?;
        let spec = serde_json::to_string_pretty(&api)?;
        file.write_all(spec.as_bytes())?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    serve(listener, app).await?;

    Ok(())
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Quero Fretes API")
        .description("ANTT minimum road freight calculator.")
}
