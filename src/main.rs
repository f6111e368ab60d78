//! Libris server binary.
//!
//! Run with: cargo run
//! GraphiQL: http://localhost:4000/

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::Method,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::info;

use libris::config::AppConfig;
use libris::datasource::DataSource;
use libris::schema::{CatalogSchema, build_schema};
use libris::services::{AuthService, CatalogService};

async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn sdl(State(schema): State<CatalogSchema>) -> impl IntoResponse {
    schema.sdl()
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "healthy", "service": "libris" }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(true)
        .init();

    let config = AppConfig::from_env();
    info!(host = %config.host, port = %config.port, "configuration loaded");

    let data = Arc::new(DataSource::load(&config.data_dir)?);
    info!(
        authors = data.authors().len(),
        books = data.books().len(),
        comments = data.comments().len(),
        "catalog loaded"
    );

    let schema = build_schema(CatalogService::new(Arc::clone(&data)), AuthService::new());

    // The front-end sends credentialed requests from its own origin, so
    // the origin is mirrored rather than wildcarded.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request());

    let app = Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .route("/schema", get(sdl))
        .route("/health", get(health))
        .layer(cors)
        .with_state(schema);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("server ready at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
