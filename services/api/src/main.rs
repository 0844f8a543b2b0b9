use sea_orm::Database;
use tracing::info;

use touchline_api::config::ApiConfig;
use touchline_api::router::build_router;
use touchline_api::state::AppState;
use touchline_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let http = reqwest::Client::builder()
        .user_agent(concat!("touchline-api/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client");

    let addr = format!("0.0.0.0:{}", config.api_port);
    let state = AppState::new(db, http, config);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
