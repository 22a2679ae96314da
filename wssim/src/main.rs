use clap::Parser;
use tracing::info;

use wssim::config::SimulatorConfig;
use wssim::router::build_router;
use wssim::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = SimulatorConfig::parse();

    let state = AppState {
        responses_dir: config.responses_dir.clone(),
        web_dir: config.web_dir.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("wssim listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
