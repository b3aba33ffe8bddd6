use actix_web::{web, App, HttpServer};
use std::io;
use tokio::signal;

use devconsole_backend::config::Config;
use devconsole_backend::http::{configure_routes, AppState};
use devconsole_backend::middleware::cors_middleware;
use devconsole_backend::service::SorobanService;
use devconsole_backend::soroban::SpecMiner;
use devconsole_backend::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize telemetry
    init_telemetry(&config.server.rust_log);

    let state = web::Data::new(AppState {
        soroban_service: SorobanService::new(config.stellar.network.clone()),
        spec_miner: SpecMiner::with_config(config.spec_miner.clone()),
    });

    tracing::info!(
        network = %config.stellar.network.name,
        rpc_url = %config.stellar.network.rpc_url,
        "Starting DevConsole backend server on {}:{}",
        config.server.host,
        config.server.port
    );

    let web_origin = config.server.web_origin.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_middleware(&web_origin))
            .wrap(actix_web::middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((config.server.host.clone(), config.server.port))?
    .run();

    // Graceful shutdown
    let server_handle = server.handle();
    tokio::spawn(async move {
        signal::ctrl_c().await.expect("Failed to listen for shutdown signal");
        tracing::info!("Shutdown signal received, stopping server...");
        server_handle.stop(true).await;
    });

    server.await
}
