use clap::Parser;
use needlefern_core::tracing::setup_tracing;
use needlefern_server::config::ServerConfig;
use needlefern_server::lifecycle::{shutdown_signal, ServerError, StorefrontSystem};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = ServerConfig::parse();
    info!(?config, "Starting NeedleFern API");

    let system = StorefrontSystem::new(&config);
    let listener = TcpListener::bind(config.socket_addr()).await?;

    system.serve(listener, shutdown_signal()).await?;
    system.shutdown().await?;

    info!("NeedleFern API stopped");
    Ok(())
}
