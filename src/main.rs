use sample_app_backend::{app, config::ServerConfig, logger};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {

    dotenvy::dotenv().ok();

    logger::init_logging();

    let config = ServerConfig::from_env()?;

    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");

    Ok(())

}

async fn shutdown_signal() {

    // if the handler can't be installed, just run until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }

    info!("shutdown signal received, draining connections");

}
