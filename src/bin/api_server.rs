// src/bin/api_server.rs

use morpheme_blocks::infra::logging;
use morpheme_blocks::transport;
use morpheme_blocks::{Repository, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = ServerConfig::from_env()?;
    logging::init(config.log_format);

    // --- Repository Initialization ---
    let repository = Repository::initial(config.seed_data);
    let app_state = transport::http::AppState::new(repository);

    // --- API Server Initialization ---
    let app = transport::http::create_app(app_state);
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
            }
        })
        .await?;

    info!("shutdown complete");
    Ok(())
}
