use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finsight::llm::GeminiClient;
use finsight::{config::Config, models::AppState, routes::create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finsight=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing GEMINI_API_KEY is fatal here, before
    // the server ever binds.
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    let generator = Arc::new(GeminiClient::new(&config.llm));
    let state = AppState {
        config: config.clone(),
        generator,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr()
        .context("Invalid HOST/PORT combination")?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
