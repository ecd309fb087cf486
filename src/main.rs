use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use translation_gateway::{
    config::Config,
    gateway::TranslationGateway,
    languages::LanguageRegistry,
    provider::GoogleTranslateProvider,
    server::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_gateway=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let registry = LanguageRegistry::builtin();
    let provider = GoogleTranslateProvider::from_config(&config)?;
    let gateway = TranslationGateway::new(registry, Arc::new(provider), config.parent());

    info!(
        "Serving {} languages against {} ({})",
        registry.len(),
        config.translate_api_url,
        gateway.parent()
    );

    let app = server::router(AppState::new(gateway));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
