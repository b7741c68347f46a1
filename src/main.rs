use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use medguide_core::{
    GuidanceService, ProducerMode, config::core_config_from_env, constants::DEFAULT_ADDR,
};

/// Main entry point for the MedGuide application
///
/// Serves the symptom form, the JSON API and the Swagger UI on one HTTP listener.
///
/// # Environment Variables
/// - `MEDGUIDE_ADDR`: HTTP server address (default: "0.0.0.0:3000")
/// - `MEDGUIDE_MODE`: `mock` (default) or `live`
/// - `MEDGUIDE_MODEL`, `MEDGUIDE_API_BASE`, `MEDGUIDE_TEMPERATURE`,
///   `MEDGUIDE_REQUEST_TIMEOUT_SECS`: live completion settings
/// - `OPENAI_API_KEY`: credential for the completion service
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration in the environment is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medguide=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDGUIDE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let cfg = core_config_from_env()?;
    let service = GuidanceService::from_config(&cfg)?;

    tracing::info!("++ Starting MedGuide on {} ({} mode)", addr, cfg.mode());
    if cfg.mode() == ProducerMode::Live && cfg.completion().api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; the completion service will reject requests");
    }

    let app = router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }
    tracing::info!("-- Shutting down MedGuide");
}
