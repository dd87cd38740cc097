use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pandit_pricing::{app, config::Settings, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine outside local development
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pandit_pricing=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(
        "Tariff loaded: platform fee {}%, travel fee {}%, GST {}%",
        settings.tariffs.platform_fee_percent,
        settings.tariffs.travel_service_fee_percent,
        settings.tariffs.gst_percent
    );

    let app = app(AppState::new(settings.tariffs));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("Pricing service listening on {}", settings.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
