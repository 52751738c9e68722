use std::sync::Arc;

use sales_analytics::AsyncSalesAnalytics;
use sales_api::config::ApiConfig;
use sales_api::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sales-api failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ApiConfig::from_env()?;

    tracing::info!("Generating sales datasets...");
    let mut builder = AsyncSalesAnalytics::builder();
    if let Some(count) = config.records_per_year {
        builder = builder.records_per_year(count);
    }
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    let analytics = builder.build().await?;
    tracing::info!("{}", analytics.inner());

    let app = sales_api::build_app(Arc::new(AppState { analytics }));

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("Listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
