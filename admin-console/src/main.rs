use admin_console::{App, AppConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::parse();
    tracing::info!(api_url = %config.api_url, "admin console starting");

    let mut app = App::new(config);
    app.run().await
}
