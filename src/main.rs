//! Payroll server
//!
//! Reads `config/payroll.yaml` (or `$PAYROLL_CONFIG`), applies environment
//! overrides and serves the API until Ctrl+C or SIGTERM.

use anyhow::Result;
use payroll::config::AppConfig;
use payroll::server::ServerBuilder;
use payroll::storage::Stores;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payroll=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let addr = config.bind_addr()?;
    let stores = Stores::from_config(&config.storage).await?;

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_public_url(&config.server.public_url)
        .register_stores(stores)
        .serve(addr)
        .await
}
