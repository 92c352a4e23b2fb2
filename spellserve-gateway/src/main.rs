//! Entry point for the `spellserve-gateway` HTTP server.

use spellserve_gateway::{config::GatewayConfig, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = GatewayConfig::from_env();

    if let Err(e) = server::run(config).await {
        tracing::error!(error = %e, "spellserve-gateway stopped");
        std::process::exit(1);
    }
}
