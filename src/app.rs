use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::PestApiClient;
use crate::config::Config;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rs_pest_client=info,pestwatch=info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the backend client from the process-wide configuration.
pub fn create_client() -> Result<PestApiClient, anyhow::Error> {
    let config = Config::global().clone();
    info!(
        "Initializing backend client (base URL: {}, timeout: {}s)",
        if config.api_url.is_empty() {
            "<dev proxy>"
        } else {
            config.api_url.as_str()
        },
        config.timeout.as_secs()
    );
    Ok(PestApiClient::new(config)?)
}
