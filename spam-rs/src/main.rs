//! spam-rs: spam scoring API server
//!
//! Usage: `spam-rs [config.toml]`. Without an argument `./config.toml` is
//! used when present, otherwise the built-in defaults.

use anyhow::Context;
use spam_rs::api::{ApiServer, ModelSource};
use spam_rs::classifier::{default_model, serializer};
use spam_rs::{logging, Config};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, origin) = if let Some(config_path) = std::env::args().nth(1) {
        (Config::from_file(&config_path)?, config_path)
    } else if Path::new("config.toml").exists() {
        (Config::from_file("config.toml")?, "config.toml".to_string())
    } else {
        (Config::default(), "defaults".to_string())
    };
    let config = config.with_env_overrides();
    config.validate()?;

    logging::init(&config.logging);

    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded from {}", origin);

    let (model, source) = match &config.model.path {
        Some(path) => {
            let model = serializer::load(path)
                .with_context(|| format!("Failed to load model from '{}'", path.display()))?;
            info!("Loaded trained model: {} weights", model.vocabulary_size());
            (model, ModelSource::Artifact)
        }
        None => {
            info!("No model path configured, serving the built-in weight table");
            (default_model().clone(), ModelSource::Default)
        }
    };

    let server = ApiServer::new(Arc::new(model), source, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
