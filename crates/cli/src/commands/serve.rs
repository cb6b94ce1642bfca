//! `feddocs serve` — Bootstrap the model server, then start the gateway.

use feddocs_config::AppConfig;
use feddocs_providers::serve::{ServerStatus, ensure_server};
use tracing::{info, warn};

pub async fn run(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load()?;
    if let Some(port) = port {
        config.gateway.port = port;
    }

    // Best-effort bootstrap: a failed launch is logged but does not stop
    // the gateway — queries then surface the provider's own error string.
    match ensure_server(&config.ollama.host).await {
        Ok(ServerStatus::AlreadyRunning) => {}
        Ok(ServerStatus::Launched) => {
            info!(host = %config.ollama.host, "Model server launched");
        }
        Err(e) => {
            warn!(error = %e, "Model server bootstrap failed, starting gateway anyway");
        }
    }

    feddocs_gateway::start(config).await
}
