//! `feddocs pipeline` — Create and seed the federal documents table.

use feddocs_config::AppConfig;
use tracing::error;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    if let Err(e) = feddocs_store::seed::run_pipeline(&config.database.url()).await {
        error!(error = %e, "Pipeline failed");
        return Err(Box::new(e));
    }

    Ok(())
}
