//! `feddocs doctor` — Diagnose system health.

use feddocs_config::AppConfig;
use feddocs_core::Provider;
use feddocs_providers::OllamaProvider;
use feddocs_store::DocumentStore;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 feddocs Doctor — System Diagnostics");
    println!("======================================\n");

    let mut issues = 0;

    // Check config
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Configuration valid");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            return Ok(());
        }
    };

    // Check model server
    let provider = OllamaProvider::new(Some(&config.ollama.host));
    match provider.health_check().await {
        Ok(true) => {
            println!("  ✅ Model server reachable at {}", config.ollama.host);

            match provider.list_models().await {
                Ok(models) if models.iter().any(|m| m == &config.ollama.model) => {
                    println!("  ✅ Model '{}' installed", config.ollama.model);
                }
                Ok(_) => {
                    println!(
                        "  ⚠️  Model '{}' not installed — run `ollama pull {}`",
                        config.ollama.model, config.ollama.model
                    );
                    issues += 1;
                }
                Err(e) => {
                    println!("  ⚠️  Could not list models: {e}");
                    issues += 1;
                }
            }
        }
        Ok(false) | Err(_) => {
            println!(
                "  ❌ Model server not reachable at {} — run `feddocs serve` or `ollama serve`",
                config.ollama.host
            );
            issues += 1;
        }
    }

    // Check document store
    match DocumentStore::connect(&config.database.url()).await {
        Ok(store) => {
            println!("  ✅ Document store reachable");
            store.close().await;
        }
        Err(e) => {
            println!("  ❌ Document store not reachable: {e}");
            println!("     Grounded queries will receive a sentinel digest");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
