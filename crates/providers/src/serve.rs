//! Model server bootstrap.
//!
//! Before the gateway starts, make sure an Ollama server is accepting
//! connections: probe the configured port, reuse a running instance when
//! the probe succeeds, otherwise launch `ollama serve` as a child process
//! and poll the port until it comes up or a bounded deadline lapses.
//!
//! An already-running server is reused without further verification; only
//! a freshly launched one is polled for readiness.

use feddocs_core::error::ProviderError;
use std::process::Stdio;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::process::Command;
use tracing::{info, warn};

/// How long a freshly launched server may take to accept connections.
pub const READINESS_TIMEOUT: Duration = Duration::from_secs(15);

/// Delay between readiness probes.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Outcome of the bootstrap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    /// The port was already accepting connections; the existing instance
    /// is reused.
    AlreadyRunning,
    /// A new `ollama serve` process was launched and became ready.
    Launched,
}

/// Ensure the model server at `base_url` is accepting connections.
pub async fn ensure_server(base_url: &str) -> Result<ServerStatus, ProviderError> {
    let (host, port) = host_port(base_url);

    if port_open(&host, port).await {
        info!(host = %host, port, "Model server already running, reusing existing instance");
        return Ok(ServerStatus::AlreadyRunning);
    }

    info!(host = %host, port, "Model server not reachable, launching `ollama serve`");

    Command::new("ollama")
        .arg("serve")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            ProviderError::NotConfigured(format!("Failed to launch `ollama serve`: {e}"))
        })?;

    let deadline = tokio::time::Instant::now() + READINESS_TIMEOUT;
    loop {
        if port_open(&host, port).await {
            info!(host = %host, port, "Model server is ready");
            return Ok(ServerStatus::Launched);
        }
        if tokio::time::Instant::now() >= deadline {
            warn!(host = %host, port, "Model server did not become ready in time");
            return Err(ProviderError::Timeout(format!(
                "model server did not accept connections on {host}:{port} within {}s",
                READINESS_TIMEOUT.as_secs()
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Check whether `host:port` accepts a TCP connection.
async fn port_open(host: &str, port: u16) -> bool {
    TcpStream::connect((host, port)).await.is_ok()
}

/// Extract host and port from a base URL like `http://localhost:11434`.
///
/// Falls back to Ollama's fixed default port when none is given.
fn host_port(base_url: &str) -> (String, u16) {
    let stripped = base_url
        .trim_end_matches('/')
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    let authority = stripped.split('/').next().unwrap_or(stripped);

    match authority.rsplit_once(':') {
        Some((host, port)) => match port.parse() {
            Ok(port) => (host.to_string(), port),
            Err(_) => (authority.to_string(), 11434),
        },
        None => (authority.to_string(), 11434),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_port_with_explicit_port() {
        assert_eq!(
            host_port("http://localhost:11434"),
            ("localhost".to_string(), 11434)
        );
        assert_eq!(
            host_port("http://ollama.internal:8080/"),
            ("ollama.internal".to_string(), 8080)
        );
    }

    #[test]
    fn host_port_defaults_when_missing() {
        assert_eq!(host_port("http://localhost"), ("localhost".to_string(), 11434));
    }

    #[test]
    fn host_port_ignores_path() {
        assert_eq!(
            host_port("http://localhost:11434/api"),
            ("localhost".to_string(), 11434)
        );
    }

    #[tokio::test]
    async fn port_probe_detects_listener() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(port_open("127.0.0.1", port).await);
    }

    #[tokio::test]
    async fn bootstrap_reuses_running_server() {
        // A plain TCP listener is enough — the probe only checks that the
        // port accepts connections.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{port}");

        let status = ensure_server(&base_url).await.unwrap();
        assert_eq!(status, ServerStatus::AlreadyRunning);
    }
}
