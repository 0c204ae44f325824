use std::collections::HashSet;
use std::env;
use std::net::SocketAddr;

/// Runtime configuration, read from the environment.
///
/// - `PATIENT_API_ADDR`: socket address to bind (default `127.0.0.1:3000`).
/// - `PATIENT_API_TOKENS`: comma-separated bearer tokens accepted by the
///   authentication gate. With no tokens configured, every authenticated
///   route answers 401.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub api_tokens: HashSet<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("PATIENT_API_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let api_tokens = env::var("PATIENT_API_TOKENS")
            .map(|v| {
                v.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            bind_addr,
            api_tokens,
        }
    }
}
