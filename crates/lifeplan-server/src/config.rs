//! Server configuration.

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address.
    pub http_bind_addr: String,

    /// Default `tracing` filter, used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_bind_addr: "127.0.0.1:8000".to_string(),
            log_filter: "lifeplan=info,tower_http=info".to_string(),
        }
    }
}
