/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JSON-RPC endpoint of the recorder (default: `http://localhost:4000/jsonrpc`).
    pub recorder_url: String,
    /// Timeout for the forwarding call in seconds (default: `20`).
    pub recorder_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                         |
    /// |-------------------------|---------------------------------|
    /// | `HOST`                  | `0.0.0.0`                       |
    /// | `PORT`                  | `3000`                          |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                            |
    /// | `RECORDER_URL`          | `http://localhost:4000/jsonrpc` |
    /// | `RECORDER_TIMEOUT_SECS` | `20`                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let recorder_url = std::env::var("RECORDER_URL")
            .unwrap_or_else(|_| "http://localhost:4000/jsonrpc".into());

        let recorder_timeout_secs: u64 = std::env::var("RECORDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("RECORDER_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            request_timeout_secs,
            recorder_url,
            recorder_timeout_secs,
        }
    }
}
