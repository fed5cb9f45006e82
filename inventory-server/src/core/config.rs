//! Server configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Env var | Default | Description |
//! |---------|---------|-------------|
//! | WORK_DIR | /var/lib/shelfstock | Working directory (database, logs) |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | DATABASE_PATH | {WORK_DIR}/inventory.db | SQLite database file |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | LOG_DIR | (unset) | Directory for daily-rolling log files |
//! | REQUEST_TIMEOUT_MS | 30000 | Request timeout in milliseconds |

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Optional directory for rolling file logs
    pub log_dir: Option<String>,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let work_dir =
            std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/shelfstock".into());
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| format!("{work_dir}/inventory.db"));

        Self {
            work_dir,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }
}
