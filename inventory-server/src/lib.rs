//! ShelfStock Inventory Server - retail inventory tracker
//!
//! # Architecture overview
//!
//! The server exposes a REST API over an embedded SQLite store and keeps
//! product catalog, stock levels, sales and stock alerts consistent through
//! transactional writes:
//!
//! - **Database** (`db`): embedded SQLite via sqlx, repository layer
//! - **Services** (`services`): sale recording, stock mutations, alert engine
//! - **HTTP API** (`api`): RESTful routes per resource
//! - **Identity** (`identity`): actor attribution for mutating requests
//!
//! # Module structure
//!
//! ```text
//! inventory-server/src/
//! ├── core/          # config, state, server, errors
//! ├── identity/      # actor extraction
//! ├── services/      # sale recorder, stock service, alert engine
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # errors, logging
//! └── db/            # database layer and repositories
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod identity;
pub mod services;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use identity::CurrentActor;
pub use services::{AlertEngine, SaleRecorder, StockService};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - tracing format specifiers supported
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load .env and initialize logging from LOG_LEVEL / LOG_DIR
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine; env vars may come from the process environment
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __         __ ____ _____ __             __
  / ___// /_  ___  / // __// ___// /_ ____  ____/ /__
  \__ \/ __ \/ _ \/ // /_  \__ \/ __// __ \/ __/ //_/
 ___/ / / / /  __/ // __/ ___/ / /_ / /_/ / /_/ ,<
/____/_/ /_/\___/_//_/   /____/\__/ \____/\__/_/|_|
    "#
    );
}
