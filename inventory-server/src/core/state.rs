//! Server state - shared handles for all request handlers
//!
//! `ServerState` owns the database service and the domain services built on
//! it. Everything inside is cheap to clone (pool handles), so axum can clone
//! the state per request without cost.

use crate::core::Config;
use crate::core::error::{Result, ServerError};
use crate::db::DbService;
use crate::services::{AlertEngine, SaleRecorder, StockService};

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SQLite via sqlx)
    pub db: DbService,
    /// Transactional sale flow
    pub sale_recorder: SaleRecorder,
    /// Advisory stock notifications
    pub alert_engine: AlertEngine,
    /// Administrative product/inventory mutations
    pub stock: StockService,
}

impl ServerState {
    /// Initialize all services: create the working directory, open the
    /// database (running migrations) and wire the services together
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db = DbService::new(&config.database_path)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        let alert_engine = AlertEngine::new(db.clone());
        let sale_recorder = SaleRecorder::new(db.clone(), alert_engine.clone());
        let stock = StockService::new(db.clone(), alert_engine.clone());

        Ok(Self {
            config: config.clone(),
            db,
            sale_recorder,
            alert_engine,
            stock,
        })
    }
}
