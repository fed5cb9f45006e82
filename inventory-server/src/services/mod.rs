//! Domain services
//!
//! - [`SaleRecorder`] - the transactional sale flow
//! - [`AlertEngine`] - advisory stock notifications
//! - [`StockService`] - administrative product/inventory mutations
//!
//! All services are constructed once at startup with the shared
//! [`DbService`](crate::db::DbService) (dependency injection; no global
//! handles) and are cheap to clone.

pub mod alert_engine;
pub mod error;
pub mod sale_recorder;
pub mod stock_service;

pub use alert_engine::AlertEngine;
pub use error::{ServiceError, ServiceResult};
pub use sale_recorder::SaleRecorder;
pub use stock_service::StockService;
