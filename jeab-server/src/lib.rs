//! jeab-server: catalog of JEAB articles over HTTP
//!
//! Articles are annotated with behavioral principles, experimental
//! procedures, and mathematical models. The crate provides the SQLite
//! storage handle, repositories, transfer shapes, and the axum router.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{CatalogConfig, ConfigError};
pub use db::{Database, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
