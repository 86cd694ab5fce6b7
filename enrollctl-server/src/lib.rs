//! enrollctl-server: student enrollment API
//!
//! Stores students, subjects, and the enrollment join table in SQLite and
//! exposes CRUD plus two bulk-ingest endpoints (JSON payload and CSV upload)
//! over HTTP.

pub mod db;
pub mod http;
pub mod ingest;
pub mod models;

pub use db::{create_pool, run_migrations, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig};
