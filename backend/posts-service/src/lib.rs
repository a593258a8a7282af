/// Posts Service Library
///
/// REST resource for posts and the comments nested under them.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and the route table
/// - `models`: Post, Comment and the validated drafts
/// - `services`: Post and comment stores (validation, existence checks)
/// - `db`: Storage traits with PostgreSQL and in-memory backends
/// - `error`: Error types and HTTP rendering
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
