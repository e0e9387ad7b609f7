pub mod app;
pub mod config;
pub mod dummy_gateway;
pub mod entitlement_watcher;
pub mod error;
pub mod rate_limit;
pub mod redis_blob_store;
pub mod setup;

pub use error::InfraError;
