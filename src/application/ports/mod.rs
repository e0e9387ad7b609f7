pub mod blob_store;
pub mod payment_gateway;
