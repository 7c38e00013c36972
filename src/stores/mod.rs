pub mod auth_store;
pub mod blob_store;
pub mod file_store;
