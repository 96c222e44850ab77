pub mod app;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

// Re-export key items for convenience
pub use app::{create_client, init_tracing};
pub use client::PestApiClient;
pub use error::{ApiError, ApiResult};
