pub mod api;
pub mod client;
pub mod error;

pub use api::ApiClient;
pub use client::ChatWorker;
