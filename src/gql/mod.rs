pub mod client;
pub mod documents;

pub use client::ApiClient;
