// Core modules
pub mod client;
pub mod config;
pub mod services;
pub mod state;
pub mod types;
pub mod web;

// Re-exports
pub use client::ReviewClient;
pub use services::OllamaClient;
pub use state::AppState;
