//! Showroom Library
//!
//! A Rust library for browsing and searching a vehicle listing catalog.
//! Provides asynchronous catalog loading with simulated source latency,
//! facet derivation, pure filtering, and a client for the chat assistant.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
