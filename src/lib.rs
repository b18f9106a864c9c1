//! `TripMate` - travel destination lookup service
//!
//! This library provides a static destination catalog grouped by US state,
//! a place enrichment gateway backed by encyclopedia summaries, a small chat
//! assistant, and the HTTP API that exposes them.

pub mod api;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod summary;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use catalog::Catalog;
pub use chat::{ChatAssistant, ChatReply};
pub use config::TripMateConfig;
pub use error::TripMateError;
pub use gateway::{FALLBACK_SUMMARY, PlaceGateway, SummaryOutcome};
pub use models::{Destination, PlaceDetail, PlaceSummary};
pub use summary::{PageSummary, SummaryError, SummaryProvider, WikipediaClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripMateError>;
