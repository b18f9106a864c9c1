//! Data models for the TripMate service
//!
//! This module contains the core domain models organized by concern:
//! - Destination: a point of interest in the static catalog
//! - Place: composed place details returned by the place endpoints

pub mod destination;
pub mod place;

// Re-export all public types for convenient access
pub use destination::Destination;
pub use place::{PlaceDetail, PlaceSummary};
