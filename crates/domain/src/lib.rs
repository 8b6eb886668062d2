//! Domain layer for the attendance backend.
//!
//! This crate contains:
//! - Domain models (Employee, LocationPing, OfficeGeofence, reports)
//! - The attendance engine (geofence classification and aggregation)
//! - Storage capability traits with an in-memory fixture implementation

pub mod error;
pub mod models;
pub mod services;
pub mod stores;
