//! Domain services.
//!
//! All services here are pure, synchronous functions of their inputs; I/O
//! happens in the stores before these are invoked.

pub mod attendance;
pub mod geofence_check;

pub use attendance::{aggregate_day, aggregate_range, month_bounds, summarize_today};
pub use geofence_check::{classify, GeofenceCheck};
