//! Shared utilities for the attendance backend.
//!
//! This crate provides functionality used across the other crates:
//! - Common validation logic for coordinates and polling settings
//! - JWT token issuing and verification

pub mod jwt;
pub mod validation;
