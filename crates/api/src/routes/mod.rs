//! Route handlers.

pub mod auth;
pub mod employees;
pub mod health;
pub mod locations;
pub mod reports;
pub mod settings;
