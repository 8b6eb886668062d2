//! Repository implementations of the domain storage traits.

pub mod employee;
pub mod ping;
pub mod settings;

pub use employee::EmployeeRepository;
pub use ping::PingRepository;
pub use settings::SettingsRepository;

use domain::stores::StoreError;

/// Maps a database error onto the storage error surface.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        other => StoreError::Backend(other.to_string()),
    }
}
