//! Entity definitions (database row mappings).

pub mod employee;
pub mod ping;
pub mod setting;

pub use employee::EmployeeEntity;
pub use ping::PingEntity;
pub use setting::SettingEntity;
