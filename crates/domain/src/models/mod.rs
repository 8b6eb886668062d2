//! Domain models.

pub mod employee;
pub mod geofence;
pub mod ping;
pub mod policy;
pub mod report;
pub mod schedule;

pub use employee::{
    ApproveEmployeeRequest, Employee, EmployeeResponse, LoginRequest, NewEmployee, TokenResponse,
    UpdateScheduleRequest,
};
pub use geofence::{
    Coordinates, OfficeGeofence, OfficeSettingsResponse, UpdateAreaRequest, UpdateCircleRequest,
};
pub use ping::{LocationPing, NewPing, PingResponse, SubmitPingRequest, TodayStatusResponse};
pub use policy::{PollingPolicy, UpdatePollingPolicyRequest};
pub use report::{DailyReport, EmployeeDaySummary, RangeReport, TodaySummary};
pub use schedule::WorkSchedule;
