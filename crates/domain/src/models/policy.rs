//! Process-wide polling policy.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;

/// Expected ping cadence and the tolerance before a gap counts as absence.
///
/// Shared by all employees; mutated only through an admin action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingPolicy {
    pub interval_minutes: u32,
    pub grace_minutes: u32,
}

impl PollingPolicy {
    /// Creates a policy. The interval must be positive.
    pub fn new(interval_minutes: u32, grace_minutes: u32) -> Result<Self, DomainError> {
        if interval_minutes == 0 {
            return Err(DomainError::InvalidPolicy(
                "interval must be at least one minute".into(),
            ));
        }
        Ok(Self {
            interval_minutes,
            grace_minutes,
        })
    }

    /// Longest gap between consecutive pings still counted as presence.
    pub fn max_gap_minutes(&self) -> u32 {
        self.interval_minutes + self.grace_minutes
    }
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self {
            interval_minutes: 30,
            grace_minutes: 5,
        }
    }
}

/// Request payload for updating the polling policy.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePollingPolicyRequest {
    #[validate(custom(function = "shared::validation::validate_interval_minutes"))]
    pub interval_minutes: u32,

    #[serde(default = "default_grace")]
    #[validate(custom(function = "shared::validation::validate_grace_minutes"))]
    pub grace_minutes: u32,
}

fn default_grace() -> u32 {
    5
}
