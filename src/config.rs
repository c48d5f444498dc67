// src/config.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum auction age must be at least one day: {0}")]
    InvalidMinAge(i64),
}

/// Age at which an open auction becomes eligible for closing.
///
/// The boundary is inclusive: an auction exactly `min_age_days` old is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClosingPolicySettings")]
pub struct ClosingPolicy {
    #[serde(rename = "minAgeDays")]
    min_age_days: i64,
}

impl ClosingPolicy {
    pub const DEFAULT_MIN_AGE_DAYS: i64 = 7;

    pub fn new(min_age_days: i64) -> Result<Self, ConfigError> {
        if min_age_days < 1 {
            return Err(ConfigError::InvalidMinAge(min_age_days));
        }
        Ok(ClosingPolicy { min_age_days })
    }

    pub fn min_age_days(&self) -> i64 {
        self.min_age_days
    }

    pub fn qualifies(&self, age_in_days: i64) -> bool {
        age_in_days >= self.min_age_days
    }
}

impl Default for ClosingPolicy {
    fn default() -> Self {
        ClosingPolicy {
            min_age_days: Self::DEFAULT_MIN_AGE_DAYS,
        }
    }
}

/// Unvalidated form read from configuration documents.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ClosingPolicySettings {
    #[serde(rename = "minAgeDays")]
    min_age_days: i64,
}

impl Default for ClosingPolicySettings {
    fn default() -> Self {
        ClosingPolicySettings {
            min_age_days: ClosingPolicy::DEFAULT_MIN_AGE_DAYS,
        }
    }
}

impl TryFrom<ClosingPolicySettings> for ClosingPolicy {
    type Error = ConfigError;

    fn try_from(settings: ClosingPolicySettings) -> Result<Self, Self::Error> {
        ClosingPolicy::new(settings.min_age_days)
    }
}
