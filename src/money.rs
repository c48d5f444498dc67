// src/money.rs
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type AmountValue = f64;

/// A finite, strictly positive monetary value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount {
    value: AmountValue,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    #[error("Amount must be a finite number")]
    NotFinite,

    #[error("Amount must be greater than zero: {0}")]
    NotPositive(AmountValue),

    #[error("Invalid amount value: {0}")]
    Parse(String),
}

impl Amount {
    pub fn new(value: AmountValue) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        if value <= 0.0 {
            return Err(MoneyError::NotPositive(value));
        }
        Ok(Amount { value })
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }

    /// Total order over amounts; never ambiguous since NaN is rejected on construction.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        // Shortest text that parses back to the same value; Display rounds to cents.
        serializer.serialize_str(&self.value.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Amount::from_str(&text)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<AmountValue>()
            .map_err(|_| MoneyError::Parse(s.to_string()))?;
        Amount::new(value)
    }
}
