// src/domain/users.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub type UserName = String;

/// A bidder, identified by name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    name: UserName,
}

impl User {
    pub fn new(name: impl Into<UserName>) -> Self {
        User { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
