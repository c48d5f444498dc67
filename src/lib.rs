// src/lib.rs
pub mod config;
pub mod domain;
pub mod money;

pub use config::*;
pub use domain::*;
pub use money::*;
