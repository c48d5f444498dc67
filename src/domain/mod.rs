// src/domain/mod.rs
pub mod auctions;
pub mod bids;
pub mod closer;
pub mod errors;
pub mod evaluator;
pub mod payment_generator;
pub mod payments;
pub mod ports;
pub mod users;

pub use self::auctions::*;
pub use self::bids::*;
pub use self::closer::*;
pub use self::errors::*;
pub use self::evaluator::*;
pub use self::payment_generator::*;
pub use self::payments::*;
pub use self::ports::*;
pub use self::users::*;
