// src/domain/errors.rs
use thiserror::Error;
use crate::money::MoneyError;
use super::ports::RepositoryError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Errors {
    #[error("Auction has no bids: {0}")]
    NoBids(String),

    #[error("Invalid bid on auction {0}: {1}")]
    InvalidBid(String, MoneyError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
