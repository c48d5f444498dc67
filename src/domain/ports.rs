// src/domain/ports.rs
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use super::auctions::Auction;
use super::payments::Payment;

/// Storage for auctions, implemented by the surrounding application.
pub trait AuctionRepository {
    fn open_auctions(&self) -> Result<Vec<Auction>, RepositoryError>;
    fn closed_auctions(&self) -> Result<Vec<Auction>, RepositoryError>;
    fn update(&self, auction: &Auction) -> Result<(), RepositoryError>;
}

pub trait PaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), RepositoryError>;
}

/// Outbound confirmation that an auction has been closed (e-mail or similar).
pub trait Notifier {
    fn notify(&self, auction: &Auction) -> Result<(), NotificationError>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub(crate) static SYSTEM_CLOCK: SystemClock = SystemClock;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    #[error("record rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
