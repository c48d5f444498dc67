// src/domain/closer.rs
use log::{debug, info, warn};
use crate::config::ClosingPolicy;
use super::errors::Errors;
use super::ports::{AuctionRepository, Clock, Notifier, RepositoryError, SYSTEM_CLOCK};

/// An auction whose closure could not be persisted during a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosingFailure {
    pub description: String,
    pub error: RepositoryError,
}

/// Closes open auctions once they reach the policy's minimum age.
///
/// Persistence failures are isolated per auction: a failed update is recorded
/// in [`AuctionCloser::failures`], that auction is not notified, and the pass
/// moves on to the next one.
pub struct AuctionCloser<'a> {
    repository: &'a dyn AuctionRepository,
    notifier: &'a dyn Notifier,
    clock: &'a dyn Clock,
    policy: ClosingPolicy,
    total_closed: usize,
    failures: Vec<ClosingFailure>,
}

impl<'a> AuctionCloser<'a> {
    pub fn new(repository: &'a dyn AuctionRepository, notifier: &'a dyn Notifier) -> Self {
        AuctionCloser {
            repository,
            notifier,
            clock: &SYSTEM_CLOCK,
            policy: ClosingPolicy::default(),
            total_closed: 0,
            failures: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_policy(mut self, policy: ClosingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs one pass over the open auctions and returns how many were closed.
    ///
    /// Only a failure to list the open auctions is returned as an error.
    pub fn close_expired(&mut self) -> Result<usize, Errors> {
        let auctions = self.repository.open_auctions()?;
        let now = self.clock.now();
        self.failures.clear();

        let mut closed = 0;
        for mut auction in auctions {
            let age = auction.age_in_days(now);
            if !self.policy.qualifies(age) {
                debug!("Keeping auction '{}' open ({} days old)", auction.description(), age);
                continue;
            }

            auction.close();
            if let Err(error) = self.repository.update(&auction) {
                warn!("Could not persist closure of auction '{}': {}", auction.description(), error);
                self.failures.push(ClosingFailure {
                    description: auction.description().to_string(),
                    error,
                });
                continue;
            }

            closed += 1;
            if let Err(error) = self.notifier.notify(&auction) {
                warn!("Auction '{}' closed but notification failed: {}", auction.description(), error);
            }
        }

        self.total_closed += closed;
        info!("Closed {} auction(s), {} failed to persist", closed, self.failures.len());
        Ok(closed)
    }

    pub fn total_closed(&self) -> usize {
        self.total_closed
    }

    /// Update failures from the most recent pass.
    pub fn failures(&self) -> &[ClosingFailure] {
        &self.failures
    }
}
