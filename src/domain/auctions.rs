// src/domain/auctions.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::money::{Amount, AmountValue};
use super::bids::Bid;
use super::errors::Errors;
use super::users::User;

/// An item on sale. Bids are kept in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    description: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
    bids: Vec<Bid>,
    closed: bool,
}

impl Auction {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Open -> Closed. There is no way back.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whole calendar days between creation and `now`.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        (now.date_naive() - self.created_at.date_naive()).num_days()
    }
}

/// Fluent construction of an [`Auction`]; bid values are validated in [`AuctionBuilder::build`].
#[derive(Debug, Clone)]
pub struct AuctionBuilder {
    description: String,
    created_at: DateTime<Utc>,
    bids: Vec<(User, AmountValue)>,
}

impl AuctionBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        AuctionBuilder {
            description: description.into(),
            created_at: Utc::now(),
            bids: Vec::new(),
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn bid(mut self, bidder: User, value: AmountValue) -> Self {
        self.bids.push((bidder, value));
        self
    }

    pub fn build(self) -> Result<Auction, Errors> {
        let description = self.description;
        let bids = self
            .bids
            .into_iter()
            .map(|(bidder, value)| {
                Amount::new(value)
                    .map(|amount| Bid::new(bidder, amount))
                    .map_err(|e| Errors::InvalidBid(description.clone(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Auction {
            description,
            created_at: self.created_at,
            bids,
            closed: false,
        })
    }
}
