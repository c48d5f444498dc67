// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::users::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    bidder: User,
    amount: Amount,
}

impl Bid {
    pub fn new(bidder: User, amount: Amount) -> Self {
        Bid { bidder, amount }
    }

    pub fn bidder(&self) -> &User {
        &self.bidder
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}
