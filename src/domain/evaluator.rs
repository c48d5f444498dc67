// src/domain/evaluator.rs
use crate::money::{Amount, AmountValue};
use super::auctions::Auction;
use super::errors::Errors;

const TOP_BIDS: usize = 3;

/// Aggregate statistics over an auction's bids.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    highest: Amount,
    lowest: Amount,
    average: AmountValue,
    top_three: Vec<Amount>,
}

impl Evaluation {
    pub fn highest(&self) -> Amount {
        self.highest
    }

    pub fn lowest(&self) -> Amount {
        self.lowest
    }

    pub fn average(&self) -> AmountValue {
        self.average
    }

    /// Highest amounts first, at most three.
    pub fn top_three(&self) -> &[Amount] {
        &self.top_three
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Fails with [`Errors::NoBids`] when the auction has no bids, since none
    /// of the statistics are defined in that case.
    pub fn evaluate(&self, auction: &Auction) -> Result<Evaluation, Errors> {
        let mut amounts: Vec<Amount> = auction.bids().iter().map(|bid| bid.amount()).collect();
        if amounts.is_empty() {
            return Err(Errors::NoBids(auction.description().to_string()));
        }

        amounts.sort_by(|a, b| b.total_cmp(a));

        let highest = amounts[0];
        let lowest = amounts[amounts.len() - 1];
        // Running mean; a plain sum of large amounts overflows to infinity.
        let average = amounts
            .iter()
            .enumerate()
            .fold(0.0, |mean: AmountValue, (i, amount)| {
                mean + (amount.value() - mean) / (i + 1) as AmountValue
            });
        amounts.truncate(TOP_BIDS);

        Ok(Evaluation {
            highest,
            lowest,
            average,
            top_three: amounts,
        })
    }
}
