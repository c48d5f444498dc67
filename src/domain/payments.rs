// src/domain/payments.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::money::Amount;

/// Amount owed for a closed auction and the day it falls due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    amount: Amount,
    #[serde(rename = "dueDate")]
    due_date: NaiveDate,
}

impl Payment {
    pub fn new(amount: Amount, due_date: NaiveDate) -> Self {
        Payment { amount, due_date }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}
