// src/domain/payment_generator.rs
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::{debug, info};
use super::errors::Errors;
use super::evaluator::Evaluator;
use super::payments::Payment;
use super::ports::{AuctionRepository, Clock, PaymentRepository, SYSTEM_CLOCK};

/// First business day on or after `day`.
pub fn next_business_day(day: NaiveDate) -> NaiveDate {
    match day.weekday() {
        Weekday::Sat => day + Duration::days(2),
        Weekday::Sun => day + Duration::days(1),
        _ => day,
    }
}

/// Creates a payment for the winning bid of every closed auction.
pub struct PaymentGenerator<'a> {
    auctions: &'a dyn AuctionRepository,
    payments: &'a dyn PaymentRepository,
    evaluator: Evaluator,
    clock: &'a dyn Clock,
}

impl<'a> PaymentGenerator<'a> {
    pub fn new(
        auctions: &'a dyn AuctionRepository,
        payments: &'a dyn PaymentRepository,
        evaluator: Evaluator,
    ) -> Self {
        PaymentGenerator {
            auctions,
            payments,
            evaluator,
            clock: &SYSTEM_CLOCK,
        }
    }

    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Saves one payment per closed auction and returns them in order.
    ///
    /// The first evaluation or persistence error aborts the pass.
    pub fn generate(&self) -> Result<Vec<Payment>, Errors> {
        let closed = self.auctions.closed_auctions()?;
        let due_date = next_business_day(self.clock.today());

        let mut generated = Vec::with_capacity(closed.len());
        for auction in &closed {
            let evaluation = self.evaluator.evaluate(auction)?;
            let payment = Payment::new(evaluation.highest(), due_date);
            self.payments.save(&payment)?;
            debug!("Payment of {} due {} for auction '{}'", payment.amount(), due_date, auction.description());
            generated.push(payment);
        }

        info!("Generated {} payment(s) due {}", generated.len(), due_date);
        Ok(generated)
    }
}
