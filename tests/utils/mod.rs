#![allow(dead_code)]
use auction_settlement::domain::{
    Auction, AuctionBuilder, AuctionRepository, Clock, NotificationError, Notifier, Payment,
    PaymentRepository, RepositoryError, User,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use mockall::mock;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

mock! {
    pub AuctionRepo {}

    impl AuctionRepository for AuctionRepo {
        fn open_auctions(&self) -> Result<Vec<Auction>, RepositoryError>;
        fn closed_auctions(&self) -> Result<Vec<Auction>, RepositoryError>;
        fn update(&self, auction: &Auction) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub PaymentRepo {}

    impl PaymentRepository for PaymentRepo {
        fn save(&self, payment: &Payment) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Mailer {}

    impl Notifier for Mailer {
        fn notify(&self, auction: &Auction) -> Result<(), NotificationError>;
    }
}

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Sample data for tests
pub fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 4, 11, 10, 0, 0).unwrap()
}

pub fn long_ago() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1999, 2, 20, 10, 0, 0).unwrap()
}

pub fn days_before_now(days: i64) -> DateTime<Utc> {
    sample_now() - Duration::days(days)
}

pub fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 7).unwrap()
}

pub fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 8).unwrap()
}

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 9).unwrap()
}

pub fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 4, 6).unwrap()
}

pub fn clock_on(day: NaiveDate) -> FixedClock {
    FixedClock(day.and_hms_opt(9, 30, 0).unwrap().and_utc())
}

pub fn user_a() -> User {
    User::new("User A")
}

pub fn user_b() -> User {
    User::new("User B")
}

pub fn user_c() -> User {
    User::new("User C")
}

pub fn auction_created_at(description: &str, created_at: DateTime<Utc>) -> Auction {
    AuctionBuilder::new(description)
        .created_at(created_at)
        .build()
        .unwrap()
}

pub fn old_auction(description: &str) -> Auction {
    auction_created_at(description, long_ago())
}

pub fn closed_auction_with_bids(description: &str, bids: &[(User, f64)]) -> Auction {
    let mut auction = bids
        .iter()
        .fold(AuctionBuilder::new(description).created_at(long_ago()), |builder, (user, value)| {
            builder.bid(user.clone(), *value)
        })
        .build()
        .unwrap();
    auction.close();
    auction
}

pub fn playstation() -> Auction {
    closed_auction_with_bids("Playstation", &[(user_a(), 2000.0), (user_b(), 2500.0)])
}
