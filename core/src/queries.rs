//! The analytic query operations.
//!
//! Each operation normalizes its inputs, delegates one statement to the
//! store and shapes the answer. "Nothing matched" is always an empty
//! vector or a zero total, never an error.

use crate::{
    error::LedgerResult,
    records::{LocationTransaction, PersonSummary, TransactionRecord},
    store::LedgerStore,
};
use chrono::NaiveDate;

/// Accepted input format for calendar days.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub struct LedgerQueries {
    store: LedgerStore,
}

impl LedgerQueries {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Transactions for a person in `month` of any year, oldest first.
    /// Months outside 1..=12 match nothing.
    pub fn transactions_by_month(
        &self,
        first_name: &str,
        last_name: &str,
        month: u32,
    ) -> LedgerResult<Vec<TransactionRecord>> {
        self.store
            .transactions_in_month(first_name, last_name, &month_key(month))
    }

    /// Transactions for a person on one calendar day, oldest first.
    ///
    /// A day that does not parse as `YYYY-MM-DD` is logged and answered
    /// with an empty result.
    pub fn transactions_by_day(
        &self,
        first_name: &str,
        last_name: &str,
        day: &str,
    ) -> LedgerResult<Vec<TransactionRecord>> {
        let Some(day) = parse_day(day) else {
            log::warn!("Invalid date '{day}'. Expected YYYY-MM-DD.");
            return Ok(Vec::new());
        };
        self.store
            .transactions_on_day(first_name, last_name, &day.format(DAY_FORMAT).to_string())
    }

    /// Sum of every amount owned by the person, rounded to cents.
    /// Unknown people and people without transactions total 0.0.
    pub fn total_amount(&self, first_name: &str, last_name: &str) -> LedgerResult<f64> {
        let total = match self.store.amount_sum(first_name, last_name)? {
            Some(sum) => round_cents(sum),
            None => 0.0,
        };
        Ok(total)
    }

    /// Every person, ordered by last then first name, with their most
    /// frequent location.
    pub fn list_people(&self) -> LedgerResult<Vec<PersonSummary>> {
        self.store.people_with_location()
    }

    /// Transactions at exactly `location`, most recent first.
    pub fn transactions_by_location(&self, location: &str) -> LedgerResult<Vec<LocationTransaction>> {
        self.store.transactions_at_location(location)
    }
}

/// Zero-padded month key as produced by `strftime('%m', ..)`.
pub fn month_key(month: u32) -> String {
    format!("{month:02}")
}

/// Parse a day in the fixed `YYYY-MM-DD` shape. Anything chrono would
/// also accept in another spelling (short years, signs, padding,
/// unpadded fields) is rejected.
pub fn parse_day(day: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(day, DAY_FORMAT).ok()?;
    (date.format(DAY_FORMAT).to_string() == day).then_some(date)
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
