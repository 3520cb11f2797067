//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::NaiveDateTime;
use finquery_core::{
    queries::LedgerQueries,
    records::{NewPerson, NewTransaction},
    store::LedgerStore,
    types::{PersonId, TransactionId},
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A migrated, empty in-memory store.
pub fn empty_store() -> LedgerStore {
    init_logging();
    let store = LedgerStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

pub fn at(ts: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn add_person(store: &LedgerStore, first: &str, last: &str) -> PersonId {
    store
        .insert_person(&NewPerson {
            first_name: first.into(),
            last_name: last.into(),
            email: Some(format!("{}.{}@example.com", first, last).to_lowercase()),
            phone_number: None,
        })
        .expect("insert person")
}

pub fn add_txn(
    store: &LedgerStore,
    person_id: PersonId,
    ts: &str,
    amount: f64,
    location: Option<&str>,
) -> TransactionId {
    store
        .insert_transaction(&NewTransaction {
            person_id,
            transaction_date: at(ts),
            amount,
            location: location.map(str::to_string),
            description: Some(format!("txn at {ts}")),
        })
        .expect("insert transaction")
}

/// Ada Lovelace: two March transactions in London, one April in Paris.
/// Alan Turing: no transactions.
pub fn ada_ledger() -> LedgerQueries {
    let store = empty_store();
    let ada = add_person(&store, "Ada", "Lovelace");
    add_person(&store, "Alan", "Turing");
    add_txn(&store, ada, "2024-03-19 14:30:00", 30.0, Some("London"));
    add_txn(&store, ada, "2024-03-05 09:15:00", 50.0, Some("London"));
    add_txn(&store, ada, "2024-04-01 18:00:00", 20.0, Some("Paris"));
    LedgerQueries::new(store)
}
