//! Transactions at a location, most recent first.

mod common;

use common::{add_person, add_txn, ada_ledger, at, empty_store};
use finquery_core::queries::LedgerQueries;

#[test]
fn newest_first_with_owner_names() {
    let store = empty_store();
    let a = add_person(&store, "Grace", "Hopper");
    let b = add_person(&store, "Katherine", "Johnson");
    add_txn(&store, a, "2024-01-01 10:00:00", 10.0, Some("Tokyo"));
    add_txn(&store, b, "2024-03-01 10:00:00", 30.0, Some("Tokyo"));
    add_txn(&store, a, "2024-02-01 10:00:00", 20.0, Some("Tokyo"));
    add_txn(&store, b, "2024-02-15 10:00:00", 99.0, Some("Mumbai"));
    let ledger = LedgerQueries::new(store);

    let tokyo = ledger.transactions_by_location("Tokyo").unwrap();
    let seen: Vec<_> = tokyo
        .iter()
        .map(|t| (t.transaction_date, t.last_name.as_str()))
        .collect();
    assert_eq!(
        seen,
        vec![
            (at("2024-03-01 10:00:00"), "Johnson"),
            (at("2024-02-01 10:00:00"), "Hopper"),
            (at("2024-01-01 10:00:00"), "Hopper"),
        ]
    );
    assert!(tokyo.iter().all(|t| t.location == "Tokyo"));
}

#[test]
fn location_match_is_exact() {
    let ledger = ada_ledger();
    assert_eq!(ledger.transactions_by_location("London").unwrap().len(), 2);
    assert!(ledger.transactions_by_location("london").unwrap().is_empty());
    assert!(ledger.transactions_by_location("Lond").unwrap().is_empty());
}

#[test]
fn unknown_location_is_empty() {
    let ledger = ada_ledger();
    assert!(ledger.transactions_by_location("Atlantis").unwrap().is_empty());
}

#[test]
fn scenario_paris_row_carries_all_fields() {
    let ledger = ada_ledger();
    let paris = ledger.transactions_by_location("Paris").unwrap();
    assert_eq!(paris.len(), 1);
    let t = &paris[0];
    assert_eq!(t.first_name, "Ada");
    assert_eq!(t.last_name, "Lovelace");
    assert_eq!(t.amount, 20.0);
    assert_eq!(t.transaction_date, at("2024-04-01 18:00:00"));
    assert_eq!(t.description.as_deref(), Some("txn at 2024-04-01 18:00:00"));
}
