//! Transactions for a person on a given calendar day.

mod common;

use common::{add_person, add_txn, ada_ledger, at, empty_store};
use finquery_core::queries::LedgerQueries;

#[test]
fn day_ignores_time_of_day() {
    let store = empty_store();
    let ada = add_person(&store, "Ada", "Lovelace");
    add_txn(&store, ada, "2024-03-05 23:59:59", 5.0, Some("London"));
    add_txn(&store, ada, "2024-03-05 00:00:00", 7.0, Some("London"));
    add_txn(&store, ada, "2024-03-06 00:00:00", 9.0, Some("London"));
    let ledger = LedgerQueries::new(store);

    let day = ledger.transactions_by_day("Ada", "Lovelace", "2024-03-05").unwrap();
    let dates: Vec<_> = day.iter().map(|t| t.transaction_date).collect();
    assert_eq!(
        dates,
        vec![at("2024-03-05 00:00:00"), at("2024-03-05 23:59:59")]
    );
}

#[test]
fn scenario_day_returns_single_transaction() {
    let ledger = ada_ledger();
    let day = ledger.transactions_by_day("Ada", "Lovelace", "2024-04-01").unwrap();
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].location.as_deref(), Some("Paris"));
    assert_eq!(day[0].amount, 20.0);
}

#[test]
fn malformed_dates_return_empty_not_error() {
    let ledger = ada_ledger();
    for bad in [
        "2024-13-40",
        "2024-02-30",
        "05/03/2024",
        "yesterday",
        "",
        "24-03-05",
        "+2024-03-05",
        " 2024-03-05",
        "2024-3-5",
    ] {
        let result = ledger.transactions_by_day("Ada", "Lovelace", bad);
        assert!(
            matches!(&result, Ok(v) if v.is_empty()),
            "Expected empty result for {bad:?}, got {result:?}"
        );
    }
}

#[test]
fn other_years_do_not_match() {
    let ledger = ada_ledger();
    assert!(ledger
        .transactions_by_day("Ada", "Lovelace", "2023-03-05")
        .unwrap()
        .is_empty());
}

#[test]
fn person_without_transactions_is_empty() {
    let ledger = ada_ledger();
    assert!(ledger
        .transactions_by_day("Alan", "Turing", "2024-03-05")
        .unwrap()
        .is_empty());
}

#[test]
fn short_year_does_not_query_year_twenty_four() {
    let store = empty_store();
    let ada = add_person(&store, "Ada", "Lovelace");
    add_txn(&store, ada, "0024-03-05 12:00:00", 1.0, Some("Rome"));
    let ledger = LedgerQueries::new(store);

    assert!(ledger
        .transactions_by_day("Ada", "Lovelace", "24-03-05")
        .unwrap()
        .is_empty());
    assert_eq!(
        ledger
            .transactions_by_day("Ada", "Lovelace", "0024-03-05")
            .unwrap()
            .len(),
        1
    );
}
