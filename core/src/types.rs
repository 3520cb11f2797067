//! Shared primitive types used across the ledger.

/// Surrogate key of a row in `PeopleInformation`.
pub type PersonId = i64;

/// Surrogate key of a row in `TransactionData`.
pub type TransactionId = i64;
