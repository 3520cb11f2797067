//! Record shapes returned by the query operations.
//!
//! RULE: Rows are mapped by column name, never by position.
//! Each operation has its own statically known record type; field order
//! matches the column order of the statement that produces it.

use crate::types::{PersonId, TransactionId};
use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Mapping from a result row to a record.
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// One transaction owned by the person a query was filtered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: TransactionId,
    pub transaction_date: NaiveDateTime,
    pub amount: f64,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl FromRow for TransactionRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            transaction_id: row.get("transaction_id")?,
            transaction_date: row.get("transaction_date")?,
            amount: row.get("amount")?,
            location: row.get("location")?,
            description: row.get("description")?,
        })
    }
}

/// A person together with the location they transact at most often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub person_id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub most_frequent_location: Option<String>,
}

impl FromRow for PersonSummary {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            person_id: row.get("person_id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
            phone_number: row.get("phone_number")?,
            most_frequent_location: normalize_location(row.get("most_frequent_location")?),
        })
    }
}

/// A transaction at a location, carrying the owner's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTransaction {
    pub transaction_id: TransactionId,
    pub first_name: String,
    pub last_name: String,
    pub transaction_date: NaiveDateTime,
    pub amount: f64,
    pub location: String,
    pub description: Option<String>,
}

impl FromRow for LocationTransaction {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            transaction_id: row.get("transaction_id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            transaction_date: row.get("transaction_date")?,
            amount: row.get("amount")?,
            location: row.get("location")?,
            description: row.get("description")?,
        })
    }
}

/// NULL and the empty string both mean "no location".
pub fn normalize_location(location: Option<String>) -> Option<String> {
    location.filter(|l| !l.is_empty())
}

/// Insert payload for a person. `person_id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Insert payload for a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub person_id: PersonId,
    pub transaction_date: NaiveDateTime,
    pub amount: f64,
    pub location: Option<String>,
    pub description: Option<String>,
}
