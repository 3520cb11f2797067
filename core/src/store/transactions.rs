use super::LedgerStore;
use crate::{
    error::LedgerResult,
    records::{LocationTransaction, NewTransaction, TransactionRecord},
    types::TransactionId,
};
use rusqlite::{params, Connection};

impl LedgerStore {
    // ── Transactions ──────────────────────────────────────────────

    pub fn transaction_count(&self) -> LedgerResult<i64> {
        self.query_value("SELECT COUNT(*) FROM TransactionData", [])
    }

    /// `month` is the two-digit month key, e.g. "03".
    pub fn transactions_in_month(
        &self,
        first_name: &str,
        last_name: &str,
        month: &str,
    ) -> LedgerResult<Vec<TransactionRecord>> {
        self.query_records(
            "SELECT td.transaction_id, td.transaction_date, td.amount, td.location, td.description
             FROM TransactionData td
             JOIN PeopleInformation pi ON td.person_id = pi.person_id
             WHERE pi.first_name = ?1 AND pi.last_name = ?2
               AND strftime('%m', td.transaction_date) = ?3
             ORDER BY td.transaction_date ASC, td.transaction_id ASC",
            params![first_name, last_name, month],
        )
    }

    /// `day` is a canonical `YYYY-MM-DD` date.
    pub fn transactions_on_day(
        &self,
        first_name: &str,
        last_name: &str,
        day: &str,
    ) -> LedgerResult<Vec<TransactionRecord>> {
        self.query_records(
            "SELECT td.transaction_id, td.transaction_date, td.amount, td.location, td.description
             FROM TransactionData td
             JOIN PeopleInformation pi ON td.person_id = pi.person_id
             WHERE pi.first_name = ?1 AND pi.last_name = ?2
               AND date(td.transaction_date) = ?3
             ORDER BY td.transaction_date ASC, td.transaction_id ASC",
            params![first_name, last_name, day],
        )
    }

    /// Raw `SUM(amount)`. `None` when no transaction matched.
    pub fn amount_sum(&self, first_name: &str, last_name: &str) -> LedgerResult<Option<f64>> {
        self.query_value(
            "SELECT SUM(td.amount)
             FROM TransactionData td
             JOIN PeopleInformation pi ON td.person_id = pi.person_id
             WHERE pi.first_name = ?1 AND pi.last_name = ?2",
            params![first_name, last_name],
        )
    }

    /// Most recent first.
    pub fn transactions_at_location(&self, location: &str) -> LedgerResult<Vec<LocationTransaction>> {
        self.query_records(
            "SELECT td.transaction_id,
                    pi.first_name,
                    pi.last_name,
                    td.transaction_date,
                    td.amount,
                    td.location,
                    td.description
             FROM TransactionData td
             JOIN PeopleInformation pi ON td.person_id = pi.person_id
             WHERE td.location = ?1
             ORDER BY td.transaction_date DESC, td.transaction_id DESC",
            params![location],
        )
    }

    pub fn insert_transaction(&self, t: &NewTransaction) -> LedgerResult<TransactionId> {
        let conn = self.write_connection()?;
        Ok(insert_transaction_row(&conn, t)?)
    }
}

pub(super) fn insert_transaction_row(
    conn: &Connection,
    t: &NewTransaction,
) -> rusqlite::Result<TransactionId> {
    conn.execute(
        "INSERT INTO TransactionData (person_id, transaction_date, amount, location, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![t.person_id, t.transaction_date, t.amount, &t.location, &t.description],
    )?;
    Ok(conn.last_insert_rowid())
}
