use super::LedgerStore;
use crate::{
    error::LedgerResult,
    records::{NewPerson, NewTransaction, PersonSummary},
    types::PersonId,
};
use rusqlite::{params, Connection};

/// Location counts per person, ranked by count then recency.
/// Locations that are NULL or empty never take part.
const PEOPLE_WITH_LOCATION_SQL: &str = "
    WITH LocationCounts AS (
        SELECT person_id,
               location,
               COUNT(*)              AS hits,
               MAX(transaction_date) AS latest
        FROM TransactionData
        WHERE location IS NOT NULL AND location != ''
        GROUP BY person_id, location
    ),
    RankedLocations AS (
        SELECT person_id,
               location,
               ROW_NUMBER() OVER (
                   PARTITION BY person_id
                   ORDER BY hits DESC, latest DESC, location ASC
               ) AS rn
        FROM LocationCounts
    )
    SELECT pi.person_id,
           pi.first_name,
           pi.last_name,
           pi.email,
           pi.phone_number,
           rl.location AS most_frequent_location
    FROM PeopleInformation pi
    LEFT JOIN RankedLocations rl
           ON rl.person_id = pi.person_id AND rl.rn = 1
    ORDER BY pi.last_name, pi.first_name, pi.person_id";

impl LedgerStore {
    // ── People ────────────────────────────────────────────────────

    pub fn person_count(&self) -> LedgerResult<i64> {
        self.query_value("SELECT COUNT(*) FROM PeopleInformation", [])
    }

    /// Every person exactly once, with the winning location (if any).
    pub fn people_with_location(&self) -> LedgerResult<Vec<PersonSummary>> {
        self.query_records(PEOPLE_WITH_LOCATION_SQL, [])
    }

    pub fn insert_person(&self, person: &NewPerson) -> LedgerResult<PersonId> {
        let conn = self.write_connection()?;
        Ok(insert_person_row(&conn, person)?)
    }
}

/// Insert a person and the transactions built for their new id as one
/// unit on `conn`. Any failure rolls the whole person back.
pub(crate) fn insert_person_with<F>(
    conn: &mut Connection,
    person: &NewPerson,
    transactions_for: F,
) -> LedgerResult<(PersonId, usize)>
where
    F: FnOnce(PersonId) -> Vec<NewTransaction>,
{
    let tx = conn.transaction()?;
    let person_id = insert_person_row(&tx, person)?;
    let transactions = transactions_for(person_id);
    for t in &transactions {
        super::transactions::insert_transaction_row(&tx, t)?;
    }
    tx.commit()?;
    Ok((person_id, transactions.len()))
}

fn insert_person_row(conn: &Connection, p: &NewPerson) -> rusqlite::Result<PersonId> {
    conn.execute(
        "INSERT INTO PeopleInformation (first_name, last_name, email, phone_number)
         VALUES (?1, ?2, ?3, ?4)",
        params![&p.first_name, &p.last_name, &p.email, &p.phone_number],
    )?;
    Ok(conn.last_insert_rowid())
}
