//! Synthetic data population.
//!
//! RULE: Seeding runs to completion (or is skipped) before any query.
//! A store that already holds people is never touched.

use crate::{
    config::SeedingConfig,
    error::{LedgerError, LedgerResult},
    name_generator::NameGenerator,
    queries::round_cents,
    records::{NewPerson, NewTransaction},
    rng::{RngBank, SeedRng, StreamSlot},
    store::{insert_person_with, LedgerStore},
    types::PersonId,
};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::Serialize;

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub people_inserted: usize,
    pub transactions_inserted: usize,
    pub duplicates_skipped: usize,
    /// True when the store already held data and nothing was written.
    pub skipped: bool,
}

pub struct Seeder<'a> {
    store: &'a LedgerStore,
    config: SeedingConfig,
    anchor: NaiveDateTime,
}

impl<'a> Seeder<'a> {
    pub fn new(store: &'a LedgerStore, config: SeedingConfig) -> Self {
        let anchor = config.anchor.unwrap_or_else(|| Local::now().naive_local());
        let anchor = anchor.with_nanosecond(0).unwrap_or(anchor);
        Self { store, config, anchor }
    }

    pub fn populate(&self) -> LedgerResult<SeedReport> {
        self.config.validate()?;

        if self.store.person_count()? > 0 {
            log::info!("Store already contains people. Skipping population.");
            return Ok(SeedReport {
                skipped: true,
                ..SeedReport::default()
            });
        }

        log::info!(
            "Populating store with {} people (seed {})",
            self.config.num_people,
            self.config.seed
        );

        let bank = RngBank::new(self.config.seed);
        let mut people_rng = bank.for_slot(StreamSlot::People);
        let mut txn_rng = bank.for_slot(StreamSlot::Transactions);
        let mut conn = self.store.write_connection()?;

        let max_attempts = self.config.num_people.saturating_mul(10);
        let mut attempts = 0;
        let mut report = SeedReport::default();

        while report.people_inserted < self.config.num_people {
            if attempts >= max_attempts {
                return Err(LedgerError::Config(format!(
                    "gave up after {attempts} attempts with {} of {} people inserted",
                    report.people_inserted, self.config.num_people
                )));
            }
            attempts += 1;

            let person = self.generate_person(&mut people_rng);
            let inserted = insert_person_with(&mut conn, &person, |person_id| {
                self.generate_transactions(person_id, &mut txn_rng)
            });
            match inserted {
                Ok((_, count)) => {
                    report.people_inserted += 1;
                    report.transactions_inserted += count;
                }
                Err(e) if e.is_constraint_violation() => {
                    log::warn!("Skipping duplicate person {:?}: {e}", person.email);
                    report.duplicates_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        log::info!(
            "Population complete: {} people, {} transactions",
            report.people_inserted,
            report.transactions_inserted
        );
        Ok(report)
    }

    fn generate_person(&self, rng: &mut SeedRng) -> NewPerson {
        let first_name = NameGenerator::first_name(rng);
        let last_name = NameGenerator::last_name(rng);
        NewPerson {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: Some(NameGenerator::email(rng, first_name, last_name)),
            phone_number: Some(NameGenerator::phone_number(rng)),
        }
    }

    fn generate_transactions(&self, person_id: PersonId, rng: &mut SeedRng) -> Vec<NewTransaction> {
        let count = rng.range_inclusive(
            self.config.min_transactions_per_person,
            self.config.max_transactions_per_person,
        );
        let window = u64::from(self.config.history_days) * SECONDS_PER_DAY;

        (0..count)
            .map(|_| {
                let back = rng.next_u64_below(window + 1) as i64;
                NewTransaction {
                    person_id,
                    transaction_date: self.anchor - Duration::seconds(back),
                    amount: round_cents(rng.uniform(self.config.min_amount, self.config.max_amount)),
                    location: Some(rng.pick(&self.config.locations).clone()),
                    description: Some(NameGenerator::description(rng)),
                }
            })
            .collect()
    }
}
