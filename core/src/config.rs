//! Explicit configuration for the store and the seeding utility.
//!
//! RULE: Nothing reads a process-wide default store path.
//! Every component receives the config value it needs at construction.

use crate::error::{LedgerError, LedgerResult};
use anyhow::Context;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Path literal that selects a private in-memory store.
pub const MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub database: DatabaseConfig,
    pub seeding: SeedingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "user_transactions.db".to_string(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.path == MEMORY_PATH
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    pub seed: u64,
    pub num_people: usize,
    pub min_transactions_per_person: u32,
    pub max_transactions_per_person: u32,
    pub locations: Vec<String>,
    pub min_amount: f64,
    pub max_amount: f64,
    pub history_days: u32,
    /// End of the generated history window. `None` means now.
    pub anchor: Option<NaiveDateTime>,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            num_people: 12,
            min_transactions_per_person: 5,
            max_transactions_per_person: 25,
            locations: [
                "New York", "London", "Tokyo", "Paris", "Berlin",
                "Sydney", "Mumbai", "Online", "Arcot", "Chennai",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_amount: 5.0,
            max_amount: 1000.0,
            history_days: 730,
            anchor: None,
        }
    }
}

impl LedgerConfig {
    /// Load a JSON config file. Missing sections fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: LedgerConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LedgerResult<()> {
        self.seeding.validate()
    }
}

impl SeedingConfig {
    pub fn validate(&self) -> LedgerResult<()> {
        if self.min_transactions_per_person > self.max_transactions_per_person {
            return Err(LedgerError::Config(format!(
                "min_transactions_per_person ({}) exceeds max_transactions_per_person ({})",
                self.min_transactions_per_person, self.max_transactions_per_person
            )));
        }
        if self.min_amount > self.max_amount {
            return Err(LedgerError::Config(format!(
                "min_amount ({}) exceeds max_amount ({})",
                self.min_amount, self.max_amount
            )));
        }
        if self.locations.is_empty() {
            return Err(LedgerError::Config("locations must not be empty".into()));
        }
        if self.history_days == 0 {
            return Err(LedgerError::Config("history_days must be at least 1".into()));
        }
        Ok(())
    }
}
