//! People, their transactions, and the analytic queries over them.
//!
//! Layering, leaves first:
//!   - `store`:   SQLite access, one scoped connection per operation
//!   - `records`: field-named record types mapped from rows
//!   - `queries`: the five read-only analytic operations
//!   - `seeding`: deterministic synthetic data for empty stores

pub mod config;
pub mod error;
pub mod name_generator;
pub mod queries;
pub mod records;
pub mod rng;
pub mod seeding;
pub mod store;
pub mod types;
