//! Deterministic random number generation for seeded data.
//!
//! RULE: Seeding never calls a platform RNG.
//! All randomness flows through SeedRng streams derived from the single
//! master seed in SeedingConfig.
//!
//! Each purpose gets its own stream, seeded from
//! (master_seed XOR slot * golden-ratio constant), so drawing more names
//! never shifts the transaction stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream.
pub struct SeedRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeedRng {
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Roll a u64 in [0, n). Panics when `n` is zero.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        self.inner.gen_range(0..n)
    }

    /// Roll an integer in [lo, hi], inclusive.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.inner.gen_range(lo..=hi)
    }

    /// Roll a float in [lo, hi). Returns `lo` for an empty range.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}

/// All streams for a single seed, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_slot(&self, slot: StreamSlot) -> SeedRng {
        SeedRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments. Append only: reordering changes
/// every generated store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    People = 0,
    Transactions = 1,
    Demo = 2,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Transactions => "transactions",
            Self::Demo => "demo",
        }
    }
}
