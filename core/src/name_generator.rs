//! Deterministic personal details for seeded people.
//!
//! All generation draws from a SeedRng, so the same seed yields the
//! same names, emails, phone numbers and descriptions.

use crate::rng::SeedRng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Anika", "Arjun", "Beatriz", "Carlos", "Chen", "Chloe", "Daniel",
    "Elena", "Emeka", "Fatima", "Felix", "Grace", "Hannah", "Hiro", "Ines", "Isaac", "Jonas",
    "Kavya", "Leila", "Liam", "Lucia", "Malik", "Maya", "Mateo", "Nadia", "Noah", "Olivia",
    "Omar", "Priya", "Rafael", "Rosa", "Sakura", "Samuel", "Sofia", "Tariq", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adeyemi", "Alvarez", "Andersson", "Bauer", "Chandra", "Costa", "Dubois", "Fischer",
    "Garcia", "Haddad", "Ivanova", "Jensen", "Kim", "Kowalski", "Lopez", "Mensah", "Moreau",
    "Nakamura", "Novak", "Okafor", "Patel", "Quinn", "Rossi", "Sato", "Schmidt", "Silva",
    "Tanaka", "Iyer", "Walker", "Zhang",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

const DESCRIPTION_WORDS: &[&str] = &[
    "monthly", "grocery", "coffee", "subscription", "payment", "refund", "dinner", "travel",
    "booking", "office", "supplies", "gift", "transfer", "utility", "bill", "fuel", "market",
    "online", "order", "rent", "taxi", "ticket", "pharmacy", "lunch", "books",
];

/// Deterministic generator for personal details.
pub struct NameGenerator;

impl NameGenerator {
    pub fn first_name(rng: &mut SeedRng) -> &'static str {
        *rng.pick(FIRST_NAMES)
    }

    pub fn last_name(rng: &mut SeedRng) -> &'static str {
        *rng.pick(LAST_NAMES)
    }

    /// `first.last.<n>@domain`, lowercase.
    pub fn email(rng: &mut SeedRng, first_name: &str, last_name: &str) -> String {
        let domain = rng.pick(EMAIL_DOMAINS);
        let n = rng.next_u64_below(1000);
        format!(
            "{}.{}.{n}@{domain}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )
    }

    /// `(NNN) NNN-NNNN` with a non-zero leading digit in each group.
    pub fn phone_number(rng: &mut SeedRng) -> String {
        let area = 200 + rng.next_u64_below(800);
        let exchange = 200 + rng.next_u64_below(800);
        let line = rng.next_u64_below(10_000);
        format!("({area}) {exchange}-{line:04}")
    }

    /// A short five-word sentence, capitalized and full-stopped.
    pub fn description(rng: &mut SeedRng) -> String {
        let words: Vec<&str> = (0..5).map(|_| *rng.pick(DESCRIPTION_WORDS)).collect();
        let sentence = words.join(" ");
        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}
