// src/models.rs
use serde::{Deserialize, Serialize};

// A saved {name, password} pair. Identified by its position in the
// session store; entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    pub name: String,
    pub password: String,
}

// Result of running the strength heuristic over a non-empty password.
// Derived, never stored; recomputed whenever the candidate changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    /// Heuristic score, always in 0..=4.
    pub score: u8,
    /// Tier label looked up from the fixed 5-entry table.
    pub label: &'static str,
    /// Estimated number of guesses needed to crack the password.
    pub guesses: u64,
    /// Human-readable crack time under an offline slow-hashing attack
    /// model (1e4 guesses per second).
    pub crack_time_display: String,
}
