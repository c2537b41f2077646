// src/store/mod.rs
use crate::models::PasswordEntry;

// Ordered, append-only collection of saved entries. Lives for the session
// only; there is no persistence. Owned by main and passed to the
// presentation layer at construction time, never held in a global.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: Vec<PasswordEntry>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. No validation: duplicate and empty names are
    /// accepted, and existing entries are never reordered or deduplicated.
    pub fn add_entry(&mut self, name: &str, password: &str) {
        log::debug!("saving entry {:?}", name);
        self.entries.push(PasswordEntry {
            name: name.to_string(),
            password: password.to_string(),
        });
    }

    /// Read-only view of all entries in insertion order.
    pub fn entries(&self) -> &[PasswordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
