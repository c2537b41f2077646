// src/app/mod.rs
//
// Transient UI state and its transitions. Each user action becomes a
// Command; apply() maps old state + command to new state, touching only
// the collaborators handed in. Keeping this free of prompt/terminal code
// lets the transitions be tested without a terminal.

use crate::generators::{PasswordGenerator, RandomSource};
use crate::store::SessionStore;

/// Placeholder candidate shown before the first generation.
pub const INITIAL_CANDIDATE: &str = "p@$$w0rd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The currently displayed, not-yet-saved password.
    pub candidate: String,
    /// The name the next save will be recorded under.
    pub name_input: String,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            candidate: INITIAL_CANDIDATE.to_string(),
            name_input: String::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the candidate with a freshly generated password.
    Generate,
    /// Replace the candidate with a manually edited value.
    EditPassword(String),
    /// Replace the pending entry name.
    EditName(String),
    /// Append {name_input, candidate} to the store.
    Save,
}

/// Applies one command, returning the new UI state. Runs synchronously to
/// completion; the store and generator are the only side effects.
pub fn apply<R: RandomSource>(
    state: AppState,
    command: Command,
    generator: &mut PasswordGenerator<R>,
    store: &mut SessionStore,
) -> AppState {
    match command {
        Command::Generate => {
            let candidate = generator.generate();
            log::debug!("generated new candidate password");
            AppState { candidate, ..state }
        }
        Command::EditPassword(candidate) => AppState { candidate, ..state },
        Command::EditName(name_input) => AppState { name_input, ..state },
        Command::Save => {
            store.add_entry(&state.name_input, &state.candidate);
            log::info!("saved entry {} of this session", store.len());
            AppState {
                name_input: String::new(),
                ..state
            }
        }
    }
}
