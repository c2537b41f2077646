// src/cli/menu.rs
use inquire::{InquireError, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::app::{apply, AppState, Command};
use crate::cli::view;
use crate::cli::CliError;
use crate::generators::{PasswordGenerator, RandomSource};
use crate::store::SessionStore;
use crate::strength::StrengthClassifier;

const GENERATE: &str = "🎲 Generate new password";
const EDIT: &str = "✏️  Edit password manually";
const SAVE: &str = "💾 Save current password";
const VIEW: &str = "📋 View saved passwords";
const EXIT: &str = "❌ Exit";

pub fn run_menu<R: RandomSource>(
    generator: &mut PasswordGenerator<R>,
    classifier: &impl StrengthClassifier,
    store: &mut SessionStore,
    should_exit: Arc<AtomicBool>,
) -> Result<(), CliError> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = AppState::new();

    loop {
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        // Show the candidate and its strength before every action; the
        // strength is recomputed on each pass so edits are reflected.
        println!("\nCurrent password: {}", state.candidate);
        if let Some(report) = classifier.classify(&state.candidate) {
            println!("{}", view::render_strength(&report));
        }

        let options = vec![GENERATE, EDIT, SAVE, VIEW, EXIT];
        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable();

        let choice = match selection {
            Ok(Some(choice)) => choice,
            // Esc skips the prompt; loop back to the menu.
            Ok(None) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match choice {
            GENERATE => {
                state = apply(state, Command::Generate, generator, store);
                println!("✅ New password generated");
            }
            EDIT => {
                let edited = Text::new("New password:").prompt()?;
                state = apply(state, Command::EditPassword(edited), generator, store);
            }
            SAVE => {
                let name = Text::new("Name for this password:").prompt()?;
                state = apply(state, Command::EditName(name), generator, store);
                state = apply(state, Command::Save, generator, store);
                println!("✅ Password saved ({} total)", store.len());
            }
            VIEW => {
                println!("\n{}", view::render_entry_list(store));
            }
            EXIT => break,
            _ => unreachable!("unknown menu option"),
        }
    }

    println!("\n👋 Goodbye! Saved entries are discarded when the session ends.");
    Ok(())
}
