// src/cli/view.rs
//
// String-producing render functions for the interactive surface. Keeping
// these off the prompt loop means the displayed text can be unit tested.

use console::style;

use crate::models::StrengthReport;
use crate::store::SessionStore;
use crate::strength::{fill_percent, STRENGTH_COLORS};
use crate::utils::{format_guesses, truncate_string};

pub const EMPTY_STATE_MESSAGE: &str =
    "No passwords saved yet. Generate and save your first password!";

const BAR_CELLS: usize = 10;

/// Renders the strength panel: colored tier label, fill bar, guess count
/// and offline crack-time line.
pub fn render_strength(report: &StrengthReport) -> String {
    let color = STRENGTH_COLORS[report.score as usize];
    let filled = fill_percent(report.score) as usize * BAR_CELLS / 100;

    let bar = format!(
        "{}{}",
        style("█".repeat(filled)).color256(color),
        "░".repeat(BAR_CELLS - filled)
    );

    format!(
        "Password Strength: {}\n[{}] {}%\nGuesses: {}\nCrack time (offline): {}",
        style(report.label).color256(color).bold(),
        bar,
        fill_percent(report.score),
        format_guesses(report.guesses),
        report.crack_time_display,
    )
}

/// Renders the saved-entries list with its count header, or the
/// empty-state message when nothing has been saved yet.
pub fn render_entry_list(store: &SessionStore) -> String {
    let mut out = format!("Saved Passwords ({})", store.len());

    if store.is_empty() {
        out.push('\n');
        out.push_str(EMPTY_STATE_MESSAGE);
        return out;
    }

    for (i, entry) in store.entries().iter().enumerate() {
        out.push_str(&format!(
            "\n  {}. {}  {}",
            i + 1,
            truncate_string(&entry.name, 32),
            entry.password
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::STRENGTH_LABELS;

    fn report(score: u8) -> StrengthReport {
        StrengthReport {
            score,
            label: STRENGTH_LABELS[score as usize],
            guesses: 1234567,
            crack_time_display: "3 hours".to_string(),
        }
    }

    #[test]
    fn strength_panel_shows_label_guesses_and_crack_time() {
        let text = render_strength(&report(3));
        assert!(text.contains("Password Strength:"));
        assert!(text.contains("Strong"));
        assert!(text.contains("80%"));
        assert!(text.contains("Guesses: 1,234,567"));
        assert!(text.contains("Crack time (offline): 3 hours"));
    }

    #[test]
    fn strength_panel_renders_for_every_score() {
        for score in 0..=4u8 {
            let text = render_strength(&report(score));
            assert!(text.contains(STRENGTH_LABELS[score as usize]));
            assert!(text.contains(&format!("{}%", (score + 1) * 20)));
        }
    }

    #[test]
    fn entry_list_header_counts_saved_entries() {
        let mut store = SessionStore::new();
        store.add_entry("Gmail", "abc123");
        store.add_entry("GitHub", "x9!kQ2mv");
        store.add_entry("Router", "admin");

        let text = render_entry_list(&store);
        assert!(text.starts_with("Saved Passwords (3)"));
        assert!(text.contains("1. Gmail  abc123"));
        assert!(text.contains("3. Router  admin"));
        assert!(!text.contains(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn empty_store_renders_the_empty_state_message() {
        let store = SessionStore::new();
        let text = render_entry_list(&store);
        assert!(text.starts_with("Saved Passwords (0)"));
        assert!(text.contains(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn entries_render_in_insertion_order() {
        let mut store = SessionStore::new();
        store.add_entry("first", "a");
        store.add_entry("second", "b");

        let text = render_entry_list(&store);
        let first = text.find("first").unwrap();
        let second = text.find("second").unwrap();
        assert!(first < second);
    }
}
