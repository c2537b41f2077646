// src/strength/mod.rs
//
// Boundary to the external strength heuristic. The scoring itself is the
// zxcvbn estimator's job; this module owns only the interface and the
// score -> label / color / fill display mapping.

use crate::models::StrengthReport;

/// Tier labels indexed by score.
pub const STRENGTH_LABELS: [&str; 5] = ["Weak", "Fair", "Good", "Strong", "Very Strong"];

/// 256-color terminal palette indexed by score: red, orange, yellow,
/// yellow-green, green.
pub const STRENGTH_COLORS: [u8; 5] = [196, 208, 220, 112, 40];

pub trait StrengthClassifier {
    /// Scores a password. Returns `None` for an empty password; callers
    /// render nothing in that case.
    fn classify(&self, password: &str) -> Option<StrengthReport>;
}

/// Production classifier delegating to the zxcvbn heuristic.
#[derive(Debug, Default)]
pub struct ZxcvbnClassifier;

impl ZxcvbnClassifier {
    pub fn new() -> Self {
        ZxcvbnClassifier
    }
}

impl StrengthClassifier for ZxcvbnClassifier {
    fn classify(&self, password: &str) -> Option<StrengthReport> {
        // zxcvbn rejects blank input; that is exactly the no-result case.
        let entropy = zxcvbn::zxcvbn(password, &[]).ok()?;

        let score = entropy.score().min(4);
        Some(StrengthReport {
            score,
            label: STRENGTH_LABELS[score as usize],
            guesses: entropy.guesses(),
            crack_time_display: entropy
                .crack_times()
                .offline_slow_hashing_1e4_per_second()
                .to_string(),
        })
    }
}

/// How much of the strength bar to fill for a score: (score + 1) * 20%.
pub fn fill_percent(score: u8) -> u8 {
    (score + 1) * 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_yields_no_report() {
        let classifier = ZxcvbnClassifier::new();
        assert_eq!(classifier.classify(""), None);
    }

    #[test]
    fn non_empty_password_scores_within_range() {
        let classifier = ZxcvbnClassifier::new();
        for password in ["a", "abc123", "p@$$w0rd", "correct horse battery staple"] {
            let report = classifier.classify(password).expect("non-empty input");
            assert!(report.score <= 4);
            assert_eq!(report.label, STRENGTH_LABELS[report.score as usize]);
            assert!(report.guesses >= 1);
            assert!(!report.crack_time_display.is_empty());
        }
    }

    #[test]
    fn weak_input_scores_below_strong_input() {
        let classifier = ZxcvbnClassifier::new();
        let weak = classifier.classify("password").unwrap();
        let strong = classifier.classify("kY8#mQ2$vL9!xR4&").unwrap();
        assert!(weak.score < strong.score);
    }

    #[test]
    fn fill_percent_maps_scores_to_20_percent_steps() {
        assert_eq!(fill_percent(0), 20);
        assert_eq!(fill_percent(1), 40);
        assert_eq!(fill_percent(2), 60);
        assert_eq!(fill_percent(3), 80);
        assert_eq!(fill_percent(4), 100);
    }

    #[test]
    fn label_and_color_tables_stay_in_lockstep() {
        assert_eq!(STRENGTH_LABELS.len(), STRENGTH_COLORS.len());
    }
}
