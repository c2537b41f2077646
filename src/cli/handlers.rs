// src/cli/handlers.rs
use crate::cli::view;
use crate::cli::CliError;
use crate::generators::{PasswordGenerator, RandomSource};
use crate::strength::StrengthClassifier;

// Handlers for one-shot CLI commands

pub fn handle_generate<R: RandomSource>(
    generator: &mut PasswordGenerator<R>,
    classifier: &impl StrengthClassifier,
    json: bool,
) -> Result<(), CliError> {
    let password = generator.generate();
    let report = classifier.classify(&password);

    if json {
        let payload = serde_json::json!({
            "password": password,
            "strength": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("🔐 Generated password: {}", password);
    if let Some(report) = &report {
        println!("{}", view::render_strength(report));
    }
    Ok(())
}

pub fn handle_analyze(
    password: &str,
    classifier: &impl StrengthClassifier,
    json: bool,
) -> Result<(), CliError> {
    let report = classifier.classify(password);

    if json {
        let payload = serde_json::json!({
            "password": password,
            "strength": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    // Empty input has no result; render nothing.
    if let Some(report) = &report {
        println!("{}", view::render_strength(report));
    }
    Ok(())
}
