// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PassmintCommand {
    /// Generate one password and print it with its strength report
    Generate,

    /// Analyze the strength of a given password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },
}
