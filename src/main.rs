use clap::Parser;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod app;
mod cli;
mod generators;
mod models;
mod store;
mod strength;
mod utils;

use crate::cli::{handlers, menu, Args, PassmintCommand};
use crate::generators::PasswordGenerator;
use crate::store::SessionStore;
use crate::strength::ZxcvbnClassifier;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting passmint - session password generator");

    // The store and classifier are owned here and handed to the
    // presentation layer; there is no global state.
    let mut generator = PasswordGenerator::new();
    let classifier = ZxcvbnClassifier::new();
    let mut store = SessionStore::new();

    match args.command {
        Some(PassmintCommand::Generate) => {
            handlers::handle_generate(&mut generator, &classifier, args.json)?;
        }
        Some(PassmintCommand::Analyze { password }) => {
            handlers::handle_analyze(&password, &classifier, args.json)?;
        }
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                })
                .expect("Failed to set Ctrl+C handler");
            }

            menu::run_menu(&mut generator, &classifier, &mut store, should_exit)?;
        }
    }

    log::debug!("exiting with {} saved entries this session", store.len());
    Ok(())
}
