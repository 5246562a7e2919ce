//! decor-settings - inspect and watch Engineer's Decor settings.

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use decor_settings::recipe::OverrideRegistry;
use decor_settings::store::SettingsStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    decor_settings::logger::set_verbose(cli.verbose);

    let registry = Arc::new(OverrideRegistry::new());
    let store = SettingsStore::new(&cli.config, registry.clone());

    match &cli.command {
        Commands::Init { force } => cli::init::write_settings(&cli.config, *force),
        Commands::Show => cli::show::show_settings(&store),
        Commands::Check {
            name,
            kind,
            experimental,
        } => cli::check::check_block(&store, name, *kind, *experimental),
        Commands::Watch => cli::watch::watch_settings(&store, &registry),
    }
}
