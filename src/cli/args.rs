//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use decor_settings::block::BlockKind;
use std::path::PathBuf;

/// Engineer's Decor settings tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// Settings file path (default: engineersdecor.toml)
    #[arg(short = 'C', long, global = true, default_value = decor_settings::config::SETTINGS_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented settings file with default values
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective settings
    #[command(visible_alias = "s")]
    Show,

    /// Check whether a block is opted out
    #[command(visible_alias = "c")]
    Check {
        /// Registry name, e.g. `engineersdecor:clinker_brick_wall`
        name: String,

        /// Block kind used by the type-based rules
        #[arg(short, long, value_enum, default_value_t = BlockKind::Standard)]
        kind: BlockKind,

        /// Treat the block as experimental
        #[arg(short, long)]
        experimental: bool,
    },

    /// Reload and reapply settings whenever the file changes
    #[command(visible_alias = "w")]
    Watch,
}
