//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::Style;

/// Team hierarchy manager: build and print a two-subordinate org chart
#[derive(Parser, Debug)]
#[command(name = "teamtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output style, overrides config
    #[arg(long, value_enum, global = true)]
    pub style: Option<Style>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive team management menu (default)
    Shell,

    /// Build a team from arguments and print it
    Build {
        /// Team lead (root)
        #[arg(short, long)]
        lead: String,

        /// Placement, repeatable and applied in order
        #[arg(short = 'a', long = "add", value_name = "MANAGER:EMPLOYEE:SIDE")]
        placements: Vec<String>,

        /// Abort on the first rejected placement
        #[arg(long)]
        strict: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config file location
    Path,
}
