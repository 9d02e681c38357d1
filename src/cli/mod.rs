pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Switch between git identity profiles per repository.
#[derive(Parser, Debug)]
#[command(name = "gist", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the profile store file
    #[arg(long, global = true, env = "GIST_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Git executable to run
    #[arg(long, global = true, env = "GIST_GIT_PATH")]
    pub git: Option<PathBuf>,

    /// Verbose output
    #[arg(
        short,
        long,
        global = true,
        env = "GIST_VERBOSE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the profile store with an example profile if missing
    Init,

    /// Show all configured profiles
    List,

    /// Show the profile matching the current git identity
    Info,

    /// Activate a profile for the current repository
    Set {
        /// Name of the profile to activate
        profile: String,
    },

    /// Interactively add a new profile
    Add,

    /// Delete a profile from the store
    Remove {
        /// Name of the profile to remove
        profile: String,
    },
}
