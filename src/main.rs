mod adapters;
mod cli;
mod config;
mod core;
mod logging;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();
    logging::init(args.verbose);

    let Some(command) = &args.command else {
        // No subcommand: show usage and exit cleanly
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(e) = run(&args, command) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

fn run(args: &Cli, command: &Commands) -> crate::core::errors::Result<()> {
    let config = AppConfig::new(args.config.clone(), args.git.clone(), args.verbose)?;
    tracing::debug!(
        store = %config.store_path.display(),
        git = %config.git_path.display(),
        verbose = config.verbose,
        "configuration resolved"
    );

    match command {
        Commands::Init => cli::commands::init::execute(&config),
        Commands::List => cli::commands::list::execute(&config),
        Commands::Info => cli::commands::info::execute(&config),
        Commands::Set { profile } => cli::commands::set::execute(&config, profile),
        Commands::Add => cli::commands::add::execute(&config),
        Commands::Remove { profile } => cli::commands::remove::execute(&config, profile),
    }
}
