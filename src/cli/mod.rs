pub mod commands;
pub mod display;
pub mod output;

use std::io::IsTerminal;

use clap::{Parser, Subcommand};

use repoboard::config::types::RepoboardConfig;

#[derive(Parser)]
#[command(name = "repoboard", about = "Sort, filter and chart a repository catalog.", version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the visible repositories of a catalog
    List(commands::list::ListArgs),
    /// Show catalog-wide counts
    Stats(commands::stats::StatsArgs),
    /// Show one repository in detail
    Show(commands::show::ShowArgs),
    /// Show current configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Whether human output should carry ANSI colors.
pub fn use_color(cfg: &RepoboardConfig) -> bool {
    match cfg.display.color.as_str() {
        "always" => true,
        "never" => false,
        _ => std::io::stdout().is_terminal(),
    }
}

/// Dispatch a CLI command.
pub fn run(cli: Cli, cfg: &RepoboardConfig) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::List(args)) => commands::list::run(args, cli.format, cfg),
        Some(Commands::Stats(args)) => commands::stats::run(args, cli.format, cfg),
        Some(Commands::Show(args)) => commands::show::run(args, cli.format, cfg),
        Some(Commands::Config) => commands::config::run(cli.format, cfg),
        None => {
            // No subcommand, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
