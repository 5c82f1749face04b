use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let cfg = repoboard::config::load_config()?;
    repoboard::logging::init_logging(&cfg.logging.level);

    cli::run(args, &cfg)
}
