use crate::cli::OutputFormat;
use repoboard::config::types::RepoboardConfig;

pub fn run(format: OutputFormat, cfg: &RepoboardConfig) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), cfg)?;
            println!();
        }
        OutputFormat::Human => {
            // Human-readable: just use TOML format
            let toml_str = toml::to_string_pretty(cfg)?;
            println!("{}", toml_str);
        }
    }

    Ok(())
}
