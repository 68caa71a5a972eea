//! Config command implementation - print or write the example configuration

use std::path::PathBuf;

use crate::config::Config;
use crate::error::CliResult;

pub fn execute(example: bool, write: Option<PathBuf>, config: &Config) -> CliResult<()> {
    if let Some(path) = write {
        let config = if example { Config::example() } else { config.clone() };
        config.save_to_file(&path)?;
        log::info!("Configuration written to: {}", path.display());
        return Ok(());
    }

    let content = if example {
        Config::example_toml()?
    } else {
        toml::to_string_pretty(config)?
    };
    print!("{}", content);

    Ok(())
}
