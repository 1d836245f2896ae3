//! `fleet config` command - Configuration inspection
//!
//! Shows the effective presentation settings and where they come from.

use clap::Subcommand;
use console::style;
use miette::{miette, Result};

use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show(ShowArgs),

    /// Show the path to the global configuration file
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    ("lang", "Message language: en or uk (env FLEET_LANG)"),
    ("color", "Colored headings: true or false (env FLEET_COLOR)"),
];

/// Run a config subcommand
pub fn run(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs) -> Result<()> {
    let config = Config::load();

    if let Some(key) = &args.key {
        let value = get_config_value(&config, key)
            .ok_or_else(|| miette!("Unknown configuration key '{}'", key))?;
        println!("{}", value);
        return Ok(());
    }

    for (key, _) in VALID_KEYS {
        if let Some(value) = get_config_value(&config, key) {
            println!("{}: {}", style(key).cyan(), value);
        }
    }
    Ok(())
}

fn run_path() -> Result<()> {
    let path = Config::global_config_path()
        .ok_or_else(|| miette!("Could not determine the user configuration directory"))?;
    let marker = if path.exists() {
        style("(exists)").green()
    } else {
        style("(not found)").dim()
    };
    println!("{} {}", path.display(), marker);
    Ok(())
}

fn run_keys() -> Result<()> {
    for (key, description) in VALID_KEYS {
        println!("{:<8} {}", style(key).cyan(), description);
    }
    Ok(())
}

/// Effective value of a key, defaults applied
fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "lang" => Some(config.lang(None).to_string()),
        "color" => Some(config.color().to_string()),
        _ => None,
    }
}
