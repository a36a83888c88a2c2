//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use studytrack::config::Config;
use studytrack::{error, info};

/// Dispatch config subcommands, exiting with status 1 on failure
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        error!("config: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Print one value, or the whole configuration when no key is given
fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            println!("# {}", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
    Ok(())
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config updated: {key} = {value}");
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config key {key} restored to default");
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Delete the config file after interactive confirmation
fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin()
        .read_line(&mut response)
        .map_err(|e| format!("Failed to read confirmation: {e}"))?;

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
