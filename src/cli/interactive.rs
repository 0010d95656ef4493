//! Interactive configuration for Quartet.
//!
//! Implements the `quartet config` menu using dialoguer.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::types::config::Config;
use crate::QuartetResult;

/// Runs the interactive configuration editor.
pub fn run_interactive_config(config_path: &Path) -> QuartetResult<()> {
    let theme = ColorfulTheme::default();

    println!("\nQuartet interactive configuration\n");

    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        println!("Creating new configuration...\n");
        Config::default_config()
    };

    loop {
        let options = vec![
            "General settings",
            "Log scanner",
            "Assistant bot",
            "Save and exit",
            "Exit without saving",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("What do you want to configure?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => configure_general(&theme, &mut config)?,
            1 => configure_logscan(&theme, &mut config)?,
            2 => configure_bot(&theme, &mut config)?,
            3 => {
                config.save(config_path)?;
                println!("\nConfiguration saved to: {}\n", config_path.display());
                break;
            }
            4 => {
                if Confirm::with_theme(&theme)
                    .with_prompt("Really exit without saving?")
                    .default(false)
                    .interact()?
                {
                    println!("\nExiting without saving.\n");
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Configures general options.
fn configure_general(theme: &ColorfulTheme, config: &mut Config) -> QuartetResult<()> {
    println!("\nGeneral settings\n");

    let log_levels = vec!["error", "warn", "info", "debug", "trace"];
    let current_idx = log_levels
        .iter()
        .position(|&l| l == config.general.log_level)
        .unwrap_or(2);

    let log_level_idx = Select::with_theme(theme)
        .with_prompt("Log level")
        .items(&log_levels)
        .default(current_idx)
        .interact()?;

    config.general.log_level = log_levels[log_level_idx].to_string();

    let log_formats = vec!["text", "json"];
    let current_format_idx = log_formats
        .iter()
        .position(|&f| f == config.general.log_format)
        .unwrap_or(0);

    let log_format_idx = Select::with_theme(theme)
        .with_prompt("Log format")
        .items(&log_formats)
        .default(current_format_idx)
        .interact()?;

    config.general.log_format = log_formats[log_format_idx].to_string();

    println!("\nGeneral settings updated.\n");
    Ok(())
}

/// Configures the log scanner.
fn configure_logscan(theme: &ColorfulTheme, config: &mut Config) -> QuartetResult<()> {
    println!("\nLog scanner settings\n");

    let levels_str: String = Input::with_theme(theme)
        .with_prompt("Recognized levels, in order (comma separated)")
        .default(config.logscan.levels.join(","))
        .interact_text()?;

    config.logscan.levels = levels_str
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    println!("\nLog scanner configured.\n");
    Ok(())
}

/// Configures the assistant bot.
fn configure_bot(theme: &ColorfulTheme, config: &mut Config) -> QuartetResult<()> {
    println!("\nAssistant bot settings\n");

    let min_digits: usize = Input::with_theme(theme)
        .with_prompt("Minimum phone digits")
        .default(config.bot.phone_min_digits)
        .interact_text()?;

    config.bot.phone_min_digits = min_digits.max(1);

    let max_digits: usize = Input::with_theme(theme)
        .with_prompt("Maximum phone digits")
        .default(config.bot.phone_max_digits)
        .interact_text()?;

    config.bot.phone_max_digits = max_digits.max(config.bot.phone_min_digits);

    let prompt: String = Input::with_theme(theme)
        .with_prompt("Command prompt")
        .default(config.bot.prompt.clone())
        .interact_text()?;

    config.bot.prompt = prompt;

    println!("\nAssistant bot configured.\n");
    Ok(())
}

/// Shows a configuration summary.
pub fn show_config_summary(config: &Config) {
    println!("\nConfiguration summary\n");
    println!("  Log level:    {}", config.general.log_level);
    println!("  Log format:   {}", config.general.log_format);
    println!("  Log levels:   {}", config.logscan.levels.join(", "));
    println!(
        "  Phone digits: {}-{}",
        config.bot.phone_min_digits, config.bot.phone_max_digits
    );
    println!("  Bot prompt:   {:?}", config.bot.prompt);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_config_summary() {
        let config = Config::default_config();
        // Only checks that rendering does not panic.
        show_config_summary(&config);
    }
}
