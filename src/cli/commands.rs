//! Implementation of the Quartet CLI commands.

use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

use dialoguer::console::style;

use crate::contacts::commands::{handle, Reply};
use crate::contacts::Book;
use crate::fib::Fibonacci;
use crate::logscan;
use crate::numbers::{extract_numbers, sum_profit};
use crate::types::config::Config;
use crate::types::errors::QuartetError;
use crate::QuartetResult;

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> QuartetResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("quartet.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        println!("Use 'quartet config' to modify.");
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Quartet initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Try the evaluator: quartet fib 30 --stats");
    println!("  2. Configure options: quartet config");
    println!("  3. Start the assistant: quartet bot");

    Ok(())
}

/// Evaluates Fibonacci indices against one shared evaluator instance.
pub fn fib(indices: &[i64], show_stats: bool) -> QuartetResult<()> {
    let mut evaluator = Fibonacci::new();

    for &n in indices {
        let value = evaluator.evaluate(n);
        println!("fib({}) = {}", n, value);
    }

    if show_stats {
        let stats = evaluator.stats();
        println!();
        println!("cache entries: {}", stats.size);
        println!("cache hits:    {}", stats.hits);
        println!("cache misses:  {}", stats.misses);
        println!("hit rate:      {:.2}%", stats.hit_rate() * 100.0);
    }

    Ok(())
}

/// Sums every standalone decimal number in `text` (or stdin when absent).
pub fn sum(text: Option<&str>) -> QuartetResult<()> {
    let input = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let total = sum_profit(&input, extract_numbers);
    println!("Total: {}", total);

    Ok(())
}

/// Scans a log file and prints per-level counts, optionally filtered.
pub fn logscan_cmd(
    path: &PathBuf,
    level: Option<&str>,
    json: bool,
    config: &Config,
) -> QuartetResult<()> {
    let levels = &config.logscan.levels;

    let level_filter = level.map(str::to_uppercase);
    if let Some(filter) = &level_filter {
        if !levels.iter().any(|lvl| lvl == filter) {
            println!(
                "Unknown log level: {}. Valid levels: {}",
                filter,
                levels.join(", ")
            );
        }
    }

    let report = match logscan::scan(path, levels, level_filter.as_deref()) {
        Ok(report) => report,
        // Resource-access problems are user-facing messages, not failures.
        Err(err @ (QuartetError::FileNotFound(_) | QuartetError::PathIsDirectory(_))) => {
            println!("{}", err);
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report.counts)?);
        return Ok(());
    }

    if !report.counts.is_empty() {
        println!();
        println!("{:<12} | {}", "LOG LEVEL", "RECORDS COUNT");
        println!("{:-<12}-+-{:-<13}", "", "");
        for lvl in report.present_levels(levels) {
            println!("{:<12} | {}", lvl, report.count(lvl));
        }
        println!();
    }

    if let Some(filter) = &level_filter {
        if report.filtered_lines.is_empty() {
            println!("There is no records with {} log level", filter);
        } else {
            println!("Records with log level {}:", filter);
            println!();
            for line in &report.filtered_lines {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Runs the interactive assistant bot over stdin/stdout.
pub fn bot(config: &Config) -> QuartetResult<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_bot(config, stdin.lock(), &mut stdout)
}

/// Bot loop over arbitrary reader/writer, so tests can drive it.
pub fn run_bot<R: BufRead, W: Write>(config: &Config, input: R, output: &mut W) -> QuartetResult<()> {
    let mut book = Book::new(config.bot.clone());

    writeln!(output, "{}", style("Welcome to the assistant bot!").yellow())?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.bot.prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // EOF behaves like close.
            None => {
                writeln!(output, "{}", style("Good bye!").yellow())?;
                break;
            }
        };

        match handle(&mut book, &line) {
            Reply::Silence => {}
            Reply::Message(texts) => {
                for text in texts {
                    writeln!(output, " {}", style(text).yellow())?;
                }
            }
            Reply::Error(texts) => {
                for text in texts {
                    writeln!(output, " {}", style(text).red())?;
                }
            }
            Reply::Exit(farewell) => {
                writeln!(output, "{}", style(farewell).yellow())?;
                break;
            }
        }
    }

    Ok(())
}

/// Shows version.
pub fn version() {
    println!("quartet {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_bot_add_and_lookup() {
        let config = Config::default_config();
        let input = b"add john 1234567890\nphone john\nclose\n" as &[u8];
        let mut output = Vec::new();

        run_bot(&config, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Welcome to the assistant bot!"));
        assert!(text.contains("Contact added."));
        assert!(text.contains("John's phone is 1234567890"));
        assert!(text.contains("Good bye!"));
    }

    #[test]
    fn test_run_bot_eof_says_goodbye() {
        let config = Config::default_config();
        let input = b"hello\n" as &[u8];
        let mut output = Vec::new();

        run_bot(&config, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("How can I help you?"));
        assert!(text.contains("Good bye!"));
    }
}
