use clap::Parser;
use quartet::cli::{Cli, Commands};
use quartet::types::config::Config;
use quartet::QuartetResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> QuartetResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = Config::load_or_default(&cli.config);

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("quartet={}", log_level)
            .parse()
            .unwrap_or_else(|_| "quartet=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            quartet::cli::commands::init(path)?;
        }
        Commands::Fib { indices, stats } => {
            quartet::cli::commands::fib(&indices, stats)?;
        }
        Commands::Sum { text } => {
            quartet::cli::commands::sum(text.as_deref())?;
        }
        Commands::Logscan { path, level, json } => {
            quartet::cli::commands::logscan_cmd(&path, level.as_deref(), json, &config)?;
        }
        Commands::Bot => {
            quartet::cli::commands::bot(&config)?;
        }
        Commands::Config => {
            if cli.config.exists() {
                let loaded = Config::load(&cli.config)?;
                quartet::cli::interactive::show_config_summary(&loaded);
            }
            quartet::cli::interactive::run_interactive_config(&cli.config)?;
        }
        Commands::Version => {
            quartet::cli::commands::version();
        }
    }

    Ok(())
}
