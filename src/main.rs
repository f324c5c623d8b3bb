use clap::Parser;
use multimemo::cli::{Cli, Commands};
use multimemo::types::config::Config;
use multimemo::MemoResult;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> MemoResult<()> {
    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default_config()
    };

    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("multimemo={}", log_level)
            .parse()
            .unwrap_or_else(|_| "multimemo=warn".parse().expect("fallback directive is valid")),
    );

    let json = config.general.log_format == "json";
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Demo { calls, slot } => {
            multimemo::cli::commands::demo(calls, slot, &config)?;
        }
        Commands::Check {
            names,
            strict,
            json,
        } => {
            multimemo::cli::commands::check(&names, strict, json, &config)?;
        }
        Commands::Init { path } => {
            multimemo::cli::commands::init(path)?;
        }
        Commands::Version => {
            multimemo::cli::commands::version();
        }
    }

    Ok(())
}
