use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fittrack::config::AppConfig;
use fittrack::export::{self, OutputFormat};
use fittrack::logging::{self, LogLevel};
use fittrack::{
    default_packages, load_packages_csv, process_packages, BatchResult, Package,
};

/// FitTrack - workout metrics from fitness tracker packages
///
/// Converts raw step/stroke counts, duration and body weight into distance,
/// mean speed and calories for running, sports walking and swimming.
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author = "FitTrack Contributors")]
#[command(version)]
#[command(about = "Workout metrics calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of logs
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (text, json, csv, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Write results to a file instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Disable colored status messages
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in sample packages
    Demo,

    /// Process a single package given on the command line
    Calc {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Positional sensor values, e.g. `15000 1 75` for RUN
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Process packages from a CSV file (`CODE,v1,v2,...` per row)
    Batch {
        /// Input CSV file
        file: PathBuf,

        /// Process packages in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // `config --init` may target a file that does not exist yet, or replace a broken one
    let replacing = match cli.command {
        Commands::Config { init: true, force, .. } => {
            force || !config_target(cli.config.as_deref()).exists()
        }
        _ => false,
    };
    let mut config = if replacing {
        AppConfig::default()
    } else {
        AppConfig::resolve(cli.config.as_deref())?
    };

    if let Some(level) = LogLevel::from_verbosity(cli.verbose) {
        config.logging.level = level;
    }
    logging::init_logging(&config.logging)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = match &cli.format {
        Some(f) => f.parse::<OutputFormat>()?,
        None => config.output.format,
    };

    match cli.command {
        Commands::Demo => {
            let batch = process_packages(&default_packages(), config.output.parallel);
            emit(&batch, format, cli.output.as_deref())
        }

        Commands::Calc { code, values } => {
            let package = Package::from_text(code, values.as_slice());
            let batch = process_packages(&[package], false);
            emit(&batch, format, cli.output.as_deref())
        }

        Commands::Batch { file, parallel } => {
            let packages = load_packages_csv(&file)
                .with_context(|| format!("Failed to load packages from {}", file.display()))?;
            let batch = process_packages(&packages, parallel || config.output.parallel);
            emit(&batch, format, cli.output.as_deref())
        }

        Commands::Config { show, init, force } => {
            if init {
                let path = config_target(cli.config.as_deref());
                if path.exists() && !force {
                    bail!(
                        "Config file already exists: {} (use --force to overwrite)",
                        path.display()
                    );
                }
                AppConfig::default().save_to_file(&path)?;
                eprintln!(
                    "{}",
                    format!("✓ Wrote default config to {}", path.display()).green()
                );
            }
            if show || !init {
                print!("{}", toml::to_string_pretty(&config)?);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn config_target(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::default_config_path)
}

fn emit(batch: &BatchResult, format: OutputFormat, output: Option<&Path>) -> Result<ExitCode> {
    match output {
        Some(path) => {
            export::export_to_file(batch, format, path)?;
            eprintln!(
                "{}",
                format!(
                    "✓ Wrote {} results to {}",
                    batch.results.len(),
                    path.display()
                )
                .green()
            );
        }
        None => {
            let rendered = export::render(batch, format)?;
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    if batch.failed_count() > 0 {
        eprintln!(
            "{}",
            format!(
                "{} of {} packages rejected",
                batch.failed_count(),
                batch.results.len()
            )
            .yellow()
        );
    }

    if batch.all_failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
