//! `rowview` binary: validate and inspect content directories.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rowview::init_logging;
use rowview::report::ContentReport;
use rowview_params::{ContentSet, ParamsError, default_content_dir};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Command-line options.
#[derive(Parser)]
#[command(name = "rowview", version, about)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every document in a content directory
    Check {
        /// Content directory (defaults to ~/.rowview)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print the layout, caption and data tree of a content directory
    Show {
        /// Content directory (defaults to ~/.rowview)
        #[arg(long)]
        dir: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check { dir } => {
            let dir = resolve_dir(dir)?;
            let content = load(&dir)?;
            println!("ok: {} ({} groups)", dir.display(), content.data.len());
        }
        Command::Show { dir, format } => {
            let dir = resolve_dir(dir)?;
            let content = load(&dir)?;
            let report = ContentReport::new(&content);
            match format {
                OutputFormat::Text => print!("{}", report.render_text()),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("failed to encode report")?
                ),
            }
        }
    }
    Ok(())
}

fn resolve_dir(dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match dir.or_else(default_content_dir) {
        Some(dir) => {
            debug!("using content directory {}", dir.display());
            Ok(dir)
        }
        None => bail!("no --dir given and no home directory to default to"),
    }
}

fn load(dir: &Path) -> anyhow::Result<ContentSet> {
    ContentSet::load_from_dir(dir)
        .inspect(|_| info!("content directory is valid: {}", dir.display()))
        .inspect_err(|err: &ParamsError| {
            if let Some(path) = err.violation_path() {
                debug!("violation located at {path}");
            }
        })
        .with_context(|| format!("invalid content in {}", dir.display()))
}
