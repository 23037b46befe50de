//! fview - Entry Point

use clap::Parser;
use fview::config::{self, CliOverrides, ResolvedConfig};
use fview::model::{AppError, Orientation};
use fview::state::Session;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// fview - pick one line from a file by typing a filter
#[derive(Parser, Debug)]
#[command(name = "fview")]
#[command(version)]
#[command(about = "Interactive incremental line filter for the terminal")]
pub struct Args {
    /// File to filter, one record per line
    pub file: PathBuf,

    /// Print the resolved configuration to stderr before starting
    #[arg(short, long)]
    pub verbose: bool,

    /// Match case-insensitively
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Show lines that do NOT match the typed pattern
    #[arg(short = 'u', long)]
    pub invert_match: bool,

    /// Only load lines matching this regular expression
    #[arg(short = 'e', long = "pattern", value_name = "PREFILTER")]
    pub pattern: Option<String>,

    /// Interpret the typed pattern as a regular expression
    #[arg(short, long)]
    pub regex: bool,

    /// Result pane orientation
    #[arg(long, value_enum)]
    pub layout: Option<Orientation>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags only override lower-precedence settings when given.
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            ignore_case: self.ignore_case.then_some(true),
            invert_match: self.invert_match.then_some(true),
            regex: self.regex.then_some(true),
            layout: self.layout,
        }
    }
}

/// Startup state printed by `--verbose`.
#[derive(Debug, Serialize)]
struct StartupSummary<'a> {
    input_file: &'a Path,
    prefilter: Option<&'a str>,
    config: &'a ResolvedConfig,
}

/// Load configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    Ok(config::apply_cli_overrides(with_env, args.cli_overrides()))
}

fn print_summary(args: &Args, config: &ResolvedConfig) {
    let summary = StartupSummary {
        input_file: &args.file,
        prefilter: args.pattern.as_deref(),
        config,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => eprintln!("{json}"),
        Err(e) => warn!(error = %e, "Failed to serialize startup summary"),
    }
}

/// Print the confirmed record and a newline; a cancelled session prints nothing.
fn write_selection<W: Write>(out: &mut W, selection: Option<&str>) -> io::Result<()> {
    if let Some(text) = selection {
        writeln!(out, "{text}")?;
        out.flush()?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    // Logging goes to a file; the terminal belongs to the TUI.
    fview::logging::init(&config.log_file_path)?;
    info!(
        config = ?config,
        file = %args.file.display(),
        "fview starting"
    );

    if args.verbose {
        print_summary(&args, &config);
    }

    let mode = config.match_mode();
    let store = fview::source::load_store(&args.file, args.pattern.as_deref(), mode)?;
    // Window size is taken from the terminal on the first draw.
    let session = Session::new(store, mode, 0);

    let selection = fview::view::run_session(session, config.layout)?;

    // Terminal is restored by now, so stdout carries only the record.
    write_selection(&mut io::stdout().lock(), selection.as_deref()).map_err(AppError::Output)?;

    info!("fview exiting");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fview: {e}");
            ExitCode::FAILURE
        }
    }
}
