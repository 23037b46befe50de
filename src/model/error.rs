//! Error types for fview.
//!
//! Errors are `thiserror` enums that compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InputError`] - Input file reading and prefilter compilation failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log sink setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal unavailable or draw failures
//!   - `Output` - Writing the selection to stdout failed
//!
//! Every variant is fatal and surfaces before or after the interactive loop.
//! An empty filter result is a normal state, never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All of these terminate the process with a non-zero status. Startup
/// variants (`Input`, `Config`, `Logging`) occur before the terminal is
/// touched; `Terminal` is returned after the terminal has been restored.
///
/// # Examples
///
/// ```no_run
/// use fview::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _store = load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the record store.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration file exists but cannot be used.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log sink could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal could not be acquired or drawn to.
    ///
    /// Covers the no-TTY case: enabling raw mode fails before the loop runs.
    #[error("Terminal error: {0}")]
    Terminal(#[from] crate::view::TuiError),

    /// The confirmed record could not be written to stdout.
    #[error("Failed to write selection: {0}")]
    Output(#[source] std::io::Error),
}

/// Errors encountered while building the record store.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **InvalidPrefilter**: Display the regex error and exit
/// - **Io**: Permissions, disk errors - display and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified input file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use fview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// The `--pattern` prefilter is not a valid regular expression.
    ///
    /// Unlike the live pattern, the prefilter is compiled once before the
    /// session starts, so a bad expression is reported rather than tolerated.
    #[error("Invalid prefilter pattern '{pattern}': {reason}")]
    InvalidPrefilter {
        /// The expression as given on the command line.
        pattern: String,
        /// Compiler error message.
        reason: String,
    },

    /// Generic I/O error reading from the input file.
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use fview::model::error::InputError;
    ///
    /// fn open_input(path: &str) -> Result<File, InputError> {
    ///     // io::Error automatically converts to InputError::Io via ?
    ///     Ok(File::open(path)?)
    /// }
    /// ```
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
