//! Error handling for riotgen.
//! Defines the error taxonomy shared by every generator and the result alias used
//! throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that abort a generator invocation.
///
/// Every variant is fatal to the current invocation and names the offending
/// field, section or path. Nothing is retried internally.
#[derive(Error, Debug)]
pub enum Error {
    /// A required parameter is absent or empty.
    #[error("Missing required parameter '{field}'.")]
    MissingRequiredField { field: String },

    /// The configuration file is not valid section/key-value text.
    #[error("Invalid configuration file '{path}' (line {line}): {message}.")]
    ConfigFormatError { path: String, line: usize, message: String },

    /// The configuration file has no such section.
    #[error("Configuration section '[{section}]' is missing.")]
    ConfigSectionMissing { section: String },

    /// The given directory is not a RIOT base directory.
    #[error("'{path}' is not a valid RIOT base directory.")]
    InvalidProjectRoot { path: String },

    /// A template references a parameter that was never resolved.
    #[error("Template '{template}' references undefined parameter '{key}'.")]
    TemplateParameterError { template: String, key: String },

    /// The output directory already exists and overwriting was declined.
    #[error("Output directory '{path}' already exists. Aborted.")]
    OutputExists { path: String },

    /// A template file is missing from the templates directory.
    #[error("Template file '{path}' does not exist.")]
    TemplateNotFound { path: String },

    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Interactive input could not be read.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with riotgen's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::debug!("aborting: {err:?}");
    eprintln!("{err}");
    std::process::exit(1);
}
