//! Error handling for HJH CLI

use hjh_core::{HelixError, Placement};
use thiserror::Error;

/// Main error type for HJH CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("Validation error: {source}")]
    Validation {
        #[from]
        source: HelixError,
    },

    #[error("Placement error: {placement} - {message}")]
    Placement { placement: Placement, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn placement<S: Into<String>>(placement: Placement, message: S) -> Self {
        Self::Placement {
            placement,
            message: message.into(),
        }
    }

    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::Validation { source } => match source {
            HelixError::StrandLengthMismatch { .. } => {
                message.push_str(
                    "\n\nSuggestions:\n\
                     • Both strands must cover the same number of base pairs\n\
                     • Give --side2 5'->3', not as the complement aligned under --side1",
                );
            }
            HelixError::NegativeEffectiveLength { .. } | HelixError::EffectiveLengthTooShort { .. } => {
                message.push_str(
                    "\n\nSuggestions:\n\
                     • Use a longer helix or a shorter junction\n\
                     • Check --total-length if you set one",
                );
            }
            HelixError::MissingMiddleHelix => {
                message.push_str(
                    "\n\nSuggestions:\n\
                     • Pass --middle-side1 and --middle-side2\n\
                     • Or set [middle_helix] in hjh.toml",
                );
            }
            _ => {}
        },

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your hjh.toml configuration file\n\
                 • Use 'hjh config --example' to generate a sample configuration",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
