//! Error types for command parsing and handler execution.
//!
//! Every parse failure maps to exactly one [`ParseError`] variant so replies
//! and tests can distinguish failure classes. Parse errors are terminal for a
//! single message only; they are rendered back to the sender as plain text and
//! never abort the event loop.

use thiserror::Error;

/// Errors produced while parsing one message against a command schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two whitespace-delimited tokens in the message.
    #[error("Received empty command")]
    EmptyCommand,

    /// The command token does not match the schema's name.
    #[error("Invalid command \"{0}\"")]
    InvalidCommand(String),

    /// An assignment used a key the schema does not declare.
    #[error("Unrecognized option \"{0}\"")]
    UnrecognizedOption(String),

    /// The same key was assigned twice in one message.
    #[error("Duplicate option \"{0}\"")]
    DuplicateOption(String),

    /// A value did not match the option's declared format.
    #[error("Invalid format for option \"{key}\". Format must match regular expression {format}.")]
    InvalidOptionFormat { key: String, format: String },

    /// A required option was never assigned.
    #[error("Missing value for required option \"{0}\"")]
    MissingRequiredOption(String),
}

impl ParseError {
    /// Static class label for structured logging.
    pub fn class(&self) -> &'static str {
        match self {
            Self::EmptyCommand => "empty_command",
            Self::InvalidCommand(_) => "invalid_command",
            Self::UnrecognizedOption(_) => "unrecognized_option",
            Self::DuplicateOption(_) => "duplicate_option",
            Self::InvalidOptionFormat { .. } => "invalid_option_format",
            Self::MissingRequiredOption(_) => "missing_required_option",
        }
    }
}

/// Errors a handler may return instead of a reply.
///
/// Handlers own their failure text: anything a user should read comes back as
/// `AccessDenied` or `Failed`, and the dispatcher forwards the display string
/// verbatim. `Internal` is for genuinely unexpected failures; the dispatcher
/// logs it and replies with a generic apology instead of the raw error.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("You must be an admin to use this command")]
    AccessDenied,

    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
