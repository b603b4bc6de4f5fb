//! Command parsing and dispatch engine.
//!
//! A command is pure data plus a handler: a name, help text, and a set of
//! [`OptionSchema`] declarations. The engine turns one line of chat text of
//! the form `<bot-address> <command-name> key1={value1} key2={value2}` into a
//! validated map of option values, or a field-specific [`ParseError`] the
//! sender can act on. Parsing is all-or-nothing: a handler is never invoked
//! with partially valid input.
//!
//! Schemas are immutable after construction and [`Command::parse`] is a pure
//! function, so one registry of process-lifetime schemas serves every
//! invocation without shared mutable state.

mod command;
mod context;
mod error;
pub mod help;
mod option;
mod registry;
mod reply;
pub mod util;

pub use command::{Command, OptionValues};
pub use context::{Context, Message};
pub use error::{HandlerError, ParseError};
pub use option::OptionSchema;
pub use registry::Registry;
pub use reply::{Attachment, Color, Reply};

use async_trait::async_trait;

/// Result type for command handlers.
pub type HandlerResult = Result<Reply, HandlerError>;

/// Trait implemented by all command handlers.
///
/// Handlers receive the per-call [`Context`] with the raw message, the
/// resolved sender, and the validated option values. Anything the sender
/// should read comes back in the [`Reply`] or as a displayable
/// [`HandlerError`].
#[async_trait]
pub trait Handler: Send + Sync {
    /// Execute the command for one invocation.
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult;
}
