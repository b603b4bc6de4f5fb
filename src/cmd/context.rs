//! Per-invocation context handed to command handlers.

use crate::model::Member;

use super::command::OptionValues;
use super::registry::Registry;

/// One inbound chat message: raw text plus delivery metadata.
#[derive(Debug, Clone)]
pub struct Message {
    /// The full raw text, including the bot address and command tokens.
    pub text: String,
    /// Channel the message arrived on; replies go back here.
    pub channel: String,
    /// Stable identifier of the sender on the chat platform.
    pub sender: String,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        channel: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            channel: channel.into(),
            sender: sender.into(),
        }
    }
}

/// Everything a handler gets for one invocation.
///
/// Built fresh per dispatch after a successful parse and dropped when the
/// handler returns. The option values are a snapshot owned by the context;
/// the registry borrow lets the help command enumerate its peers.
pub struct Context<'a> {
    /// The message that triggered the invocation.
    pub message: &'a Message,
    /// The resolved sender record, including the admin flag.
    pub sender: Member,
    /// The token the bot answers to, for rendering usage lines.
    pub address: &'a str,
    registry: &'a Registry,
    options: OptionValues,
}

impl<'a> Context<'a> {
    pub fn new(
        message: &'a Message,
        sender: Member,
        address: &'a str,
        registry: &'a Registry,
        options: OptionValues,
    ) -> Self {
        Self {
            message,
            sender,
            address,
            registry,
            options,
        }
    }

    /// The validated value for an option, if it was assigned.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// All registered commands, for help rendering.
    pub fn registry(&self) -> &Registry {
        self.registry
    }
}
