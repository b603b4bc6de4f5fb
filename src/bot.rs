//! The dispatcher: maps one raw chat message to a parse attempt and, on
//! success, a handler call.
//!
//! One task drains the ordered event channel and fully completes
//! identify -> lookup -> parse -> invoke -> reply before pulling the next
//! message, so replies leave in arrival order. Parsing is pure and schemas
//! are immutable, so this serialization is about ordering, not safety.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::cmd::{Attachment, Color, Context, HandlerError, Message, Registry, Reply, help};
use crate::store::Store;

/// Generic reply for handler failures the sender should not see verbatim.
const ERROR_MESSAGE: &str = "Oops, an error occurred. Sorry about that!";

/// A reply routed back to the channel the triggering message arrived on.
#[derive(Debug)]
pub struct Outgoing {
    pub channel: String,
    pub reply: Reply,
}

/// One bot instance: the address it answers to, its command registry, and
/// the record store handlers work against.
pub struct Bot {
    address: String,
    registry: Registry,
    store: Arc<dyn Store>,
}

impl Bot {
    /// Build a bot. The registry must be fully populated before [`Bot::run`]
    /// starts consuming messages; no commands can be added afterwards.
    pub fn new(address: impl Into<String>, registry: Registry, store: Arc<dyn Store>) -> Self {
        Self {
            address: address.into(),
            registry,
            store,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatch a single message.
    ///
    /// Returns `None` for messages not addressed to the bot. An unknown
    /// command name falls back to the full help listing; a parse failure
    /// becomes the error's display text and the handler is never invoked.
    pub async fn handle_message(&self, message: &Message) -> Option<Reply> {
        let mut tokens = message.text.split_whitespace();
        if tokens.next() != Some(self.address.as_str()) {
            return None;
        }

        let name = tokens.next().unwrap_or_default();
        let Some(command) = self.registry.lookup(name) else {
            debug!(command = %name, sender = %message.sender, "unknown command, sending help");
            return Some(help::render_listing(&self.address, &self.registry));
        };

        let options = match command.parse(&message.text) {
            Ok(options) => options,
            Err(err) => {
                info!(
                    command = %name,
                    sender = %message.sender,
                    class = err.class(),
                    "rejected malformed command"
                );
                let hint = Attachment::untitled(
                    format!("See `{} help command={{{name}}}`", self.address),
                    Color::Warning,
                );
                return Some(Reply::text(err.to_string()).with_attachment(hint));
            }
        };

        // The sender always has a record by the time a handler runs.
        let sender = self.store.ensure_member(&message.sender);
        let ctx = Context::new(message, sender, &self.address, &self.registry, options);
        match command.handler().handle(&ctx).await {
            Ok(reply) => {
                debug!(command = %name, sender = %message.sender, "command handled");
                Some(reply)
            }
            Err(err @ (HandlerError::AccessDenied | HandlerError::Failed(_))) => {
                info!(command = %name, sender = %message.sender, error = %err, "command refused");
                Some(Reply::text(err.to_string()))
            }
            Err(HandlerError::Internal(err)) => {
                error!(command = %name, sender = %message.sender, error = %err, "handler failed");
                let notice =
                    Attachment::untitled("This failure has been logged.", Color::Danger);
                Some(Reply::text(ERROR_MESSAGE).with_attachment(notice))
            }
        }
    }

    /// Consume messages until the event channel closes.
    ///
    /// No failure in dispatch can stop this loop; every error becomes a
    /// reply and the loop returns to waiting for the next message.
    pub async fn run(&self, mut events: mpsc::Receiver<Message>, replies: mpsc::Sender<Outgoing>) {
        info!(address = %self.address, commands = self.registry.len(), "bot started");
        while let Some(message) = events.recv().await {
            if let Some(reply) = self.handle_message(&message).await {
                let outgoing = Outgoing {
                    channel: message.channel.clone(),
                    reply,
                };
                if replies.send(outgoing).await.is_err() {
                    warn!("reply channel closed, stopping event loop");
                    break;
                }
            }
        }
        info!("event channel closed, bot stopping");
    }
}
