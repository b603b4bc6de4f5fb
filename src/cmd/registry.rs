//! Name-keyed collection of command schemas.

use std::collections::BTreeMap;

use tracing::{error, info};

use super::command::Command;

/// All commands known to the bot, keyed by name.
///
/// Constructed and populated during startup, strictly before the event loop
/// begins; reads afterwards are lock-free because no further writes occur.
/// Registering a name twice is a logged no-op so one bad registration cannot
/// keep the rest of the bot from starting.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, Command>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of commands, skipping any whose name is taken.
    pub fn register(&mut self, commands: Vec<Command>) {
        for command in commands {
            if self.commands.contains_key(command.name()) {
                error!(command = %command.name(), "attempt to register duplicate command");
                continue;
            }
            info!(command = %command.name(), "registered command");
            self.commands.insert(command.name().to_string(), command);
        }
    }

    /// Look up a command by its exact name.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// All commands in name order, for the full command listing.
    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::{Context, Handler, HandlerResult, Reply};
    use async_trait::async_trait;

    struct NopHandler;

    #[async_trait]
    impl Handler for NopHandler {
        async fn handle(&self, _ctx: &Context<'_>) -> HandlerResult {
            Ok(Reply::text("ok"))
        }
    }

    fn command(name: &str, help: &str) -> Command {
        Command::new(name, help, Vec::new(), Box::new(NopHandler))
    }

    #[test]
    fn duplicate_registration_is_a_no_op() {
        let mut registry = Registry::new();
        registry.register(vec![command("help", "first"), command("help", "second")]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("help").map(Command::help_text), Some("first"));
    }

    #[test]
    fn all_enumerates_in_name_order() {
        let mut registry = Registry::new();
        registry.register(vec![
            command("view-user", ""),
            command("add-team", ""),
            command("help", ""),
        ]);
        let names: Vec<&str> = registry.all().map(Command::name).collect();
        assert_eq!(names, vec!["add-team", "help", "view-user"]);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let mut registry = Registry::new();
        registry.register(vec![command("help", "")]);
        assert!(registry.lookup("help").is_some());
        assert!(registry.lookup("Help").is_none());
        assert!(registry.lookup("hel").is_none());
    }
}
