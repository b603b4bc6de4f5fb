//! Command schema and the parse/validate algorithm.

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

use super::Handler;
use super::error::ParseError;
use super::option::OptionSchema;

lazy_static! {
    /// Extracts `key={value}` assignments. Values may contain whitespace and
    /// `=`, but not the closing brace.
    static ref ASSIGNMENT: Regex =
        Regex::new(r"([A-Za-z0-9-]+)=\{([^}]+)\}").expect("assignment pattern is valid");
}

/// Validated option values produced by one successful parse, keyed by option
/// key with the `{}` delimiters stripped.
pub type OptionValues = HashMap<String, String>;

/// Declarative definition of one chat-invocable operation.
///
/// Options are kept in name order so help rendering is deterministic. The
/// schema is immutable after construction; [`Command::parse`] never mutates
/// it, returning a fresh value map per call.
pub struct Command {
    name: String,
    help_text: String,
    options: BTreeMap<String, OptionSchema>,
    handler: Box<dyn Handler>,
}

impl Command {
    /// Build a command schema. Option keys must be unique; a later duplicate
    /// key replaces the earlier declaration.
    pub fn new(
        name: &str,
        help_text: &str,
        options: Vec<OptionSchema>,
        handler: Box<dyn Handler>,
    ) -> Self {
        let options = options
            .into_iter()
            .map(|opt| (opt.key().to_string(), opt))
            .collect();
        Self {
            name: name.to_string(),
            help_text: help_text.to_string(),
            options,
            handler,
        }
    }

    /// The command's unique name, matched against the second message token.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description shown in the command listing.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Declared options in key order.
    pub fn options(&self) -> impl Iterator<Item = &OptionSchema> {
        self.options.values()
    }

    /// The handler bound to this command.
    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    /// Parse one raw message against this schema.
    ///
    /// The message format is `<bot-address> <command-name> key={value} ...`.
    /// Validation is all-or-nothing: the first failure wins and no partial
    /// value map is ever returned. Assignments apply left to right as they
    /// occur in the text; text between assignments that is not of the
    /// `key={value}` shape is ignored.
    pub fn parse(&self, text: &str) -> Result<OptionValues, ParseError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(ParseError::EmptyCommand);
        }
        let command_token = tokens[1];
        if command_token != self.name {
            return Err(ParseError::InvalidCommand(command_token.to_string()));
        }

        let mut values = OptionValues::new();
        let rest = tokens[2..].join(" ");
        for caps in ASSIGNMENT.captures_iter(&rest) {
            let key = &caps[1];
            let value = &caps[2];

            let option = self
                .options
                .get(key)
                .ok_or_else(|| ParseError::UnrecognizedOption(key.to_string()))?;
            option.validate(value)?;
            if values.contains_key(key) {
                return Err(ParseError::DuplicateOption(key.to_string()));
            }
            values.insert(key.to_string(), value.to_string());
        }

        // Required options are checked in key order so the reported key is
        // deterministic when several are missing.
        for (key, option) in &self.options {
            if option.required() && !values.contains_key(key) {
                return Err(ParseError::MissingRequiredOption(key.clone()));
            }
        }
        Ok(values)
    }

    /// Render full help for this command: usage line, description, and one
    /// line per option with a required/optional marker.
    pub fn help(&self, address: &str) -> String {
        let mut usage = format!("Usage: {} {}", address, self.name);
        if !self.options.is_empty() {
            usage.push_str(" OPTIONS");
        }
        let mut out = format!("{}\n\n{}", usage, self.help_text);
        if !self.options.is_empty() {
            out.push_str("\n\nOptions:\n");
            for option in self.options.values() {
                let marker = if option.required() {
                    "required"
                } else {
                    "optional"
                };
                out.push_str(&format!(
                    "  {} ({})  {}\n",
                    option.key(),
                    marker,
                    option.help_text()
                ));
            }
        }
        out
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
