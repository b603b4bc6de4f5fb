//! Option schema: one named, validated parameter of a command.

use regex::Regex;

use super::error::ParseError;

/// Declares one named parameter a command accepts.
///
/// A user assigns a value to an option with `key={value}` in their message.
/// The value must fully match `format`; anchoring is applied at construction
/// so a schema declared with `[0-9]+` accepts `42` but rejects `4x2`. Schemas
/// are immutable once built and carry no per-call state, so a single instance
/// is safely shared by every parse of its command.
#[derive(Debug, Clone)]
pub struct OptionSchema {
    key: String,
    help_text: String,
    format: Regex,
    required: bool,
}

impl OptionSchema {
    /// Build an option schema from a format pattern.
    ///
    /// The pattern is wrapped in `^(?:...)$` so validation is a full match,
    /// never a substring search.
    pub fn new(key: &str, help_text: &str, format: &str, required: bool) -> Self {
        let anchored = format!("^(?:{format})$");
        let format = Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("invalid format pattern for option {key}: {e}"));
        Self {
            key: key.to_string(),
            help_text: help_text.to_string(),
            format,
            required,
        }
    }

    /// The option's identifier, unique within one command.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable description shown by help rendering.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Whether a value for this option must be present in every message.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The anchored format pattern, for error messages and help text.
    pub fn format(&self) -> &str {
        self.format.as_str()
    }

    /// Check a raw value (delimiters already stripped) against the format.
    pub(crate) fn validate(&self, value: &str) -> Result<(), ParseError> {
        if self.format.is_match(value) {
            return Ok(());
        }
        Err(ParseError::InvalidOptionFormat {
            key: self.key.clone(),
            format: self.format.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_full_match_only() {
        let opt = OptionSchema::new("count", "a number", "[0-9]+", true);
        assert!(opt.validate("42").is_ok());
        assert!(opt.validate("4x2").is_err());
        assert!(opt.validate("").is_err());
    }

    #[test]
    fn validate_error_names_key_and_pattern() {
        let opt = OptionSchema::new("count", "a number", "[0-9]+", true);
        let err = opt.validate("nope").unwrap_err();
        match err {
            ParseError::InvalidOptionFormat { key, format } => {
                assert_eq!(key, "count");
                assert!(format.contains("[0-9]+"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
