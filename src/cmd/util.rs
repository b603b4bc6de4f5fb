//! Shared option format patterns and chat mention helpers.
//!
//! Format patterns are plain (unanchored) fragments; [`OptionSchema::new`]
//! anchors them so a value must match in full.
//!
//! [`OptionSchema::new`]: super::OptionSchema::new

use lazy_static::lazy_static;
use regex::Regex;

/// Matches any non-empty value.
pub const ANY: &str = ".+";
/// Matches a single word of letters.
pub const ALPHA: &str = "[a-zA-Z]+";
/// Matches a word made of command-name characters.
pub const COMMAND_NAME: &str = "[a-zA-Z-]+";
/// Matches a person's name, possibly several words.
pub const NAME: &str = "[a-zA-Z' -]+";
/// Matches an email address.
pub const EMAIL: &str = "[a-zA-Z0-9._+-]+@[a-zA-Z0-9.-]+";
/// Matches a team name: words, digits, spaces, and hyphens.
pub const TEAM_NAME: &str = "[a-zA-Z0-9' -]+";
/// Matches an encoded chat mention, e.g. `<@U12AB34CD>`.
pub const MENTION: &str = "<@[A-Za-z0-9]+>";

lazy_static! {
    static ref MENTION_RE: Regex =
        Regex::new("^<@([A-Za-z0-9]+)>$").expect("mention pattern is valid");
}

/// Format a user id as the mention the chat platform renders, e.g. `<@U123>`.
pub fn to_mention(user_id: &str) -> String {
    format!("<@{user_id}>")
}

/// Extract the user id from an encoded mention, if the text is one.
pub fn parse_mention(mention: &str) -> Option<&str> {
    MENTION_RE
        .captures(mention)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
