//! Member and team records.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::cmd::util::to_mention;
use crate::cmd::{Attachment, Color};

/// One person known to the bot.
///
/// Created lazily the first time a user talks to the bot; profile fields fill
/// in as the user runs `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Stable chat-platform identifier.
    pub id: String,
    pub name: String,
    pub email: String,
    pub program: String,
    pub position: String,
    /// Whether this member may run privileged commands.
    pub is_admin: bool,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    /// A fresh record with only the platform id known.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            program: String::new(),
            position: String::new(),
            is_admin: false,
            joined_at: Utc::now(),
        }
    }

    /// Render this member's profile as a reply attachment.
    pub fn attachment(&self) -> Attachment {
        let title = if self.name.is_empty() {
            to_mention(&self.id)
        } else {
            self.name.clone()
        };
        let mut lines = Vec::new();
        for (label, value) in [
            ("Email", &self.email),
            ("Program", &self.program),
            ("Position", &self.position),
        ] {
            if !value.is_empty() {
                lines.push(format!("{label}: {value}"));
            }
        }
        if self.is_admin {
            lines.push("Admin: yes".to_string());
        }
        lines.push(format!("Joined: {}", self.joined_at.format("%Y-%m-%d")));
        Attachment::new(title, lines.join("\n"), Color::Neutral)
    }
}

/// One team and the ids of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub members: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Render this team and its roster as a reply attachment.
    pub fn attachment(&self) -> Attachment {
        let roster = if self.members.is_empty() {
            "No members yet".to_string()
        } else {
            self.members
                .iter()
                .map(|id| to_mention(id))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let text = format!(
            "Members: {roster}\nCreated: {}",
            self.created_at.format("%Y-%m-%d")
        );
        Attachment::new(self.name.clone(), text, Color::Good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_attachment_skips_empty_fields() {
        let mut member = Member::new("U12AB34CD");
        member.email = "someone@example.com".to_string();
        let att = member.attachment();
        assert_eq!(att.title.as_deref(), Some("<@U12AB34CD>"));
        assert!(att.text.contains("Email: someone@example.com"));
        assert!(!att.text.contains("Program:"));
    }

    #[test]
    fn team_attachment_lists_members_as_mentions() {
        let mut team = Team::new("platform");
        team.members.insert("U1".to_string());
        team.members.insert("U2".to_string());
        let att = team.attachment();
        assert!(att.text.contains("<@U1>, <@U2>"));
        assert_eq!(att.color, Color::Good);
    }
}
