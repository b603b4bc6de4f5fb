//! Rendering of the registry-wide command listing.
//!
//! Pure formatting over the registry; per-command help lives on
//! [`Command::help`](super::Command::help).

use super::registry::Registry;
use super::reply::{Attachment, Color, Reply};

/// Render every registered command's name and help text, column-aligned by
/// the longest command name.
pub fn render_listing(address: &str, registry: &Registry) -> Reply {
    let header = format!(
        "Usage: `{address} COMMAND`\n\nGet help using a specific command with \
         `{address} help command={{COMMAND}}`"
    );
    let longest = registry.all().map(|c| c.name().len()).max().unwrap_or(0);
    let mut listing = String::from("```\n");
    for command in registry.all() {
        listing.push_str(&format!(
            "{:<width$} {}\n",
            command.name(),
            command.help_text(),
            width = longest + 1
        ));
    }
    listing.push_str("```");
    Reply::text(header).with_attachment(Attachment::new("Commands", listing, Color::Neutral))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::{Command, Context, Handler, HandlerResult};
    use async_trait::async_trait;

    struct NopHandler;

    #[async_trait]
    impl Handler for NopHandler {
        async fn handle(&self, _ctx: &Context<'_>) -> HandlerResult {
            Ok(Reply::text("ok"))
        }
    }

    #[test]
    fn listing_aligns_by_longest_name() {
        let mut registry = Registry::new();
        registry.register(vec![
            Command::new("help", "short", Vec::new(), Box::new(NopHandler)),
            Command::new("view-user", "longer name", Vec::new(), Box::new(NopHandler)),
        ]);
        let reply = render_listing("@bot", &registry);
        let listing = &reply.attachments[0].text;
        assert!(listing.contains("help       short"));
        assert!(listing.contains("view-user  longer name"));
    }
}
