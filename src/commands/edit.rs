//! The `edit` command: admin edits of another member's profile.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::util::to_mention;
use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::{mention_to_id, require_admin};

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "edit",
        "Set properties of another user's profile",
        vec![
            OptionSchema::new("user", "the mention of the user to edit", util::MENTION, true),
            OptionSchema::new("name", "the user's full name", util::NAME, false),
            OptionSchema::new("email", "the user's email address", util::EMAIL, false),
            OptionSchema::new("program", "the user's program of study", util::ANY, false),
            OptionSchema::new("position", "the user's position or role", util::ANY, false),
        ],
        Box::new(EditHandler { store }),
    )
}

struct EditHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for EditHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        require_admin(ctx)?;
        let id = mention_to_id(ctx.option("user").unwrap_or_default())?;
        // Unlike `set`, the target must already be known to the bot.
        let mut member = self.store.member(id)?;
        let mut changed = false;

        if let Some(name) = ctx.option("name") {
            member.name = name.to_string();
            changed = true;
        }
        if let Some(email) = ctx.option("email") {
            member.email = email.to_string();
            changed = true;
        }
        if let Some(program) = ctx.option("program") {
            member.program = program.to_string();
            changed = true;
        }
        if let Some(position) = ctx.option("position") {
            member.position = position.to_string();
            changed = true;
        }

        if !changed {
            return Ok(Reply::text(format!(
                "Nothing to update. See `{} help command={{edit}}`",
                ctx.address
            )));
        }

        self.store.update_member(&member)?;
        Ok(
            Reply::text(format!("{}'s information has been updated", to_mention(id)))
                .with_attachment(member.attachment()),
        )
    }
}
