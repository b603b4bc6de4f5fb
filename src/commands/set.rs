//! The `set` command: update the sender's own profile.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "set",
        "Set properties of your profile",
        vec![
            OptionSchema::new("name", "your full name", util::NAME, false),
            OptionSchema::new("email", "your email address", util::EMAIL, false),
            OptionSchema::new("program", "your program of study", util::ANY, false),
            OptionSchema::new("position", "your position or role", util::ANY, false),
        ],
        Box::new(SetHandler { store }),
    )
}

struct SetHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for SetHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        let mut member = ctx.sender.clone();
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
                "Nothing to update. See `{} help command={{set}}`",
                ctx.address
            )));
        }

        self.store.update_member(&member)?;
        Ok(Reply::text("Your profile has been updated :simple_smile:")
            .with_attachment(member.attachment()))
    }
}
