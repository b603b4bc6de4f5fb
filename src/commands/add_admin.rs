//! The `add-admin` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::util::to_mention;
use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::{mention_to_id, require_admin};

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "add-admin",
        "Make an existing user an admin",
        vec![OptionSchema::new(
            "user",
            "the mention of the user to make an admin",
            util::MENTION,
            true,
        )],
        Box::new(AddAdminHandler { store }),
    )
}

struct AddAdminHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for AddAdminHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        require_admin(ctx)?;
        let id = mention_to_id(ctx.option("user").unwrap_or_default())?;
        self.store.set_admin(id, true);
        Ok(Reply::text(format!(
            "{} has been made an admin :tada:",
            to_mention(id)
        )))
    }
}
