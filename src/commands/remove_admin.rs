//! The `remove-admin` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::util::to_mention;
use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::{mention_to_id, require_admin};

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "remove-admin",
        "Revoke a user's admin privileges",
        vec![OptionSchema::new(
            "user",
            "the mention of the user to demote",
            util::MENTION,
            true,
        )],
        Box::new(RemoveAdminHandler { store }),
    )
}

struct RemoveAdminHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for RemoveAdminHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        require_admin(ctx)?;
        let id = mention_to_id(ctx.option("user").unwrap_or_default())?;
        self.store.set_admin(id, false);
        Ok(Reply::text(format!(
            "{} has been removed as admin",
            to_mention(id)
        )))
    }
}
