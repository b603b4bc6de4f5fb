//! The `view-user` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::mention_to_id;

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "view-user",
        "View information about a user",
        vec![OptionSchema::new(
            "user",
            "the mention of the user to view",
            util::MENTION,
            true,
        )],
        Box::new(ViewUserHandler { store }),
    )
}

struct ViewUserHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for ViewUserHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        let mention = ctx.option("user").unwrap_or_default();
        let id = mention_to_id(mention)?;
        let member = self.store.member(id)?;
        Ok(Reply::text(format!("{mention}'s profile")).with_attachment(member.attachment()))
    }
}
