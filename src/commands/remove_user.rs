//! The `remove-user` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::util::to_mention;
use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::{mention_to_id, require_admin};

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "remove-user",
        "Remove a user from a team",
        vec![
            OptionSchema::new(
                "user",
                "the mention of the user to remove",
                util::MENTION,
                true,
            ),
            OptionSchema::new(
                "team",
                "the name of the team to remove the user from",
                util::TEAM_NAME,
                true,
            ),
        ],
        Box::new(RemoveUserHandler { store }),
    )
}

struct RemoveUserHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for RemoveUserHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        require_admin(ctx)?;
        let id = mention_to_id(ctx.option("user").unwrap_or_default())?;
        let team = ctx.option("team").unwrap_or_default();
        self.store.remove_from_team(team, id)?;
        Ok(Reply::text(format!(
            "{} was removed from `{team}` team :tada:",
            to_mention(id)
        )))
    }
}
