//! The `remove-team` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::require_admin;

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "remove-team",
        "Delete an existing team",
        vec![OptionSchema::new(
            "team",
            "the name of the team to delete",
            util::TEAM_NAME,
            true,
        )],
        Box::new(RemoveTeamHandler { store }),
    )
}

struct RemoveTeamHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for RemoveTeamHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        require_admin(ctx)?;
        let name = ctx.option("team").unwrap_or_default();
        self.store.delete_team(name)?;
        Ok(Reply::text(format!("`{name}` team has been deleted :tada:")))
    }
}
