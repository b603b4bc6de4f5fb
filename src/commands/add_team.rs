//! The `add-team` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::require_admin;

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "add-team",
        "Create a new team",
        vec![OptionSchema::new(
            "team",
            "the name of the team to create",
            util::TEAM_NAME,
            true,
        )],
        Box::new(AddTeamHandler { store }),
    )
}

struct AddTeamHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for AddTeamHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        require_admin(ctx)?;
        let name = ctx.option("team").unwrap_or_default();
        let team = self.store.create_team(name)?;
        Ok(Reply::text(format!(
            "`{}` team has been created :tada:",
            team.name
        )))
    }
}
