//! The `view-team` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "view-team",
        "View information about a team",
        vec![OptionSchema::new(
            "team",
            "the name of the team to view",
            util::TEAM_NAME,
            true,
        )],
        Box::new(ViewTeamHandler { store }),
    )
}

struct ViewTeamHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for ViewTeamHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        let name = ctx.option("team").unwrap_or_default();
        let team = self.store.team(name)?;
        Ok(Reply::text(format!("Team {name}")).with_attachment(team.attachment()))
    }
}
