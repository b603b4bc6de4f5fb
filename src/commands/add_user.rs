//! The `add-user` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::util::to_mention;
use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, util};
use crate::store::Store;

use super::{mention_to_id, require_admin};

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "add-user",
        "Add a user to a team",
        vec![
            OptionSchema::new("user", "the mention of the user to add", util::MENTION, true),
            OptionSchema::new(
                "team",
                "the name of the team to add the user to",
                util::TEAM_NAME,
                true,
            ),
        ],
        Box::new(AddUserHandler { store }),
    )
}

struct AddUserHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for AddUserHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        require_admin(ctx)?;
        let id = mention_to_id(ctx.option("user").unwrap_or_default())?;
        let team = ctx.option("team").unwrap_or_default();
        self.store.add_to_team(team, id)?;
        Ok(Reply::text(format!(
            "{} was added to `{team}` team :tada:",
            to_mention(id)
        )))
    }
}
