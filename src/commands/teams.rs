//! The `teams` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::{Command, Context, Handler, HandlerResult, Reply};
use crate::store::Store;

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "teams",
        "List all teams",
        Vec::new(),
        Box::new(TeamsHandler { store }),
    )
}

struct TeamsHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for TeamsHandler {
    async fn handle(&self, _ctx: &Context<'_>) -> HandlerResult {
        let teams = self.store.teams();
        if teams.is_empty() {
            return Ok(Reply::text("There are currently no teams"));
        }
        let names: Vec<String> = teams.into_iter().map(|t| t.name).collect();
        Ok(Reply::text(names.join("\n")))
    }
}
