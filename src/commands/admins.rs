//! The `admins` command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cmd::util::to_mention;
use crate::cmd::{Command, Context, Handler, HandlerResult, Reply};
use crate::store::Store;

pub(crate) fn command(store: Arc<dyn Store>) -> Command {
    Command::new(
        "admins",
        "List all admins",
        Vec::new(),
        Box::new(AdminsHandler { store }),
    )
}

struct AdminsHandler {
    store: Arc<dyn Store>,
}

#[async_trait]
impl Handler for AdminsHandler {
    async fn handle(&self, _ctx: &Context<'_>) -> HandlerResult {
        let admins = self.store.admins();
        if admins.is_empty() {
            return Ok(Reply::text("There are currently no admins"));
        }
        let lines: Vec<String> = admins
            .into_iter()
            .map(|m| {
                if m.name.is_empty() {
                    to_mention(&m.id)
                } else {
                    m.name
                }
            })
            .collect();
        Ok(Reply::text(lines.join("\n")))
    }
}
