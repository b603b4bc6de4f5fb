//! The `help` command.

use async_trait::async_trait;

use crate::cmd::{Command, Context, Handler, HandlerResult, OptionSchema, Reply, help, util};

pub(crate) fn command() -> Command {
    Command::new(
        "help",
        "Get help using bot commands",
        vec![OptionSchema::new(
            "command",
            "get help using a particular command",
            util::COMMAND_NAME,
            false,
        )],
        Box::new(HelpHandler),
    )
}

struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        let Some(name) = ctx.option("command") else {
            return Ok(help::render_listing(ctx.address, ctx.registry()));
        };
        match ctx.registry().lookup(name) {
            Some(command) => Ok(Reply::text(command.help(ctx.address))),
            None => Ok(Reply::text(format!(
                "`{name}` is not a command.\nSee `{} help`",
                ctx.address
            ))),
        }
    }
}
