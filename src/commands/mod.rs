//! Built-in bot commands.
//!
//! Each module declares one command: its schema (name, help text, options)
//! and the handler that runs against the record store. New commands are pure
//! data plus a handler; the engine in [`crate::cmd`] never changes.

mod add_admin;
mod add_team;
mod add_user;
mod admins;
mod edit;
mod help;
mod remove_admin;
mod remove_team;
mod remove_user;
mod set;
mod teams;
mod view_team;
mod view_user;

use std::sync::Arc;

use crate::cmd::{Context, HandlerError, Registry};
use crate::store::Store;

/// Register every built-in command on the registry.
pub fn register_all(registry: &mut Registry, store: &Arc<dyn Store>) {
    registry.register(vec![
        help::command(),
        set::command(store.clone()),
        edit::command(store.clone()),
        view_user::command(store.clone()),
        view_team::command(store.clone()),
        teams::command(store.clone()),
        admins::command(store.clone()),
        add_team::command(store.clone()),
        remove_team::command(store.clone()),
        add_user::command(store.clone()),
        remove_user::command(store.clone()),
        add_admin::command(store.clone()),
        remove_admin::command(store.clone()),
    ]);
}

/// Refuse non-admin senders of privileged commands.
fn require_admin(ctx: &Context<'_>) -> Result<(), HandlerError> {
    if ctx.sender.is_admin {
        Ok(())
    } else {
        Err(HandlerError::AccessDenied)
    }
}

/// Resolve a `user` option value (an encoded mention) to a platform id.
fn mention_to_id(value: &str) -> Result<&str, HandlerError> {
    crate::cmd::util::parse_mention(value)
        .ok_or_else(|| HandlerError::Failed(format!("{value} is not a valid user mention")))
}
