//! Dispatcher behavior: addressing, lookup fallback, parse short-circuit.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use liftoff::bot::Bot;
use liftoff::cmd::{
    Color, Command, Context, Handler, HandlerError, HandlerResult, Message, OptionSchema,
    Registry, Reply, util,
};
use liftoff::store::{MemoryStore, Store};

/// Handler that counts invocations, for proving it is never called on a
/// failed parse.
struct SpyHandler {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for SpyHandler {
    async fn handle(&self, ctx: &Context<'_>) -> HandlerResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let required = ctx.option("required").unwrap_or_default();
        Ok(Reply::text(format!("ran with {required}")))
    }
}

fn spy_bot() -> (Bot, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let command = Command::new(
        "test",
        "fake command with two options",
        vec![
            OptionSchema::new("required", "this is a required option", util::ANY, true),
            OptionSchema::new("optional", "this is an optional option", util::ANY, false),
        ],
        Box::new(SpyHandler {
            calls: calls.clone(),
        }),
    );
    let mut registry = Registry::new();
    registry.register(vec![command]);
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    (Bot::new("@bot", registry, store), calls)
}

fn message(text: &str) -> Message {
    Message::new(text, "general", "U12AB34CD")
}

#[tokio::test]
async fn valid_command_reaches_handler() {
    let (bot, calls) = spy_bot();
    let reply = bot
        .handle_message(&message("@bot test required={gre at} optional={awes=ome}"))
        .await
        .expect("addressed message should produce a reply");
    assert_eq!(reply.text, "ran with gre at");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unaddressed_message_is_discarded() {
    let (bot, calls) = spy_bot();
    assert!(bot.handle_message(&message("hello world")).await.is_none());
    assert!(
        bot.handle_message(&message("@someoneelse test required={x}"))
            .await
            .is_none()
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_command_falls_back_to_help_listing() {
    let (bot, calls) = spy_bot();
    let reply = bot
        .handle_message(&message("@bot frobnicate x={y}"))
        .await
        .expect("fallback should reply");
    assert!(reply.text.starts_with("Usage: `@bot COMMAND`"));
    assert_eq!(reply.attachments.len(), 1);
    assert!(reply.attachments[0].text.contains("test"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bare_address_falls_back_to_help_listing() {
    let (bot, calls) = spy_bot();
    let reply = bot.handle_message(&message("@bot")).await.unwrap();
    assert!(reply.text.starts_with("Usage: `@bot COMMAND`"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_required_option_never_invokes_handler() {
    let (bot, calls) = spy_bot();
    let reply = bot
        .handle_message(&message("@bot test optional={noooo}"))
        .await
        .unwrap();
    assert_eq!(
        reply.text,
        "Missing value for required option \"required\""
    );
    // Parse failures carry a usage hint pointing at per-command help.
    assert_eq!(reply.attachments.len(), 1);
    assert_eq!(reply.attachments[0].color, Color::Warning);
    assert!(reply.attachments[0].text.contains("help command={test}"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn duplicate_option_never_invokes_handler() {
    let (bot, calls) = spy_bot();
    let reply = bot
        .handle_message(&message("@bot test required={ayy} required={letsgo}"))
        .await
        .unwrap();
    assert_eq!(reply.text, "Duplicate option \"required\"");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unrecognized_option_never_invokes_handler() {
    let (bot, calls) = spy_bot();
    let reply = bot
        .handle_message(&message("@bot test plx={plox}"))
        .await
        .unwrap();
    assert_eq!(reply.text, "Unrecognized option \"plx\"");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn parse_error_is_terminal_for_one_message_only() {
    let (bot, calls) = spy_bot();
    bot.handle_message(&message("@bot test plx={plox}"))
        .await
        .unwrap();
    let reply = bot
        .handle_message(&message("@bot test required={fine}"))
        .await
        .unwrap();
    assert_eq!(reply.text, "ran with fine");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Handler whose failure is not meant for the sender's eyes.
struct FailingHandler;

#[async_trait]
impl Handler for FailingHandler {
    async fn handle(&self, _ctx: &Context<'_>) -> HandlerResult {
        Err(HandlerError::Internal(anyhow::anyhow!(
            "record store connection lost"
        )))
    }
}

#[tokio::test]
async fn internal_handler_failure_gets_generic_reply() {
    let command = Command::new("boom", "always fails", Vec::new(), Box::new(FailingHandler));
    let mut registry = Registry::new();
    registry.register(vec![command]);
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let bot = Bot::new("@bot", registry, store);

    let reply = bot.handle_message(&message("@bot boom")).await.unwrap();
    // The raw error text must not leak to the sender.
    assert_eq!(reply.text, "Oops, an error occurred. Sorry about that!");
    assert!(!reply.text.contains("record store"));
    assert_eq!(reply.attachments[0].color, Color::Danger);
}

#[tokio::test]
async fn consecutive_dispatches_share_no_option_state() {
    let (bot, _calls) = spy_bot();
    let first = bot
        .handle_message(&message("@bot test required={one} optional={extra}"))
        .await
        .unwrap();
    assert_eq!(first.text, "ran with one");

    // The second message omits the optional value; nothing may leak over.
    let second = bot
        .handle_message(&message("@bot test required={two}"))
        .await
        .unwrap();
    assert_eq!(second.text, "ran with two");
}
