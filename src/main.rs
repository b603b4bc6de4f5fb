//! Binary entry point: wires config, store, registry, and the console driver
//! to the dispatcher.

use std::sync::Arc;

use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use liftoff::bot::{Bot, Outgoing};
use liftoff::cmd::{Message, Registry};
use liftoff::commands;
use liftoff::config::Config;
use liftoff::store::{MemoryStore, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).map_err(|e| {
            error!(path = %config_path, error = %e, "failed to load config");
            e
        })?
    } else {
        warn!(path = %config_path, "config file not found, using defaults");
        Config::default()
    };

    info!(name = %config.bot.name, address = %config.bot.address, "starting bot");

    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    for id in &config.admins {
        store.set_admin(id, true);
        info!(user = %id, "seeded admin");
    }
    // The console user can always administer their own bot.
    store.set_admin(&config.console.user, true);

    // Registration completes before the event loop starts; the registry is
    // read-only from here on.
    let mut registry = Registry::new();
    commands::register_all(&mut registry, &store);

    let bot = Bot::new(config.bot.address.clone(), registry, store);

    let (event_tx, event_rx) = mpsc::channel::<Message>(64);
    let (reply_tx, mut reply_rx) = mpsc::channel::<Outgoing>(64);

    // Console driver: each stdin line is one inbound chat message from the
    // configured console identity. EOF closes the event channel and lets the
    // dispatcher drain and stop.
    let console = config.console.clone();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            let message = Message::new(line, console.channel.clone(), console.user.clone());
            if event_tx.send(message).await.is_err() {
                break;
            }
        }
    });

    // Reply printer: the outbound half of the console session.
    let printer = tokio::spawn(async move {
        while let Some(outgoing) = reply_rx.recv().await {
            println!("[{}] {}", outgoing.channel, outgoing.reply.text);
            for attachment in outgoing.reply.attachments {
                let color = attachment.color.hex();
                match attachment.title {
                    Some(title) => println!("  {title} [{color}]"),
                    None => println!("  [{color}]"),
                }
                for line in attachment.text.lines() {
                    println!("    {line}");
                }
            }
        }
    });

    bot.run(event_rx, reply_tx).await;
    printer.await?;
    Ok(())
}
