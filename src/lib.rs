//! Liftoff - a chat-operated team administration bot.
//!
//! Users address the bot in free text (`@liftoff add-user user={<@U123>}
//! team={platform}`); the command engine in [`cmd`] recognizes the operation,
//! validates its options, and routes to a handler from [`commands`]. The
//! dispatcher in [`bot`] drives the whole cycle off one ordered event channel.

pub mod bot;
pub mod cmd;
pub mod commands;
pub mod config;
pub mod model;
pub mod store;
