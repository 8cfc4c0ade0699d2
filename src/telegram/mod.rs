//! Telegram Bot API module
//!
//! Outbound side of the relay: one `sendMessage` call per accepted
//! submission, against a client bound to a single bot token and chat.

mod client;
mod types;

#[cfg(test)]
pub mod testing;

pub use client::{TelegramClient, TelegramError};
