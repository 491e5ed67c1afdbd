//! Telegram Bot API call helper.
//!
//! This crate issues single, stateless calls against the Telegram Bot API and
//! hands back the raw JSON body. Interpreting the payload (`ok`, `result`,
//! `description`) is left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use telegram::TelegramClient;
//!
//! let client = TelegramClient::new(reqwest::Client::new());
//! let me = client.call::<()>("getMe", "BOT_TOKEN", None).await?;
//! ```

mod client;
mod error;

pub use client::{TelegramClient, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
pub use error::TelegramError;

pub type Result<T> = std::result::Result<T, TelegramError>;
