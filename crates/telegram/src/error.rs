use std::error::Error as _;

use thiserror::Error;

/// Telegram API call errors
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The request never produced a complete response
    #[error("{0}")]
    Transport(String),

    /// Parameters could not be serialized; no request was sent
    #[error("Failed to encode parameters: {0}")]
    Encode(#[from] serde_json::Error),

    /// The response body was not JSON
    #[error("Invalid JSON response from Telegram API")]
    InvalidJson,
}

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL embeds the bot token, keep it out of the message.
        let e = e.without_url();

        let mut message = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }

        TelegramError::Transport(message)
    }
}
