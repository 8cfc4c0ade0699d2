//! Telegram Bot API client
//!
//! One method is enough for the relay: `sendMessage` to the configured chat.
//! The Bot API reports failures inside the JSON envelope (`ok: false`), not
//! through the HTTP status, so the envelope is what decides success.

use std::time::Duration;

use thiserror::Error;

use crate::telegram::types::{SendMessageRequest, SendMessageResponse};

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Upper bound for one outbound call; the form submitter is waiting on it
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivery failure reported back to the handler
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The API answered but refused the message
    #[error("API error {code}: {description}")]
    Api { code: i64, description: String },
    /// The call itself could not complete, or the reply was not valid JSON
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client bound to one bot token and one destination chat
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    /// Point the client at a different API host (local proxies, tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Send one plain-text message to the configured chat
    pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let result: SendMessageResponse = response.json().await?;
        if result.ok {
            Ok(())
        } else {
            Err(TelegramError::Api {
                code: result.error_code.unwrap_or(0),
                description: result.description.unwrap_or_default(),
            })
        }
    }
}
