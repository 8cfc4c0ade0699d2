// Wire types for the Bot API sendMessage call

use serde::{Deserialize, Serialize};

/// Outbound sendMessage payload.
/// The text is sent as-is, without a parse mode, so user-supplied values
/// are never interpreted as markup.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// The ok/not-ok envelope every Bot API method returns
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}
