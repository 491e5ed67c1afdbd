use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::lenient_i64;
use crate::error::{ProxyError, ProxyResult};

/// Target chat: numeric id or `@channelusername`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    fn is_blank(&self) -> bool {
        matches!(self, ChatId::Username(name) if name.trim().is_empty())
    }
}

/// Request body for `POST /api/sendMessage`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    /// Bot token, falls back to the server default
    pub token: Option<String>,
    pub chat_id: Option<ChatId>,
    pub text: Option<String>,
    /// `HTML`, `Markdown` or `MarkdownV2`
    pub parse_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub reply_to_message_id: Option<i64>,
    pub disable_notification: Option<bool>,
}

/// Parameters forwarded to `sendMessage`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessageParams {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl TryFrom<SendMessageRequest> for SendMessageParams {
    type Error = ProxyError;

    fn try_from(request: SendMessageRequest) -> ProxyResult<Self> {
        let chat_id = request.chat_id.filter(|id| !id.is_blank());
        let text = request.text.filter(|text| !text.trim().is_empty());

        let (Some(chat_id), Some(text)) = (chat_id, text) else {
            return Err(ProxyError::bad_request("chat_id and text are required"));
        };

        Ok(Self {
            chat_id,
            text,
            parse_mode: request.parse_mode,
            reply_to_message_id: request.reply_to_message_id,
            disable_notification: request.disable_notification,
        })
    }
}
