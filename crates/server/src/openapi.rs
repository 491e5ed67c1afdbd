use utoipa::OpenApi;

use crate::models::{ApiStatus, ChatId, SendMessageRequest, SetWebhookRequest, TelegramResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Telegram Bot API Proxy",
        version = "1.0.0"
    ),
    tags(
        (name = "telegram", description = "Bot API methods forwarded to Telegram")
    ),
    components(schemas(
        ApiStatus,
        ChatId,
        SendMessageRequest,
        SetWebhookRequest,
        TelegramResponse
    ))
)]
pub struct ApiDoc;
