use axum::{extract::State, Json};
use serde_json::Value;

use crate::api::JsonBody;
use crate::error::ProxyResult;
use crate::models::{SendMessageParams, SendMessageRequest};
use crate::state::AppState;

/// Send a text message
#[utoipa::path(
    post,
    path = "/api/sendMessage",
    tag = "telegram",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Telegram response, relayed as-is", body = crate::models::TelegramResponse),
        (status = 400, description = "Missing token, chat_id or text", body = crate::models::ApiStatus),
        (status = 500, description = "Telegram could not be reached", body = crate::models::ApiStatus)
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    body: JsonBody,
) -> ProxyResult<Json<Value>> {
    let token = state.resolve_token(body.token())?;
    let payload: SendMessageRequest = body.decode()?;
    let params = SendMessageParams::try_from(payload)?;

    let result = state.forward("sendMessage", &token, Some(&params)).await?;
    Ok(Json(result))
}
