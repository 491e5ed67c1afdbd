use axum::{extract::State, Json};
use serde_json::Value;

use crate::api::JsonBody;
use crate::error::ProxyResult;
use crate::models::{SetWebhookParams, SetWebhookRequest};
use crate::state::AppState;

/// Register (or with an empty `url`, remove) the bot's webhook
#[utoipa::path(
    post,
    path = "/api/setWebhook",
    tag = "telegram",
    request_body = SetWebhookRequest,
    responses(
        (status = 200, description = "Telegram response, relayed as-is", body = crate::models::TelegramResponse),
        (status = 400, description = "Missing token", body = crate::models::ApiStatus),
        (status = 500, description = "Telegram could not be reached", body = crate::models::ApiStatus)
    )
)]
pub async fn set_webhook(
    State(state): State<AppState>,
    body: JsonBody,
) -> ProxyResult<Json<Value>> {
    let token = state.resolve_token(body.token())?;
    let payload: SetWebhookRequest = body.decode()?;
    let params = SetWebhookParams::from(payload);

    let result = state.forward("setWebhook", &token, Some(&params)).await?;
    Ok(Json(result))
}
