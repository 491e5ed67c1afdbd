use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::error::ProxyResult;
use crate::models::{GetUpdatesParams, GetUpdatesQuery};
use crate::state::AppState;

/// Fetch pending updates for the bot
///
/// Offsets are not remembered between calls; pass `offset` = last `update_id` + 1
/// to acknowledge earlier updates.
#[utoipa::path(
    get,
    path = "/api/getUpdates",
    tag = "telegram",
    params(GetUpdatesQuery),
    responses(
        (status = 200, description = "Telegram response, relayed as-is", body = crate::models::TelegramResponse),
        (status = 400, description = "Missing token or malformed parameter", body = crate::models::ApiStatus),
        (status = 500, description = "Telegram could not be reached", body = crate::models::ApiStatus)
    )
)]
pub async fn get_updates(
    State(state): State<AppState>,
    Query(query): Query<GetUpdatesQuery>,
) -> ProxyResult<Json<Value>> {
    let token = state.resolve_token(query.token.as_deref())?;
    let params = GetUpdatesParams::try_from(&query)?;

    let result = state.forward("getUpdates", &token, Some(&params)).await?;
    Ok(Json(result))
}
