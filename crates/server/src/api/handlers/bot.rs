use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::error::ProxyResult;
use crate::models::TokenQuery;
use crate::state::AppState;

/// Get basic information about the bot, handy for checking a token
#[utoipa::path(
    get,
    path = "/api/getMe",
    tag = "telegram",
    params(TokenQuery),
    responses(
        (status = 200, description = "Telegram response, relayed as-is", body = crate::models::TelegramResponse),
        (status = 400, description = "Missing token", body = crate::models::ApiStatus),
        (status = 500, description = "Telegram could not be reached", body = crate::models::ApiStatus)
    )
)]
pub async fn get_me(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> ProxyResult<Json<Value>> {
    let token = state.resolve_token(query.token.as_deref())?;

    let result = state.forward::<Value>("getMe", &token, None).await?;
    Ok(Json(result))
}
