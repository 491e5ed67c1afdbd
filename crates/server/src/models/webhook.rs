use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/setWebhook`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SetWebhookRequest {
    /// Bot token, falls back to the server default
    pub token: Option<String>,
    /// HTTPS endpoint for updates; empty removes the webhook
    pub url: Option<String>,
    pub drop_pending_updates: Option<bool>,
}

/// Parameters forwarded to `setWebhook`; both fields are always sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetWebhookParams {
    pub url: String,
    pub drop_pending_updates: bool,
}

impl From<SetWebhookRequest> for SetWebhookParams {
    fn from(request: SetWebhookRequest) -> Self {
        Self {
            url: request.url.unwrap_or_default(),
            drop_pending_updates: request.drop_pending_updates.unwrap_or(false),
        }
    }
}
