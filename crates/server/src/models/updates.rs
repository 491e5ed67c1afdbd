use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::error::{ProxyError, ProxyResult};

/// Query parameters for `GET /api/getUpdates`
///
/// Numbers arrive as raw strings and are parsed only after the token check,
/// so a missing token is always reported first.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetUpdatesQuery {
    /// Bot token, falls back to the server default
    pub token: Option<String>,
    /// Identifier of the first update to return
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,
    /// Number of updates to retrieve (default 100)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Long polling timeout in seconds (default 0)
    #[param(value_type = Option<i64>)]
    pub timeout: Option<String>,
}

/// Parameters forwarded to `getUpdates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUpdatesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub limit: i64,
    pub timeout: i64,
}

impl GetUpdatesParams {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const DEFAULT_TIMEOUT: i64 = 0;
}

impl TryFrom<&GetUpdatesQuery> for GetUpdatesParams {
    type Error = ProxyError;

    fn try_from(query: &GetUpdatesQuery) -> ProxyResult<Self> {
        Ok(Self {
            offset: parse_int("offset", query.offset.as_deref())?,
            limit: parse_int("limit", query.limit.as_deref())?.unwrap_or(Self::DEFAULT_LIMIT),
            timeout: parse_int("timeout", query.timeout.as_deref())?
                .unwrap_or(Self::DEFAULT_TIMEOUT),
        })
    }
}

/// Empty strings count as unset; `0` does not.
fn parse_int(field: &str, value: Option<&str>) -> ProxyResult<Option<i64>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ProxyError::bad_request(format!("{} must be an integer", field))),
    }
}
