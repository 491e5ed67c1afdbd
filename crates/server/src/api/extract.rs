use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ProxyError, ProxyResult};

/// Loosely decoded JSON body.
///
/// Only JSON syntax is checked here, and no `Content-Type` header is
/// required. An empty body reads as `{}`. Field types are checked by
/// [`JsonBody::decode`] once the token has been resolved, so a missing token
/// is always the first thing reported.
#[derive(Debug, Clone, Default)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// The caller-supplied token, if the body carries one as a string
    pub fn token(&self) -> Option<&str> {
        self.0.get("token").and_then(Value::as_str)
    }

    pub fn decode<T: DeserializeOwned>(self) -> ProxyResult<T> {
        serde_json::from_value(self.0)
            .map_err(|e| ProxyError::bad_request(format!("Invalid JSON body: {}", e)))
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ProxyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ProxyError::bad_request(format!("Invalid request body: {}", e.body_text())))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ProxyError::bad_request(format!("Invalid JSON body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Strict {
        #[allow(dead_code)]
        count: i64,
    }

    #[test]
    fn test_token_lookup() {
        assert_eq!(JsonBody(json!({"token": "abc"})).token(), Some("abc"));
        assert_eq!(JsonBody(json!({"token": 5})).token(), None);
        assert_eq!(JsonBody(json!([1, 2])).token(), None);
    }

    #[test]
    fn test_decode_reports_type_errors() {
        let err = JsonBody(json!({"count": "many"})).decode::<Strict>().unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON body: "));
    }
}
