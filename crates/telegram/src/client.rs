use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::TelegramError;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Deadline applied to every call unless overridden with [`TelegramClient::with_timeout`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram Bot API client
///
/// Holds no per-bot state: the token travels with every call, so one client
/// serves any number of bots.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    api_base: String,
    timeout: Duration,
}

impl TelegramClient {
    /// Create a new Telegram client on top of a shared reqwest client
    pub fn new(client: Client) -> Self {
        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different API host (self-hosted Bot API server, test stub)
    pub fn with_base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn url(&self, token: &str, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, token, method)
    }

    /// Call a Bot API method.
    ///
    /// With `params` the call is a `POST` carrying them as a JSON body,
    /// without it a bodyless `GET`. The whole response body is buffered and
    /// parsed as JSON; the upstream status code and its `ok` flag are not
    /// inspected.
    pub async fn call<P>(&self, method: &str, token: &str, params: Option<&P>) -> crate::Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let url = self.url(token, method);

        let request = match params {
            Some(params) => {
                let body = serde_json::to_value(params)?;
                let timeout = self.timeout + long_poll(&body);
                self.client.post(&url).json(&body).timeout(timeout)
            }
            None => self.client.get(&url).timeout(self.timeout),
        };

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Telegram {} responded with {}", method, status);

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!("Telegram {} returned a non-JSON body: {}", method, e);
            TelegramError::InvalidJson
        })
    }
}

/// Extra time the upstream may hold a long-polling request open.
fn long_poll(params: &Value) -> Duration {
    params
        .get("timeout")
        .and_then(Value::as_u64)
        .map(Duration::from_secs)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn client_for(server: &MockServer) -> TelegramClient {
        TelegramClient::new(Client::new()).with_base_url(server.uri())
    }

    #[test]
    fn test_url_template() {
        let client = TelegramClient::new(Client::new());
        assert_eq!(
            client.url("123:ABC", "getMe"),
            "https://api.telegram.org/bot123:ABC/getMe"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = TelegramClient::new(Client::new()).with_base_url("http://localhost:8081/");
        assert_eq!(client.url("t", "getMe"), "http://localhost:8081/bott/getMe");
    }

    #[test]
    fn test_long_poll_extension() {
        assert_eq!(long_poll(&json!({"timeout": 25})), Duration::from_secs(25));
        assert_eq!(long_poll(&json!({"timeout": 0})), Duration::ZERO);
        assert_eq!(long_poll(&json!({"limit": 100})), Duration::ZERO);
        assert_eq!(long_poll(&json!({"timeout": "soon"})), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_call_with_params_posts_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botTOKEN/sendMessage"))
            .and(body_json(json!({"chat_id": 42, "text": "hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .call("sendMessage", "TOKEN", Some(&json!({"chat_id": 42, "text": "hi"})))
            .await
            .unwrap();

        assert_eq!(result, json!({"ok": true, "result": {}}));
    }

    #[tokio::test]
    async fn test_call_without_params_gets_without_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/botTOKEN/getMe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .call::<Value>("getMe", "TOKEN", None)
            .await
            .unwrap();
        assert_eq!(result, json!({"ok": true}));

        let received: Vec<Request> = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_still_resolves() {
        let server = MockServer::start().await;

        let payload = json!({"ok": false, "error_code": 401, "description": "Unauthorized"});
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .call::<Value>("getMe", "bad", None)
            .await
            .unwrap();
        assert_eq!(result, payload);
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .call::<Value>("getMe", "TOKEN", None)
            .await
            .unwrap_err();
        assert!(matches!(err, TelegramError::InvalidJson));
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("unsupported field"))
        }
    }

    #[tokio::test]
    async fn test_encode_failure_skips_network() {
        let server = MockServer::start().await;

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .call("sendMessage", "TOKEN", Some(&Unencodable))
            .await
            .unwrap_err();

        assert!(matches!(err, TelegramError::Encode(_)));
        assert_eq!(err.to_string(), "Failed to encode parameters: unsupported field");
    }

    #[tokio::test]
    async fn test_deadline_expires() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": true}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .with_timeout(Duration::from_millis(500))
            .call::<Value>("getMe", "TOKEN", None)
            .await
            .unwrap_err();

        match err {
            TelegramError::Transport(message) => assert!(message.contains("timed out"), "{}", message),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_long_poll_outlasts_base_deadline() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botTOKEN/getUpdates"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": true, "result": []}))
                    .set_delay(Duration::from_millis(1500)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .with_timeout(Duration::from_millis(500))
            .call("getUpdates", "TOKEN", Some(&json!({"limit": 100, "timeout": 2})))
            .await
            .unwrap();

        assert_eq!(result, json!({"ok": true, "result": []}));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TelegramClient::new(Client::new()).with_base_url(format!("http://{}", addr));
        let err = client
            .call::<Value>("getMe", "SECRET-TOKEN", None)
            .await
            .unwrap_err();

        match err {
            TelegramError::Transport(message) => {
                assert!(!message.is_empty());
                assert!(!message.contains("SECRET-TOKEN"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
