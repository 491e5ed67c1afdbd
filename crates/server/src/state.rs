use std::sync::Arc;

use reqwest::{Client, Proxy};
use serde::Serialize;
use serde_json::Value;
use telegram::TelegramClient;

use crate::config::Config;
use crate::error::{HttpClientError, ProxyError, ProxyResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, HttpClientError> {
        let client = build_http_client(&config)?;
        let telegram = TelegramClient::new(client)
            .with_base_url(config.api_base.clone())
            .with_timeout(config.request_timeout);

        Ok(Self {
            config: Arc::new(config),
            telegram,
        })
    }

    /// Pick the caller's token, else the configured default.
    pub fn resolve_token(&self, explicit: Option<&str>) -> ProxyResult<String> {
        explicit
            .filter(|token| !token.is_empty())
            .or(self.config.default_token.as_deref())
            .map(str::to_string)
            .ok_or_else(|| ProxyError::bad_request("Bot token is required"))
    }

    /// Forward one Bot API call and log failures under the method name.
    pub async fn forward<P>(&self, method: &str, token: &str, params: Option<&P>) -> ProxyResult<Value>
    where
        P: Serialize + ?Sized,
    {
        self.telegram
            .call(method, token, params)
            .await
            .map_err(|e| {
                tracing::error!("Error in {}: {}", method, e);
                ProxyError::from(e)
            })
    }
}

fn build_http_client(config: &Config) -> Result<Client, HttpClientError> {
    let mut builder = Client::builder().connect_timeout(config.connect_timeout);

    if let Some(url) = &config.proxy {
        let proxy = Proxy::all(url).map_err(|e| HttpClientError::InvalidProxy(e.to_string()))?;
        builder = builder.proxy(proxy);
        tracing::info!("HTTP client initialized with proxy");
    } else {
        tracing::debug!("HTTP client initialized without proxy");
    }

    Ok(builder.build()?)
}
