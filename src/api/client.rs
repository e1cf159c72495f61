use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use tokio::time::timeout;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::{UserApi, UserEnvelope};

/// [`UserApi`] backed by a JSON HTTP endpoint.
pub struct HttpUserApi {
    client: Client,
    url: Url,
    request_timeout: Duration,
    token_env_var: Option<String>,
}

impl HttpUserApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let raw = format!("{}{}", config.base_url.trim_end_matches('/'), config.user_path);
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            url,
            request_timeout: Duration::from_secs(config.timeout_seconds),
            token_env_var: config.token_env_var.clone(),
        })
    }

    /// The endpoint this client requests.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn bearer_token(&self) -> Result<Option<String>, ApiError> {
        let Some(env_var) = &self.token_env_var else {
            return Ok(None);
        };
        std::env::var(env_var)
            .map(Some)
            .map_err(|_| ApiError::MissingToken {
                env_var: env_var.clone(),
            })
    }

    async fn do_fetch(&self) -> Result<UserEnvelope, ApiError> {
        let mut builder = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json");

        if let Some(token) = self.bearer_token()? {
            builder = builder.bearer_auth(token);
        }

        // The URL is already part of the message, keep it out of the source.
        let response = builder.send().await.map_err(|e| ApiError::Request {
            url: self.url.to_string(),
            source: e.without_url(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        response
            .json::<UserEnvelope>()
            .await
            .map_err(|e| ApiError::Decode { source: e })
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn fetch_user(&self) -> Result<UserEnvelope, ApiError> {
        tracing::debug!(url = %self.url, "fetching current user");

        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

/// Pull a readable message out of an error response body.
///
/// Prefers an `error` string (or `error.message`) from a JSON body, then
/// the raw body, then the status reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            let error = value.get("error")?;
            error
                .as_str()
                .or_else(|| error.get("message").and_then(|m| m.as_str()))
                .map(str::to_string)
        });

    if let Some(message) = from_json {
        return message;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
