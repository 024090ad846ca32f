use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client as ReqwestClient, Method, Response};
use serde_json::Value;
use tracing::debug;

use super::associations::{AssociationKind, Associations};
use super::error::GatewayApiError;
use super::users::Users;
use super::versions::Versions;
use crate::config::GatewayConfig;

/// Configuration for the gateway HTTP client.
#[derive(Debug, Clone)]
pub struct GatewayClientConfig {
    /// Base URL of the gateway API, e.g. `http://gateway:8776/v1`
    pub endpoint: String,
    /// Auth token sent as `X-Auth-Token`, if any
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GatewayClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8776/v1".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

impl From<&GatewayConfig> for GatewayClientConfig {
    fn from(config: &GatewayConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// HTTP client for the gateway API.
///
/// One request/response turn per operation: no retries, no rate limiting,
/// no local state. Connection pooling comes from the shared reqwest client.
pub struct GatewayClient {
    http_client: ReqwestClient,
    endpoint: String,
    token: Option<String>,
}

impl GatewayClient {
    /// Build a client from configuration.
    pub fn new(config: GatewayClientConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    /// Accessor for the users collection.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Accessor for one kind of association collection.
    ///
    /// The kind is fixed at construction; there is no shared mutable
    /// selector, so two accessors for different kinds never interfere.
    pub fn associations(&self, kind: AssociationKind) -> Associations<'_> {
        Associations::new(self, kind)
    }

    /// Accessor for the API versions collection.
    pub fn versions(&self) -> Versions<'_> {
        Versions::new(self)
    }

    /// Issue a request against `path` (relative to the endpoint), with an
    /// optional JSON body, and parse the JSON response.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, GatewayApiError> {
        let url = format!("{}{}", self.endpoint, path);
        debug!(method = %method, %url, "gateway request");

        let mut request = self.http_client.request(method.clone(), &url);
        if let Some(token) = &self.token {
            request = request.header("X-Auth-Token", token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(method = %method, %url, status = %status, "gateway response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayApiError::from_status(status, body));
        }

        Self::parse_body(response).await
    }

    /// Issue a request that returns no meaningful body (DELETE).
    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
    ) -> Result<(), GatewayApiError> {
        let url = format!("{}{}", self.endpoint, path);
        debug!(method = %method, %url, "gateway request");

        let mut request = self.http_client.request(method.clone(), &url);
        if let Some(token) = &self.token {
            request = request.header("X-Auth-Token", token);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(method = %method, %url, status = %status, "gateway response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayApiError::from_status(status, body));
        }
        Ok(())
    }

    async fn parse_body(response: Response) -> Result<Value, GatewayApiError> {
        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Pull a named envelope key out of a gateway response object.
///
/// The gateway wraps every payload: `{"users": [...]}`, `{"association":
/// {...}}`. A missing key is a contract violation, not a NotFound.
pub(crate) fn unwrap_envelope(mut value: Value, key: &str) -> Result<Value, GatewayApiError> {
    match value.get_mut(key) {
        Some(inner) => Ok(inner.take()),
        None => Err(GatewayApiError::UnexpectedResponse(format!(
            "missing '{key}' key in response"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_envelope_extracts_inner_value() {
        let value = json!({"user": {"id": "u-1"}});
        let inner = unwrap_envelope(value, "user").unwrap();
        assert_eq!(inner["id"], "u-1");
    }

    #[test]
    fn unwrap_envelope_rejects_missing_key() {
        let value = json!({"something_else": []});
        let err = unwrap_envelope(value, "users").unwrap_err();
        assert!(matches!(err, GatewayApiError::UnexpectedResponse(_)));
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let client = GatewayClient::new(GatewayClientConfig {
            endpoint: "http://gw:8776/v1/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.endpoint, "http://gw:8776/v1");
    }
}
