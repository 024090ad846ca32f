//! The API versions collection.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{unwrap_envelope, GatewayClient};
use super::error::GatewayApiError;

/// One advertised API version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    pub status: String,
    pub updated: DateTime<Utc>,
}

/// Accessor for the versions the gateway reports.
pub struct Versions<'a> {
    client: &'a GatewayClient,
}

impl<'a> Versions<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// Fetch all advertised API versions.
    pub async fn list(&self) -> Result<Vec<Version>, GatewayApiError> {
        let body = self.client.request(Method::GET, "/versions", None).await?;
        let versions = unwrap_envelope(body, "versions")?;
        Ok(serde_json::from_value(versions)?)
    }
}
