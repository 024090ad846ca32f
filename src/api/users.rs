//! The users collection accessor and its wire models.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::client::{unwrap_envelope, GatewayClient};
use super::error::GatewayApiError;
use super::find::{find_resource, Resource};

/// A gateway user as returned by the server.
///
/// Unknown keys (including `links`) are retained in `extra` so detail views
/// can show everything the server sent, minus link noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for User {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn resource_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Fields for `user create`. All but the description are required.
#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub name: String,
    pub password: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields for `user update`. `None` means "leave unchanged": the key is
/// omitted from the request body entirely, never sent as null.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Accessor for the remote users collection.
pub struct Users<'a> {
    client: &'a GatewayClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// Fetch all users.
    pub async fn list(&self) -> Result<Vec<User>, GatewayApiError> {
        let body = self.client.request(Method::GET, "/users", None).await?;
        let users = unwrap_envelope(body, "users")?;
        Ok(serde_json::from_value(users)?)
    }

    /// Resolve a name-or-ID reference to a single user.
    pub async fn find(&self, reference: &str) -> Result<User, GatewayApiError> {
        let users = self.list().await?;
        find_resource("user", users, reference)
    }

    /// Create a user and return the server's view of it.
    pub async fn create(&self, fields: UserCreate) -> Result<User, GatewayApiError> {
        let body = json!({ "user": fields });
        let response = self
            .client
            .request(Method::POST, "/users", Some(&body))
            .await?;
        let user = unwrap_envelope(response, "user")?;
        Ok(serde_json::from_value(user)?)
    }

    /// Update a user by ID, forwarding only the supplied fields.
    pub async fn update(&self, id: &str, fields: UserUpdate) -> Result<User, GatewayApiError> {
        let body = json!({ "user": fields });
        let response = self
            .client
            .request(Method::PUT, &format!("/users/{id}"), Some(&body))
            .await?;
        let user = unwrap_envelope(response, "user")?;
        Ok(serde_json::from_value(user)?)
    }

    /// Delete a user by ID.
    pub async fn delete(&self, id: &str) -> Result<(), GatewayApiError> {
        self.client
            .request_empty(Method::DELETE, &format!("/users/{id}"))
            .await
    }
}
