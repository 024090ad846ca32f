//! Association collection accessors.
//!
//! An association links a cascading (parent) resource identifier to a
//! cascaded (child) identifier within a region. The five kinds share one
//! accessor implementation; the kind is an explicit, immutable field on the
//! accessor rather than shared mutable state, so ordering mistakes
//! ("set the kind before calling") cannot happen.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::client::{unwrap_envelope, GatewayClient};
use super::error::GatewayApiError;
use super::find::{find_resource, Resource};

/// The five association kinds the gateway manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    Project,
    Flavor,
    Image,
    Network,
    Subnet,
}

impl AssociationKind {
    pub const ALL: [AssociationKind; 5] = [
        AssociationKind::Project,
        AssociationKind::Flavor,
        AssociationKind::Image,
        AssociationKind::Network,
        AssociationKind::Subnet,
    ];

    /// Lowercase kind name as used in URLs and wire fields.
    pub fn as_str(self) -> &'static str {
        match self {
            AssociationKind::Project => "project",
            AssociationKind::Flavor => "flavor",
            AssociationKind::Image => "image",
            AssociationKind::Network => "network",
            AssociationKind::Subnet => "subnet",
        }
    }

    /// Capitalized kind name for table headers.
    pub fn label(self) -> &'static str {
        match self {
            AssociationKind::Project => "Project",
            AssociationKind::Flavor => "Flavor",
            AssociationKind::Image => "Image",
            AssociationKind::Network => "Network",
            AssociationKind::Subnet => "Subnet",
        }
    }

    /// Wire field holding the cascading (parent) identifier: `h<kind>`.
    pub fn cascading_field(self) -> String {
        format!("h{}", self.as_str())
    }

    /// Wire field holding the cascaded (child) identifier: `<kind>`.
    pub fn cascaded_field(self) -> &'static str {
        self.as_str()
    }

    /// Only project associations carry a user binding.
    pub fn has_userid(self) -> bool {
        matches!(self, AssociationKind::Project)
    }
}

impl std::fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An association as returned by the server.
///
/// The cascading/cascaded pair lives under kind-keyed wire names
/// (`hproject`/`project`, `hflavor`/`flavor`, ...), so those land in the
/// flattened `extra` map and are read back through [`Association::cascading`]
/// and [`Association::cascaded`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Association {
    pub id: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Association {
    /// The cascading (parent) identifier for the given kind, or "" if the
    /// server omitted it.
    pub fn cascading(&self, kind: AssociationKind) -> &str {
        self.extra
            .get(&kind.cascading_field())
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The cascaded (child) identifier for the given kind.
    pub fn cascaded(&self, kind: AssociationKind) -> &str {
        self.extra
            .get(kind.cascaded_field())
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl Resource for Association {
    fn resource_id(&self) -> &str {
        &self.id
    }
}

/// Fields for creating an association. `userid` is required for project
/// associations and absent for every other kind; the accessor enforces the
/// field set by construction.
#[derive(Debug, Clone)]
pub struct AssociationCreate {
    pub cascading: String,
    pub cascaded: String,
    pub region: String,
    pub userid: Option<String>,
}

/// Fields for updating an association. `None` means "leave unchanged" and
/// is omitted from the request body.
#[derive(Debug, Clone, Default)]
pub struct AssociationUpdate {
    pub cascading: Option<String>,
    pub cascaded: Option<String>,
    pub region: Option<String>,
    pub userid: Option<String>,
}

/// Accessor for one kind of association collection.
pub struct Associations<'a> {
    client: &'a GatewayClient,
    kind: AssociationKind,
}

impl<'a> Associations<'a> {
    pub(crate) fn new(client: &'a GatewayClient, kind: AssociationKind) -> Self {
        Self { client, kind }
    }

    fn collection_path(&self) -> String {
        format!("/associations/{}", self.kind)
    }

    fn entity_path(&self, id: &str) -> String {
        format!("/associations/{}/{id}", self.kind)
    }

    /// Fetch all associations of this kind.
    pub async fn list(&self) -> Result<Vec<Association>, GatewayApiError> {
        let body = self
            .client
            .request(Method::GET, &self.collection_path(), None)
            .await?;
        let associations = unwrap_envelope(body, "associations")?;
        Ok(serde_json::from_value(associations)?)
    }

    /// Resolve an ID reference to a single association.
    pub async fn find(&self, reference: &str) -> Result<Association, GatewayApiError> {
        let associations = self.list().await?;
        find_resource(
            &format!("{}_association", self.kind),
            associations,
            reference,
        )
    }

    /// Create an association with exactly this kind's field set.
    pub async fn create(
        &self,
        fields: AssociationCreate,
    ) -> Result<Association, GatewayApiError> {
        let mut body = Map::new();
        body.insert(self.kind.cascading_field(), Value::String(fields.cascading));
        body.insert(
            self.kind.cascaded_field().to_string(),
            Value::String(fields.cascaded),
        );
        body.insert("region".to_string(), Value::String(fields.region));
        if self.kind.has_userid() {
            if let Some(userid) = fields.userid {
                body.insert("userid".to_string(), Value::String(userid));
            }
        }

        let body = json!({ "association": body });
        let response = self
            .client
            .request(Method::POST, &self.collection_path(), Some(&body))
            .await?;
        let association = unwrap_envelope(response, "association")?;
        Ok(serde_json::from_value(association)?)
    }

    /// Update an association by ID, forwarding only the supplied fields.
    pub async fn update(
        &self,
        id: &str,
        fields: AssociationUpdate,
    ) -> Result<Association, GatewayApiError> {
        let mut body = Map::new();
        if let Some(cascading) = fields.cascading {
            body.insert(self.kind.cascading_field(), Value::String(cascading));
        }
        if let Some(cascaded) = fields.cascaded {
            body.insert(
                self.kind.cascaded_field().to_string(),
                Value::String(cascaded),
            );
        }
        if let Some(region) = fields.region {
            body.insert("region".to_string(), Value::String(region));
        }
        if self.kind.has_userid() {
            if let Some(userid) = fields.userid {
                body.insert("userid".to_string(), Value::String(userid));
            }
        }

        let body = json!({ "association": body });
        let response = self
            .client
            .request(Method::PUT, &self.entity_path(id), Some(&body))
            .await?;
        let association = unwrap_envelope(response, "association")?;
        Ok(serde_json::from_value(association)?)
    }

    /// Delete an association by ID.
    pub async fn delete(&self, id: &str) -> Result<(), GatewayApiError> {
        self.client
            .request_empty(Method::DELETE, &self.entity_path(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_wire_fields() {
        assert_eq!(AssociationKind::Flavor.cascading_field(), "hflavor");
        assert_eq!(AssociationKind::Flavor.cascaded_field(), "flavor");
        assert_eq!(AssociationKind::Subnet.cascading_field(), "hsubnet");
    }

    #[test]
    fn only_project_carries_userid() {
        for kind in AssociationKind::ALL {
            assert_eq!(kind.has_userid(), kind == AssociationKind::Project);
        }
    }

    #[test]
    fn cascading_pair_reads_kind_keyed_fields() {
        let association: Association = serde_json::from_value(serde_json::json!({
            "id": "a-1",
            "region": "region-one",
            "himage": "parent-img",
            "image": "child-img",
        }))
        .unwrap();
        assert_eq!(association.cascading(AssociationKind::Image), "parent-img");
        assert_eq!(association.cascaded(AssociationKind::Image), "child-img");
        assert_eq!(association.cascading(AssociationKind::Flavor), "");
    }
}
