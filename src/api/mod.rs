//! Gateway API client layer: HTTP transport, collection accessors, and the
//! shared name-or-ID resolution helper.

pub mod associations;
pub mod client;
pub mod error;
pub mod find;
pub mod users;
pub mod versions;

pub use associations::{
    Association, AssociationCreate, AssociationKind, AssociationUpdate, Associations,
};
pub use client::{GatewayClient, GatewayClientConfig};
pub use error::GatewayApiError;
pub use find::{find_resource, Resource};
pub use users::{User, UserCreate, UserUpdate, Users};
pub use versions::{Version, Versions};
