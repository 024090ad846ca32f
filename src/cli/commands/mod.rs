//! CLI command implementations.

pub mod association;
pub mod flavor_association;
pub mod image_association;
pub mod network_association;
pub mod project_association;
pub mod subnet_association;
pub mod user;
pub mod version;
