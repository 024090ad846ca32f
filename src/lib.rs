//! fsgateway - CLI client for the gateway service.
//!
//! The gateway manages users and five kinds of cascading resource
//! associations (project, flavor, image, network, subnet). This crate maps
//! CLI arguments onto the gateway's REST collections and formats responses
//! for humans or scripts.
//!
//! # Architecture
//!
//! - **API layer** (`api`): reqwest-based client, one accessor per remote
//!   collection, shared name-or-ID resolution
//! - **CLI layer** (`cli`): clap command definitions, handlers, display
//! - **Config** (`config`): figment-based configuration loading

pub mod api;
pub mod cli;
pub mod config;

pub use api::{GatewayApiError, GatewayClient, GatewayClientConfig};
pub use config::{ConfigLoader, GatewayConfig};
