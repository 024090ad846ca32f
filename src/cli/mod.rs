//! Command-line interface: clap definitions, dispatch, and error reporting.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};

use crate::api::GatewayApiError;
use commands::flavor_association::FlavorAssociationArgs;
use commands::image_association::ImageAssociationArgs;
use commands::network_association::NetworkAssociationArgs;
use commands::project_association::ProjectAssociationArgs;
use commands::subnet_association::SubnetAssociationArgs;
use commands::user::UserArgs;
use commands::version::VersionArgs;

#[derive(Parser)]
#[command(name = "fsgateway")]
#[command(about = "CLI client for the gateway service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Gateway endpoint, overriding config and FSGATEWAY_ENDPOINT
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Auth token, overriding config and FSGATEWAY_TOKEN
    #[arg(long, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// User management commands
    User(UserArgs),

    /// Project association commands
    ProjectAssociation(ProjectAssociationArgs),

    /// Flavor association commands
    FlavorAssociation(FlavorAssociationArgs),

    /// Image association commands
    ImageAssociation(ImageAssociationArgs),

    /// Network association commands
    NetworkAssociation(NetworkAssociationArgs),

    /// Subnet association commands
    SubnetAssociation(SubnetAssociationArgs),

    /// API version commands
    Version(VersionArgs),
}

/// Report a command failure and return the process exit code.
///
/// NotFound (unresolved reference or server 404) exits 1; transport,
/// validation, and config errors exit 2. Nothing is written to stdout on
/// failure so script consumers never see partial output.
pub fn handle_error(err: &anyhow::Error, json: bool) -> i32 {
    let not_found = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<GatewayApiError>())
        .any(GatewayApiError::is_not_found);

    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        use colored::Colorize;
        eprintln!("{} {err:#}", "ERROR:".red().bold());
    }

    if not_found {
        1
    } else {
        2
    }
}
