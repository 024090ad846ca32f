//! Subnet association commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::association::{self, AssociationAction};
use crate::api::{AssociationKind, GatewayClient};

#[derive(Args, Debug)]
pub struct SubnetAssociationArgs {
    #[command(subcommand)]
    pub command: SubnetAssociationCommands,
}

#[derive(Subcommand, Debug)]
pub enum SubnetAssociationCommands {
    /// Print a list of available subnet associations
    List,

    /// Show details about the given subnet association
    Show {
        /// Name or ID of the subnet association
        subnet_association: String,
    },

    /// Delete a specific subnet association
    Delete {
        /// Name or ID of the subnet association to delete
        subnet_association: String,
    },

    /// Create a new subnet association
    Create {
        /// Cascading subnet id of the new subnet association
        hsubnet: String,
        /// Cascaded subnet id of the new subnet association
        subnet: String,
        /// Region name of the new subnet association
        region: String,
    },

    /// Update a subnet association
    Update {
        /// Id of the subnet association
        id: String,
        /// Cascading subnet id of the subnet association
        #[arg(long)]
        hsubnet: Option<String>,
        /// Cascaded subnet id of the subnet association
        #[arg(long)]
        subnet: Option<String>,
        /// Region name of the subnet association
        #[arg(long)]
        region: Option<String>,
    },
}

impl SubnetAssociationCommands {
    pub fn into_action(self) -> AssociationAction {
        match self {
            Self::List => AssociationAction::List,
            Self::Show { subnet_association } => AssociationAction::Show {
                reference: subnet_association,
            },
            Self::Delete { subnet_association } => AssociationAction::Delete {
                reference: subnet_association,
            },
            Self::Create {
                hsubnet,
                subnet,
                region,
            } => AssociationAction::Create {
                cascading: hsubnet,
                cascaded: subnet,
                region,
                userid: None,
            },
            Self::Update {
                id,
                hsubnet,
                subnet,
                region,
            } => AssociationAction::Update {
                id,
                cascading: hsubnet,
                cascaded: subnet,
                region,
                userid: None,
            },
        }
    }
}

pub async fn execute(
    client: &GatewayClient,
    args: SubnetAssociationArgs,
    json: bool,
) -> Result<()> {
    association::run(
        client,
        AssociationKind::Subnet,
        args.command.into_action(),
        json,
    )
    .await
}
