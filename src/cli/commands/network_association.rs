//! Network association commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::association::{self, AssociationAction};
use crate::api::{AssociationKind, GatewayClient};

#[derive(Args, Debug)]
pub struct NetworkAssociationArgs {
    #[command(subcommand)]
    pub command: NetworkAssociationCommands,
}

#[derive(Subcommand, Debug)]
pub enum NetworkAssociationCommands {
    /// Print a list of available network associations
    List,

    /// Show details about the given network association
    Show {
        /// Name or ID of the network association
        network_association: String,
    },

    /// Delete a specific network association
    Delete {
        /// Name or ID of the network association to delete
        network_association: String,
    },

    /// Create a new network association
    Create {
        /// Cascading network id of the new network association
        hnetwork: String,
        /// Cascaded network id of the new network association
        network: String,
        /// Region name of the new network association
        region: String,
    },

    /// Update a network association
    Update {
        /// Id of the network association
        id: String,
        /// Cascading network id of the network association
        #[arg(long)]
        hnetwork: Option<String>,
        /// Cascaded network id of the network association
        #[arg(long)]
        network: Option<String>,
        /// Region name of the network association
        #[arg(long)]
        region: Option<String>,
    },
}

impl NetworkAssociationCommands {
    pub fn into_action(self) -> AssociationAction {
        match self {
            Self::List => AssociationAction::List,
            Self::Show { network_association } => AssociationAction::Show {
                reference: network_association,
            },
            Self::Delete { network_association } => AssociationAction::Delete {
                reference: network_association,
            },
            Self::Create {
                hnetwork,
                network,
                region,
            } => AssociationAction::Create {
                cascading: hnetwork,
                cascaded: network,
                region,
                userid: None,
            },
            Self::Update {
                id,
                hnetwork,
                network,
                region,
            } => AssociationAction::Update {
                id,
                cascading: hnetwork,
                cascaded: network,
                region,
                userid: None,
            },
        }
    }
}

pub async fn execute(
    client: &GatewayClient,
    args: NetworkAssociationArgs,
    json: bool,
) -> Result<()> {
    association::run(
        client,
        AssociationKind::Network,
        args.command.into_action(),
        json,
    )
    .await
}
