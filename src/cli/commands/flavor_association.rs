//! Flavor association commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::association::{self, AssociationAction};
use crate::api::{AssociationKind, GatewayClient};

#[derive(Args, Debug)]
pub struct FlavorAssociationArgs {
    #[command(subcommand)]
    pub command: FlavorAssociationCommands,
}

#[derive(Subcommand, Debug)]
pub enum FlavorAssociationCommands {
    /// Print a list of available flavor associations
    List,

    /// Show details about the given flavor association
    Show {
        /// Name or ID of the flavor association
        flavor_association: String,
    },

    /// Delete a specific flavor association
    Delete {
        /// Name or ID of the flavor association to delete
        flavor_association: String,
    },

    /// Create a new flavor association
    Create {
        /// Cascading flavor id of the new flavor association
        hflavor: String,
        /// Cascaded flavor id of the new flavor association
        flavor: String,
        /// Region name of the new flavor association
        region: String,
    },

    /// Update a flavor association
    Update {
        /// Id of the flavor association
        id: String,
        /// Cascading flavor id of the flavor association
        #[arg(long)]
        hflavor: Option<String>,
        /// Cascaded flavor id of the flavor association
        #[arg(long)]
        flavor: Option<String>,
        /// Region name of the flavor association
        #[arg(long)]
        region: Option<String>,
    },
}

impl FlavorAssociationCommands {
    pub fn into_action(self) -> AssociationAction {
        match self {
            Self::List => AssociationAction::List,
            Self::Show { flavor_association } => AssociationAction::Show {
                reference: flavor_association,
            },
            Self::Delete { flavor_association } => AssociationAction::Delete {
                reference: flavor_association,
            },
            Self::Create {
                hflavor,
                flavor,
                region,
            } => AssociationAction::Create {
                cascading: hflavor,
                cascaded: flavor,
                region,
                userid: None,
            },
            Self::Update {
                id,
                hflavor,
                flavor,
                region,
            } => AssociationAction::Update {
                id,
                cascading: hflavor,
                cascaded: flavor,
                region,
                userid: None,
            },
        }
    }
}

pub async fn execute(
    client: &GatewayClient,
    args: FlavorAssociationArgs,
    json: bool,
) -> Result<()> {
    association::run(
        client,
        AssociationKind::Flavor,
        args.command.into_action(),
        json,
    )
    .await
}
