//! Image association commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::association::{self, AssociationAction};
use crate::api::{AssociationKind, GatewayClient};

#[derive(Args, Debug)]
pub struct ImageAssociationArgs {
    #[command(subcommand)]
    pub command: ImageAssociationCommands,
}

#[derive(Subcommand, Debug)]
pub enum ImageAssociationCommands {
    /// Print a list of available image associations
    List,

    /// Show details about the given image association
    Show {
        /// Name or ID of the image association
        image_association: String,
    },

    /// Delete a specific image association
    Delete {
        /// Name or ID of the image association to delete
        image_association: String,
    },

    /// Create a new image association
    Create {
        /// Cascading image id of the new image association
        himage: String,
        /// Cascaded image id of the new image association
        image: String,
        /// Region name of the new image association
        region: String,
    },

    /// Update an image association
    Update {
        /// Id of the image association
        id: String,
        /// Cascading image id of the image association
        #[arg(long)]
        himage: Option<String>,
        /// Cascaded image id of the image association
        #[arg(long)]
        image: Option<String>,
        /// Region name of the image association
        #[arg(long)]
        region: Option<String>,
    },
}

impl ImageAssociationCommands {
    pub fn into_action(self) -> AssociationAction {
        match self {
            Self::List => AssociationAction::List,
            Self::Show { image_association } => AssociationAction::Show {
                reference: image_association,
            },
            Self::Delete { image_association } => AssociationAction::Delete {
                reference: image_association,
            },
            Self::Create {
                himage,
                image,
                region,
            } => AssociationAction::Create {
                cascading: himage,
                cascaded: image,
                region,
                userid: None,
            },
            Self::Update {
                id,
                himage,
                image,
                region,
            } => AssociationAction::Update {
                id,
                cascading: himage,
                cascaded: image,
                region,
                userid: None,
            },
        }
    }
}

pub async fn execute(
    client: &GatewayClient,
    args: ImageAssociationArgs,
    json: bool,
) -> Result<()> {
    association::run(
        client,
        AssociationKind::Image,
        args.command.into_action(),
        json,
    )
    .await
}
