//! Project association commands.
//!
//! The only association kind that binds a user: create requires a userid
//! and update may change it.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::association::{self, AssociationAction};
use crate::api::{AssociationKind, GatewayClient};

#[derive(Args, Debug)]
pub struct ProjectAssociationArgs {
    #[command(subcommand)]
    pub command: ProjectAssociationCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProjectAssociationCommands {
    /// Print a list of available project associations
    List,

    /// Show details about the given project association
    Show {
        /// Name or ID of the project association
        project_association: String,
    },

    /// Delete a specific project association
    Delete {
        /// Name or ID of the project association to delete
        project_association: String,
    },

    /// Create a new project association
    Create {
        /// Cascading project id of the new project association
        hproject: String,
        /// Cascaded project id of the new project association
        project: String,
        /// Userid created by user create
        userid: String,
        /// Region name of the new project association
        region: String,
    },

    /// Update a project association
    Update {
        /// Id of the project association
        id: String,
        /// Cascading project id of the project association
        #[arg(long)]
        hproject: Option<String>,
        /// Cascaded project id of the project association
        #[arg(long)]
        project: Option<String>,
        /// Region name of the project association
        #[arg(long)]
        region: Option<String>,
        /// Userid created by user create
        #[arg(long)]
        userid: Option<String>,
    },
}

impl ProjectAssociationCommands {
    pub fn into_action(self) -> AssociationAction {
        match self {
            Self::List => AssociationAction::List,
            Self::Show { project_association } => AssociationAction::Show {
                reference: project_association,
            },
            Self::Delete { project_association } => AssociationAction::Delete {
                reference: project_association,
            },
            Self::Create {
                hproject,
                project,
                userid,
                region,
            } => AssociationAction::Create {
                cascading: hproject,
                cascaded: project,
                region,
                userid: Some(userid),
            },
            Self::Update {
                id,
                hproject,
                project,
                region,
                userid,
            } => AssociationAction::Update {
                id,
                cascading: hproject,
                cascaded: project,
                region,
                userid,
            },
        }
    }
}

pub async fn execute(
    client: &GatewayClient,
    args: ProjectAssociationArgs,
    json: bool,
) -> Result<()> {
    association::run(
        client,
        AssociationKind::Project,
        args.command.into_action(),
        json,
    )
    .await
}
