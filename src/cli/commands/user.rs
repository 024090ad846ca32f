//! User commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::{GatewayClient, User, UserCreate, UserUpdate};
use crate::cli::display::{detail_table, output, user_table, CommandOutput};

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Print a list of available users
    List,

    /// Show details about the given user
    Show {
        /// Name or ID of the user
        user: String,
    },

    /// Delete a specific user
    Delete {
        /// Name or ID of the user to delete
        user: String,
    },

    /// Create a new user
    Create {
        /// Name of the new user
        name: String,
        /// Password of the new user
        password: String,
        /// Region name of the new user
        region: String,
        /// Description of the user (optional)
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a user
    Update {
        /// ID of the user
        id: String,
        /// Name of the user (optional)
        #[arg(long)]
        name: Option<String>,
        /// Password of the user (optional)
        #[arg(long = "pass")]
        password: Option<String>,
        /// Region name of the user (optional)
        #[arg(long)]
        region: Option<String>,
        /// Description of the user (optional)
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct UserListOutput {
    pub users: Vec<User>,
    pub total: usize,
}

impl UserListOutput {
    fn new(users: Vec<User>) -> Self {
        Self {
            total: users.len(),
            users,
        }
    }
}

impl CommandOutput for UserListOutput {
    fn to_human(&self) -> String {
        if self.users.is_empty() {
            return "No users found.".to_string();
        }
        user_table(&self.users)
    }
}

#[derive(Debug, Serialize)]
pub struct UserDetailOutput {
    pub user: User,
}

impl CommandOutput for UserDetailOutput {
    fn to_human(&self) -> String {
        let value = serde_json::to_value(&self.user).unwrap_or_default();
        detail_table(&value)
    }
}

pub async fn execute(client: &GatewayClient, args: UserArgs, json: bool) -> Result<()> {
    let users = client.users();

    match args.command {
        UserCommands::List => {
            let list = users.list().await.context("Failed to list users")?;
            output(&UserListOutput::new(list), json);
        }

        UserCommands::Show { user } => {
            let user = users.find(&user).await?;
            output(&UserDetailOutput { user }, json);
        }

        UserCommands::Delete { user } => {
            let user = users.find(&user).await?;
            users
                .delete(&user.id)
                .await
                .context("Failed to delete user")?;
            // Echo the deleted identity; the entity is gone server-side.
            output(&UserListOutput::new(vec![user]), json);
        }

        UserCommands::Create {
            name,
            password,
            region,
            description,
        } => {
            let created = users
                .create(UserCreate {
                    name,
                    password,
                    region,
                    description,
                })
                .await
                .context("Failed to create user")?;
            output(&UserListOutput::new(vec![created]), json);
        }

        UserCommands::Update {
            id,
            name,
            password,
            region,
            description,
        } => {
            let updated = users
                .update(
                    &id,
                    UserUpdate {
                        name,
                        password,
                        region,
                        description,
                    },
                )
                .await
                .context("Failed to update user")?;
            output(&UserListOutput::new(vec![updated]), json);
        }
    }

    Ok(())
}
