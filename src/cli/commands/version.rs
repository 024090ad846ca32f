//! API version commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::{GatewayClient, Version};
use crate::cli::display::{output, version_table, CommandOutput};

#[derive(Args, Debug)]
pub struct VersionArgs {
    #[command(subcommand)]
    pub command: VersionCommands,
}

#[derive(Subcommand, Debug)]
pub enum VersionCommands {
    /// List all API versions
    List,
}

#[derive(Debug, Serialize)]
pub struct VersionListOutput {
    pub versions: Vec<Version>,
}

impl CommandOutput for VersionListOutput {
    fn to_human(&self) -> String {
        if self.versions.is_empty() {
            return "No API versions reported.".to_string();
        }
        version_table(&self.versions)
    }
}

pub async fn execute(client: &GatewayClient, args: VersionArgs, json: bool) -> Result<()> {
    match args.command {
        VersionCommands::List => {
            let versions = client
                .versions()
                .list()
                .await
                .context("Failed to list API versions")?;
            output(&VersionListOutput { versions }, json);
        }
    }

    Ok(())
}
