//! Generic association command handling.
//!
//! The five kind-specific command modules parse their own argument shapes
//! (flag names differ per kind) and lower into [`AssociationAction`]; one
//! handler here drives the accessor and formats the result.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::api::{
    Association, AssociationCreate, AssociationKind, AssociationUpdate, GatewayClient,
};
use crate::cli::display::{association_table, detail_table, output, CommandOutput};

/// One parsed association command, independent of kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociationAction {
    List,
    Show {
        reference: String,
    },
    Delete {
        reference: String,
    },
    Create {
        cascading: String,
        cascaded: String,
        region: String,
        userid: Option<String>,
    },
    Update {
        id: String,
        cascading: Option<String>,
        cascaded: Option<String>,
        region: Option<String>,
        userid: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct AssociationListOutput {
    #[serde(skip)]
    kind: AssociationKind,
    pub associations: Vec<Association>,
    pub total: usize,
}

impl AssociationListOutput {
    fn new(kind: AssociationKind, associations: Vec<Association>) -> Self {
        Self {
            kind,
            total: associations.len(),
            associations,
        }
    }
}

impl CommandOutput for AssociationListOutput {
    fn to_human(&self) -> String {
        if self.associations.is_empty() {
            return format!("No {} associations found.", self.kind);
        }
        association_table(self.kind, &self.associations)
    }
}

#[derive(Debug, Serialize)]
pub struct AssociationDetailOutput {
    pub association: Association,
}

impl CommandOutput for AssociationDetailOutput {
    fn to_human(&self) -> String {
        let value = serde_json::to_value(&self.association).unwrap_or_default();
        detail_table(&value)
    }
}

/// Run one association command against the accessor for `kind`.
pub async fn run(
    client: &GatewayClient,
    kind: AssociationKind,
    action: AssociationAction,
    json: bool,
) -> Result<()> {
    let associations = client.associations(kind);

    match action {
        AssociationAction::List => {
            let list = associations
                .list()
                .await
                .with_context(|| format!("Failed to list {kind} associations"))?;
            output(&AssociationListOutput::new(kind, list), json);
        }

        AssociationAction::Show { reference } => {
            let association = associations.find(&reference).await?;
            output(&AssociationDetailOutput { association }, json);
        }

        AssociationAction::Delete { reference } => {
            let association = associations.find(&reference).await?;
            associations
                .delete(&association.id)
                .await
                .with_context(|| format!("Failed to delete {kind} association"))?;
            // Echo the deleted identity; the entity is gone server-side.
            output(&AssociationListOutput::new(kind, vec![association]), json);
        }

        AssociationAction::Create {
            cascading,
            cascaded,
            region,
            userid,
        } => {
            let created = associations
                .create(AssociationCreate {
                    cascading,
                    cascaded,
                    region,
                    userid,
                })
                .await
                .with_context(|| format!("Failed to create {kind} association"))?;
            output(&AssociationListOutput::new(kind, vec![created]), json);
        }

        AssociationAction::Update {
            id,
            cascading,
            cascaded,
            region,
            userid,
        } => {
            let updated = associations
                .update(
                    &id,
                    AssociationUpdate {
                        cascading,
                        cascaded,
                        region,
                        userid,
                    },
                )
                .await
                .with_context(|| format!("Failed to update {kind} association"))?;
            output(&AssociationListOutput::new(kind, vec![updated]), json);
        }
    }

    Ok(())
}
