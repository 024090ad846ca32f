//! List-table builders for the gateway resources.
//!
//! Column sets and ordering are part of the CLI contract: scripts parse
//! this output, so headers are emitted exactly as documented and never
//! reordered.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::api::{Association, AssociationKind, User, Version};

/// Create a list table with bold headers and no border noise.
pub fn list_table(headers: &[String]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}

/// Headers for a user list: `ID, Name, Region, Description`.
pub fn user_headers() -> Vec<String> {
    ["ID", "Name", "Region", "Description"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Format users as a list table.
pub fn user_table(users: &[User]) -> String {
    let mut table = list_table(&user_headers());
    for user in users {
        table.add_row(vec![
            Cell::new(&user.id),
            Cell::new(&user.name),
            Cell::new(&user.region),
            Cell::new(user.description.as_deref().unwrap_or("-")),
        ]);
    }
    table.to_string()
}

/// Headers for an association list: `ID, H<Kind>, <Kind>, Region`, plus
/// `Userid` for project associations only.
pub fn association_headers(kind: AssociationKind) -> Vec<String> {
    let mut headers = vec![
        "ID".to_string(),
        format!("H{}", kind.label()),
        kind.label().to_string(),
        "Region".to_string(),
    ];
    if kind.has_userid() {
        headers.push("Userid".to_string());
    }
    headers
}

/// Format associations of one kind as a list table.
pub fn association_table(kind: AssociationKind, associations: &[Association]) -> String {
    let mut table = list_table(&association_headers(kind));
    for association in associations {
        let mut row = vec![
            Cell::new(&association.id),
            Cell::new(association.cascading(kind)),
            Cell::new(association.cascaded(kind)),
            Cell::new(&association.region),
        ];
        if kind.has_userid() {
            row.push(Cell::new(association.userid.as_deref().unwrap_or("-")));
        }
        table.add_row(row);
    }
    table.to_string()
}

/// Format API versions as a list table: `Id, Status, Updated`.
pub fn version_table(versions: &[Version]) -> String {
    let headers: Vec<String> = ["Id", "Status", "Updated"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut table = list_table(&headers);
    for version in versions {
        table.add_row(vec![
            Cell::new(&version.id),
            Cell::new(&version.status),
            Cell::new(version.updated.to_rfc3339()),
        ]);
    }
    table.to_string()
}
