//! Name-or-ID resolution shared by every collection accessor.
//!
//! Users are addressed by name or ID interchangeably; associations only by
//! ID (they have no name), which falls out of the same policy since their
//! name view is always `None`.

use super::error::GatewayApiError;

/// View of a remote entity for reference resolution.
pub trait Resource {
    /// Server-assigned identifier.
    fn resource_id(&self) -> &str;

    /// Human-facing name, if this resource kind has one.
    fn resource_name(&self) -> Option<&str> {
        None
    }
}

/// Resolve `reference` against a fetched collection.
///
/// Policy: exact ID match wins; otherwise fall back to name match. Zero
/// candidates or an ambiguous name both surface as `NotFound` so callers
/// treat them like a server-side 404.
pub fn find_resource<T: Resource>(
    entity: &str,
    mut items: Vec<T>,
    reference: &str,
) -> Result<T, GatewayApiError> {
    if let Some(pos) = items.iter().position(|i| i.resource_id() == reference) {
        return Ok(items.swap_remove(pos));
    }

    let matches: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, i)| i.resource_name() == Some(reference))
        .map(|(pos, _)| pos)
        .collect();

    match matches.as_slice() {
        [] => Err(GatewayApiError::NotFound(format!(
            "No {entity} matching '{reference}' found"
        ))),
        [pos] => Ok(items.swap_remove(*pos)),
        many => Err(GatewayApiError::NotFound(format!(
            "Reference '{reference}' matches {} {entity}s; use the ID instead",
            many.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fake {
        id: &'static str,
        name: Option<&'static str>,
    }

    impl Resource for Fake {
        fn resource_id(&self) -> &str {
            self.id
        }
        fn resource_name(&self) -> Option<&str> {
            self.name
        }
    }

    fn fixtures() -> Vec<Fake> {
        vec![
            Fake { id: "u-1", name: Some("alice") },
            Fake { id: "u-2", name: Some("bob") },
            Fake { id: "u-3", name: Some("bob") },
        ]
    }

    #[test]
    fn exact_id_match_wins() {
        let found = find_resource("user", fixtures(), "u-2").unwrap();
        assert_eq!(found.id, "u-2");
    }

    #[test]
    fn falls_back_to_unique_name() {
        let found = find_resource("user", fixtures(), "alice").unwrap();
        assert_eq!(found.id, "u-1");
    }

    #[test]
    fn unmatched_reference_is_not_found() {
        let err = find_resource("user", fixtures(), "carol").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn ambiguous_name_is_not_found() {
        let err = find_resource("user", fixtures(), "bob").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("matches 2"));
    }

    #[test]
    fn id_match_beats_name_match() {
        let items = vec![
            Fake { id: "alice", name: Some("other") },
            Fake { id: "u-9", name: Some("alice") },
        ];
        let found = find_resource("user", items, "alice").unwrap();
        assert_eq!(found.id, "alice");
    }
}
