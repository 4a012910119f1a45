//! Font manifest records consumed by the display surface.
//!
//! The manifest is a JSON sequence of `{ "name": "..." }` records served
//! to the page as a static resource. The host only parses it to surface
//! problems (bad JSON, duplicate names) in its own log at startup.

use serde::{Deserialize, Serialize};

use crate::errors::ManifestError;

/// One selectable font in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    pub name: String,
}

/// Parse a font manifest from raw JSON.
pub fn parse_manifest(raw: &str) -> Result<Vec<FontEntry>, ManifestError> {
    serde_json::from_str(raw).map_err(|e| ManifestError::ParseError(e.to_string()))
}

/// Names that appear more than once. The picker keys options by name, so
/// duplicates make later entries unselectable.
pub fn duplicate_names(entries: &[FontEntry]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes = Vec::new();
    for entry in entries {
        if !seen.insert(entry.name.as_str()) && !dupes.contains(&entry.name.as_str()) {
            dupes.push(entry.name.as_str());
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_records() {
        let entries = parse_manifest(r#"[{"name": "Menlo"}, {"name": "Georgia"}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Menlo");
        assert_eq!(entries[1].name, "Georgia");
    }

    #[test]
    fn empty_manifest_is_valid() {
        let entries = parse_manifest("[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_manifest("[{name: Menlo}]").unwrap_err();
        assert!(matches!(err, ManifestError::ParseError(_)));
    }

    #[test]
    fn rejects_missing_name_field() {
        let err = parse_manifest(r#"[{"family": "Menlo"}]"#).unwrap_err();
        assert!(matches!(err, ManifestError::ParseError(_)));
    }

    #[test]
    fn duplicate_names_found_once_each() {
        let entries = parse_manifest(
            r#"[{"name": "Menlo"}, {"name": "Georgia"}, {"name": "Menlo"}, {"name": "Menlo"}]"#,
        )
        .unwrap();
        assert_eq!(duplicate_names(&entries), vec!["Menlo"]);
    }

    #[test]
    fn unique_names_report_no_duplicates() {
        let entries = parse_manifest(r#"[{"name": "Menlo"}, {"name": "Georgia"}]"#).unwrap();
        assert!(duplicate_names(&entries).is_empty());
    }
}
