//! Startup check of the font manifest.
//!
//! The manifest belongs to the display surface; the host only parses it
//! so a malformed file shows up in the host log instead of silently
//! producing the page's error placeholder with no diagnosis.

use std::path::Path;

use chime_common::manifest::{duplicate_names, parse_manifest, FontEntry};
use chime_common::{ManifestError, Result};

/// Load the manifest and warn about duplicate names. Failures are
/// inconsequential to the host, so callers log and continue.
pub(super) fn check_manifest(path: &Path) -> Result<Vec<FontEntry>> {
    if !path.is_file() {
        return Err(ManifestError::FileNotFound(path.to_path_buf()).into());
    }

    let raw = std::fs::read_to_string(path)?;
    let entries = parse_manifest(&raw)?;

    for name in duplicate_names(&entries) {
        tracing::warn!(name, "font manifest: duplicate name, later entries unselectable");
    }

    Ok(entries)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chime_common::ChimeError;
    use std::io::Write;

    fn manifest_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn valid_manifest_loads() {
        let file = manifest_file(r#"[{"name": "Menlo"}, {"name": "Georgia"}]"#);
        let entries = check_manifest(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Menlo");
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = check_manifest(Path::new("/nonexistent/fonts.json")).unwrap_err();
        assert!(matches!(
            err,
            ChimeError::Manifest(ManifestError::FileNotFound(_))
        ));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let file = manifest_file("[{broken");
        let err = check_manifest(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ChimeError::Manifest(ManifestError::ParseError(_))
        ));
    }

    #[test]
    fn duplicates_still_load() {
        // Duplicates are a warning, not an error: the page can still render.
        let file = manifest_file(r#"[{"name": "Menlo"}, {"name": "Menlo"}]"#);
        let entries = check_manifest(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn bundled_manifest_is_valid_and_unique() {
        let bundled = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .parent()
            .unwrap()
            .join("assets/fonts/fonts.json");
        let entries = check_manifest(&bundled).expect("bundled manifest must parse");
        assert!(!entries.is_empty(), "bundled manifest must offer fonts");
        assert!(
            duplicate_names(&entries).is_empty(),
            "bundled manifest names must be unique"
        );
    }
}
