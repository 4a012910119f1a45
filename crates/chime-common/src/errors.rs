use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("manifest parse error: {0}")]
    ParseError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChimeError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_error_display() {
        let err = ManifestError::FileNotFound(PathBuf::from("/tmp/fonts.json"));
        assert_eq!(err.to_string(), "manifest file not found: /tmp/fonts.json");

        let err = ManifestError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "manifest parse error: unexpected token");
    }

    #[test]
    fn chime_error_from_manifest() {
        let manifest_err = ManifestError::ParseError("bad json".into());
        let chime_err: ChimeError = manifest_err.into();
        assert!(matches!(chime_err, ChimeError::Manifest(_)));
        assert!(chime_err.to_string().contains("bad json"));
    }

    #[test]
    fn chime_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let chime_err: ChimeError = io_err.into();
        assert!(matches!(chime_err, ChimeError::Io(_)));
        assert!(chime_err.to_string().contains("file missing"));
    }
}
