//! Local content serving via custom protocol.
//!
//! Registers a `chime://` custom protocol so the WebView can load the
//! bundled page and font manifest without a local HTTP server.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Serves local files from a base directory via the custom protocol.
///
/// When the WebView requests `chime://localhost/ui/index.html`, the
/// provider resolves it to `{base_dir}/ui/index.html` and returns the
/// file contents with the appropriate MIME type.
pub struct ContentProvider {
    /// Base directory for resolving asset paths.
    base_dir: PathBuf,
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let clean = path.trim_start_matches('/');
        let file_path = self.base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        // Canonicalize both paths to resolve symlinks, `..`, etc.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((mime_from_extension(&file_path), data))
    }

    /// The base directory for assets.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
