pub mod errors;
pub mod manifest;

pub use errors::{ChimeError, ManifestError};
pub use manifest::FontEntry;

pub type Result<T> = std::result::Result<T, ChimeError>;
