//! Bridge response records.

use serde::{Deserialize, Serialize};

/// Result of a state-mutating operation (`window-minimize`, `window-close`).
///
/// `error` is present only on failure; success serializes as a bare
/// `{"success": true}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// The defined failure for requests arriving while no window exists.
    pub fn unavailable() -> Self {
        Self {
            success: false,
            error: Some("Window not available".to_string()),
        }
    }
}

/// Snapshot of the live window, returned by `window-get-state`.
///
/// Serialized with camelCase keys; the wire sentinel for "no window
/// available" is JSON `null`, not a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub is_focused: bool,
}

// =============================================================================
// TESTS
// =============================================================================
