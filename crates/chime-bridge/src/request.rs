//! Typed bridge requests from the display surface.

use serde::{Deserialize, Serialize};

// =============================================================================
// REQUEST ALLOWLIST
// =============================================================================

/// Allowed request kinds from the display surface.
///
/// Any request with a `kind` not in this list is rejected and logged.
pub const ALLOWED_REQUEST_KINDS: &[&str] =
    &["window-minimize", "window-close", "window-get-state"];

/// Check whether a request kind is in the allowlist.
pub fn is_request_allowed(kind: &str) -> bool {
    ALLOWED_REQUEST_KINDS.contains(&kind)
}

// =============================================================================
// REQUESTS
// =============================================================================

/// The closed set of privileged operations the display surface may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOp {
    /// Minimize the window. Side effect only; returns an action record.
    Minimize,
    /// Request window destruction. Fire-and-forget; returns an action record.
    Close,
    /// Read the window state. Pure; returns a state record or null.
    GetState,
}

impl BridgeOp {
    /// The wire name carried in a request's `kind` field.
    pub const fn wire_name(self) -> &'static str {
        match self {
            BridgeOp::Minimize => "window-minimize",
            BridgeOp::Close => "window-close",
            BridgeOp::GetState => "window-get-state",
        }
    }

    /// Map a wire name back to an operation. `None` for anything outside
    /// the closed set.
    pub fn from_wire(kind: &str) -> Option<Self> {
        match kind {
            "window-minimize" => Some(BridgeOp::Minimize),
            "window-close" => Some(BridgeOp::Close),
            "window-get-state" => Some(BridgeOp::GetState),
            _ => None,
        }
    }
}

/// A single request round trip: `id` correlates the response back to the
/// page-side pending promise, `kind` names the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub id: u64,
    pub kind: String,
}

impl BridgeRequest {
    /// Parse a request from a raw JSON string (the IPC postMessage body).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Resolve the wire kind to an operation, if allow-listed.
    pub fn op(&self) -> Option<BridgeOp> {
        BridgeOp::from_wire(&self.kind)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_kind_allowed_valid() {
        assert!(is_request_allowed("window-minimize"));
        assert!(is_request_allowed("window-close"));
        assert!(is_request_allowed("window-get-state"));
    }

    #[test]
    fn request_kind_rejected_unknown() {
        assert!(!is_request_allowed("window-maximize"));
        assert!(!is_request_allowed("eval"));
        assert!(!is_request_allowed(""));
        assert!(!is_request_allowed("window-close-extra"));
        assert!(!is_request_allowed("WINDOW-CLOSE")); // case-sensitive
    }

    #[test]
    fn request_kind_rejected_injection_attempts() {
        assert!(!is_request_allowed("window-close\0"));
        assert!(!is_request_allowed("window-close; rm -rf /"));
        assert!(!is_request_allowed("<script>alert(1)</script>"));
    }

    #[test]
    fn allowlist_matches_closed_enum() {
        assert_eq!(ALLOWED_REQUEST_KINDS.len(), 3);
        for op in [BridgeOp::Minimize, BridgeOp::Close, BridgeOp::GetState] {
            assert!(ALLOWED_REQUEST_KINDS.contains(&op.wire_name()));
            assert_eq!(BridgeOp::from_wire(op.wire_name()), Some(op));
        }
    }

    #[test]
    fn from_wire_rejects_unknown() {
        assert_eq!(BridgeOp::from_wire("window-restore"), None);
        assert_eq!(BridgeOp::from_wire(""), None);
    }

    #[test]
    fn parses_wire_request() {
        let req = BridgeRequest::from_json(r#"{"id": 7, "kind": "window-minimize"}"#).unwrap();
        assert_eq!(req.id, 7);
        assert_eq!(req.op(), Some(BridgeOp::Minimize));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(BridgeRequest::from_json("not json").is_none());
        assert!(BridgeRequest::from_json(r#"{"id": "seven", "kind": "window-close"}"#).is_none());
        assert!(BridgeRequest::from_json(r#"{"kind": "window-close"}"#).is_none());
    }

    #[test]
    fn parse_keeps_unknown_kind_for_logging() {
        // Parsing succeeds so the rejected kind can be logged; op() denies it.
        let req = BridgeRequest::from_json(r#"{"id": 1, "kind": "window-maximize"}"#).unwrap();
        assert_eq!(req.op(), None);
    }
}
