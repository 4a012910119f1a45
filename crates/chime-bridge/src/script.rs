//! JavaScript glue injected into the display surface.
//!
//! The initialization script installs the single namespaced API object
//! (`window.chimeAPI`) before any page script runs. The resolve script is
//! evaluated by the host to settle one pending promise with its payload.

/// Template for the bridge setup script. The two markers are replaced
/// with JSON-encoded values so arbitrary version/platform strings cannot
/// break out of the script.
const INIT_SCRIPT_TEMPLATE: &str = r#"
(function() {
    var pending = {};
    var next = 1;
    window.__chime = {
        _resolve: function(id, payload) {
            var resolve = pending[id];
            if (resolve) {
                delete pending[id];
                resolve(payload);
            }
        }
    };
    function invoke(kind, fallback) {
        return new Promise(function(resolve) {
            var id = next++;
            try {
                pending[id] = resolve;
                window.ipc.postMessage(JSON.stringify({ id: id, kind: kind }));
            } catch (err) {
                delete pending[id];
                console.error('Bridge call failed:', kind, err);
                resolve(fallback);
            }
        });
    }
    window.chimeAPI = {
        minimizeWindow: function() {
            return invoke('window-minimize', { success: false, error: 'bridge unavailable' });
        },
        closeWindow: function() {
            return invoke('window-close', { success: false, error: 'bridge unavailable' });
        },
        getWindowState: function() {
            return invoke('window-get-state', null);
        },
        version: __CHIME_VERSION__,
        platform: __CHIME_PLATFORM__
    };
})();
"#;

/// Generate the initialization script for a webview.
///
/// `version` is the application version string, `platform` the host
/// platform identifier (`std::env::consts::OS`). Both are exposed as
/// read-only informational fields on the API object.
pub fn init_script(version: &str, platform: &str) -> String {
    INIT_SCRIPT_TEMPLATE
        .replace("__CHIME_VERSION__", &encode_js_string(version))
        .replace("__CHIME_PLATFORM__", &encode_js_string(platform))
}

/// Generate the script that settles the pending promise for request `id`.
pub fn js_resolve(id: u64, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!("window.__chime && window.__chime._resolve({id}, {payload_json});")
}

/// JSON-encode a string for safe embedding as a JS string literal.
fn encode_js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"unknown\"".to_string())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ALLOWED_REQUEST_KINDS;
    use crate::response::{ActionResult, WindowState};

    #[test]
    fn init_script_exposes_full_surface() {
        let script = init_script("0.1.0", "macos");
        assert!(script.contains("window.chimeAPI"));
        assert!(script.contains("minimizeWindow"));
        assert!(script.contains("closeWindow"));
        assert!(script.contains("getWindowState"));
        assert!(script.contains("version: \"0.1.0\""));
        assert!(script.contains("platform: \"macos\""));
    }

    #[test]
    fn init_script_uses_wire_names() {
        let script = init_script("0.1.0", "linux");
        for kind in ALLOWED_REQUEST_KINDS {
            assert!(script.contains(kind), "missing wire name {kind}");
        }
    }

    #[test]
    fn init_script_escapes_metadata() {
        let script = init_script("0.1\"; alert(1); //", "linux");
        assert!(!script.contains("alert(1); //\n"));
        assert!(script.contains(r#""0.1\"; alert(1); //""#));
    }

    #[test]
    fn resolve_script_carries_action_record() {
        let payload = serde_json::to_value(ActionResult::unavailable()).unwrap();
        let script = js_resolve(3, &payload);
        assert_eq!(
            script,
            r#"window.__chime && window.__chime._resolve(3, {"success":false,"error":"Window not available"});"#
        );
    }

    #[test]
    fn resolve_script_carries_state_record() {
        let payload = serde_json::to_value(WindowState {
            is_minimized: false,
            is_maximized: false,
            is_focused: true,
        })
        .unwrap();
        let script = js_resolve(9, &payload);
        assert!(script.contains("_resolve(9, {\"isMinimized\":false"));
    }

    #[test]
    fn resolve_script_null_sentinel() {
        let script = js_resolve(1, &serde_json::Value::Null);
        assert_eq!(script, "window.__chime && window.__chime._resolve(1, null);");
    }
}
