use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for webview navigation.
///
/// Only bundled content may load. Everything else is blocked: the display
/// surface has no business navigating anywhere.
/// - `chime://` — custom protocol for the bundled page and fonts
/// - `about:blank` — default empty page
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "chime://",
    // On Windows, WebView2 rewrites custom protocols: chime://localhost/… → http://chime.localhost/…
    "http://chime.localhost",
    "about:blank",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from page");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }
            debug!(url = %url, "navigation allowed");
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
