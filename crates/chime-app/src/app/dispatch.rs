//! Bridge request validation and dispatch.
//!
//! Raw IPC bodies arrive as JSON, get parsed into `BridgeRequest`,
//! checked against the allowlist, and routed to the controller. Every
//! accepted request is answered: the matching page-side promise is
//! settled with the handler's record (or the null sentinel).

use chime_bridge::{is_request_allowed, BridgeOp, BridgeRequest};
use chime_webview::WebViewEvent;

use super::core::ChimeApp;

impl ChimeApp {
    /// Drain webview events and dispatch bridge requests.
    pub(super) fn poll_webview_events(&mut self) {
        for event in self.manager.drain_events() {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_bridge_message(&body),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "page load");
                }
            }
        }
    }

    /// Handle a single IPC message from the display surface.
    fn handle_bridge_message(&mut self, body: &str) {
        let request = match BridgeRequest::from_json(body) {
            Some(r) => r,
            None => {
                tracing::warn!(
                    body_len = body.len(),
                    "bridge request rejected: failed to parse"
                );
                return;
            }
        };

        if !is_request_allowed(&request.kind) {
            tracing::warn!(
                id = request.id,
                kind = %request.kind,
                "bridge request rejected: unknown kind"
            );
            return;
        }

        tracing::debug!(id = request.id, kind = %request.kind, "bridge request dispatched");

        let payload = match request.op() {
            Some(BridgeOp::Minimize) => serde_json::to_value(self.controller.handle_minimize()),
            Some(BridgeOp::Close) => serde_json::to_value(self.controller.handle_close()),
            Some(BridgeOp::GetState) => match self.controller.handle_get_state() {
                Some(state) => serde_json::to_value(state),
                None => Ok(serde_json::Value::Null),
            },
            None => return, // unreachable — allowlist checked above
        };

        match payload {
            Ok(payload) => self.respond(request.id, &payload),
            Err(e) => {
                tracing::error!(id = request.id, "failed to serialize bridge response: {e}")
            }
        }
    }

    /// Settle the page-side pending promise for `id`.
    fn respond(&self, id: u64, payload: &serde_json::Value) {
        let Some(webview) = &self.webview else {
            tracing::warn!(id, "bridge response dropped: no webview");
            return;
        };
        if let Err(e) = webview.evaluate_script(&chime_bridge::js_resolve(id, payload)) {
            tracing::warn!(id, error = %e, "failed to deliver bridge response");
        }
    }
}
