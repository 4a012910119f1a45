//! WebView lifecycle management.
//!
//! `WebViewManager` creates the single display-surface WebView and
//! collects its events for the main event loop to consume.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Creates the display-surface WebView and buffers its events.
pub struct WebViewManager {
    /// Event sink — events are pushed here from wry callbacks and drained
    /// by the main event loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Content provider for the `chime://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Set the content provider for serving bundled assets via `chime://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
