//! ChimeApp struct definition and constructor.

use std::time::{Duration, Instant};

use winit::window::Window;

use chime_webview::{ContentProvider, WebViewHandle, WebViewManager};

use super::controller::WindowController;
use super::init::assets_dir;

/// How often the event loop drains webview events while idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// Runtime options resolved from the CLI.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Enable webview devtools (development mode).
    pub devtools: bool,
}

/// Top-level application state.
pub struct ChimeApp {
    pub(super) options: AppOptions,

    // Windowing — the controller owns the single window reference
    pub(super) controller: WindowController<Window>,

    // Display surface
    pub(super) manager: WebViewManager,
    pub(super) webview: Option<WebViewHandle>,

    pub(super) last_poll: Instant,
}

impl ChimeApp {
    pub fn new(options: AppOptions) -> Self {
        let mut manager = WebViewManager::new();
        manager.set_content_provider(ContentProvider::new(assets_dir()));

        Self {
            options,
            controller: WindowController::new(),
            manager,
            webview: None,
            last_poll: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_starts_absent() {
        let app = ChimeApp::new(AppOptions::default());
        assert!(!app.controller.is_live());
        assert!(app.webview.is_none());
        assert!(app.controller.handle_get_state().is_none());
    }
}
