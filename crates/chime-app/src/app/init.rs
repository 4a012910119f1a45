//! Window creation and webview setup.

use std::path::PathBuf;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowButtons};

use chime_webview::WebViewConfig;

use super::core::ChimeApp;
use super::fonts;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Fixed window creation parameters. Enumerated here, not user-settable.
const WINDOW_TITLE: &str = "Chime";
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

/// Relative path from the working directory to the bundled assets.
const ASSETS_DIR: &str = "assets";

/// Fixed entry document for the display surface.
const ENTRY_URL: &str = "chime://localhost/ui/index.html";

/// Resolve the bundled assets directory.
pub(super) fn assets_dir() -> PathBuf {
    let path = std::env::current_dir().unwrap_or_default().join(ASSETS_DIR);
    if !path.is_dir() {
        tracing::warn!(
            path = %path.display(),
            "Assets directory not found — the display surface will be empty"
        );
    }
    path
}

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ChimeApp {
    /// Create the window and the display-surface webview.
    /// Returns `false` if creation failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false)
            .with_decorations(false)
            .with_enabled_buttons(WindowButtons::CLOSE | WindowButtons::MINIMIZE);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        // Diagnose manifest problems in the host log; the page renders its
        // own placeholder on failure, so this never aborts startup.
        match fonts::check_manifest(&assets_dir().join("fonts/fonts.json")) {
            Ok(entries) => tracing::info!(count = entries.len(), "Font manifest loaded"),
            Err(e) => tracing::warn!("Font manifest check failed: {e}"),
        }

        let init_script =
            chime_bridge::init_script(env!("CARGO_PKG_VERSION"), std::env::consts::OS);
        let mut config = WebViewConfig::with_url(ENTRY_URL).init_script(init_script);
        if self.options.devtools {
            config = config.devtools(true);
        }

        match self.manager.create(window.as_ref(), config) {
            Ok(handle) => {
                if self.options.devtools {
                    handle.open_devtools();
                }
                tracing::debug!(url = %handle.current_url(), "Display surface webview created");
                self.webview = Some(handle);
            }
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        }

        self.controller.attach(window);
        tracing::info!("Window created and display surface loaded");
        true
    }
}
