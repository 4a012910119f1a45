//! Window teardown and quit policy.

use winit::event_loop::ActiveEventLoop;

use super::core::ChimeApp;

impl ChimeApp {
    /// Destroy the webview and window, clearing the controller reference.
    ///
    /// Order matters: the webview — and with it the IPC handler wiring —
    /// is torn down before the window it is attached to, so no handler
    /// fires once teardown has begun.
    pub(super) fn destroy_window(&mut self, event_loop: &ActiveEventLoop) {
        self.webview = None;

        let dropped = self.manager.drain_events().len();
        if dropped > 0 {
            tracing::debug!(dropped, "discarded pending webview events at teardown");
        }

        self.controller.clear();
        tracing::info!("Window destroyed");

        // Quit when the last window closes, except under the macOS
        // convention of staying resident until re-activated.
        if cfg!(target_os = "macos") {
            tracing::info!("Staying resident (macOS convention)");
        } else {
            event_loop.exit();
        }
    }
}
