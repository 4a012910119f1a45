//! Host window controller: owns the single window reference and serves
//! bridge requests against it.
//!
//! The reference is either Absent or Live. Creation (on ready or
//! re-activation) attaches it; the closed notification clears it. Bridge
//! handlers read or mutate through the controller only and return defined
//! failure/null records while Absent — no panic may escape a handler.

use std::sync::Arc;

use chime_bridge::{ActionResult, WindowState};

/// The narrow window capability surface the controller needs. Implemented
/// by the winit window; faked in tests so the state machine runs headless.
pub(crate) trait HostWindow {
    fn minimize(&self);
    fn is_minimized(&self) -> bool;
    fn is_maximized(&self) -> bool;
    fn is_focused(&self) -> bool;
}

impl HostWindow for winit::window::Window {
    fn minimize(&self) {
        self.set_minimized(true);
    }

    fn is_minimized(&self) -> bool {
        // winit reports None when the platform cannot tell; treat as not
        // minimized, matching what the page can observe.
        winit::window::Window::is_minimized(self).unwrap_or(false)
    }

    fn is_maximized(&self) -> bool {
        winit::window::Window::is_maximized(self)
    }

    fn is_focused(&self) -> bool {
        self.has_focus()
    }
}

/// Owns the 0-or-1 live window reference. All mutation funnels through
/// these methods; nothing else holds the window.
pub(crate) struct WindowController<W: HostWindow> {
    window: Option<Arc<W>>,
    close_requested: bool,
}

impl<W: HostWindow> WindowController<W> {
    pub fn new() -> Self {
        Self {
            window: None,
            close_requested: false,
        }
    }

    /// Absent -> Live. Callers guard with `is_live` first; attaching over
    /// a live reference breaks the single-instance invariant.
    pub fn attach(&mut self, window: Arc<W>) {
        debug_assert!(self.window.is_none(), "window reference already live");
        self.close_requested = false;
        self.window = Some(window);
    }

    /// Live -> Absent. Fired by the closed notification; harmless while
    /// Absent. Returns the handle so the caller controls drop order.
    pub fn clear(&mut self) -> Option<Arc<W>> {
        self.close_requested = false;
        self.window.take()
    }

    pub fn is_live(&self) -> bool {
        self.window.is_some()
    }

    /// Whether a bridge close was recorded and not yet performed.
    pub fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }

    pub fn handle_minimize(&self) -> ActionResult {
        match &self.window {
            Some(window) => {
                window.minimize();
                ActionResult::ok()
            }
            None => ActionResult::unavailable(),
        }
    }

    /// Close is fire-and-forget: this records the request and reports
    /// success; the event loop performs destruction, and the closed
    /// notification then clears the reference.
    pub fn handle_close(&mut self) -> ActionResult {
        match &self.window {
            Some(_) => {
                self.close_requested = true;
                ActionResult::ok()
            }
            None => ActionResult::unavailable(),
        }
    }

    /// Pure read of the live window; `None` while Absent. Never fails.
    pub fn handle_get_state(&self) -> Option<WindowState> {
        self.window.as_ref().map(|window| WindowState {
            is_minimized: window.is_minimized(),
            is_maximized: window.is_maximized(),
            is_focused: window.is_focused(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
