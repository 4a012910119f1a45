//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use super::core::{ChimeApp, POLL_INTERVAL};

impl ApplicationHandler for ChimeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Ready and re-activation both land here: create the window only
        // when the reference is Absent (single-instance invariant).
        if self.controller.is_live() {
            return;
        }
        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.destroy_window(event_loop);
            }

            WindowEvent::Destroyed => {
                // Closed notification: the reference must not outlive it.
                self.controller.clear();
            }

            WindowEvent::Focused(focused) => {
                // The page observes focus itself; this is diagnostics only.
                tracing::debug!(focused, "window focus changed");
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl ChimeApp {
    /// Drain webview events on the poll cadence and schedule the next wake-up.
    fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        // A close requested over the bridge is performed here, after the
        // success record has been delivered to the page.
        if self.controller.take_close_request() {
            tracing::info!("Window close requested over bridge");
            self.destroy_window(event_loop);
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}
