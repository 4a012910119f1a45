//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the window controller, the display-surface
//! webview, and bridge dispatch.

mod controller;
mod core;
mod dispatch;
mod event_handler;
mod fonts;
mod init;
mod shutdown;

pub use core::{AppOptions, ChimeApp};
