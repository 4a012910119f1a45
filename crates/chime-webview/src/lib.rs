//! The display surface host: a single `wry` WebView filling the window.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView covering the whole frameless window
//! - Collection of IPC messages from the page for the event loop to drain
//! - A custom `chime://` protocol serving the bundled page and fonts
//! - Navigation control (only bundled content may load)
//!
//! This crate knows nothing about the bridge contract itself: the
//! initialization script is handed in opaquely and IPC bodies are handed
//! out as raw JSON, so the contract stays testable without a rendering
//! surface.

pub mod content;
pub mod events;
pub mod manager;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
