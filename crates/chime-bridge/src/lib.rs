//! The privileged window bridge contract.
//!
//! The display surface (an unprivileged webview page) may affect the host
//! process only through this contract:
//! - **JS -> Rust**: the page calls one of three named, argument-less
//!   operations; each posts a `{id, kind}` request over the webview IPC
//!   channel and returns a promise.
//! - **Rust -> JS**: the host settles the pending promise by evaluating
//!   the resolve script for that request id.
//!
//! Requests are deny-by-default: anything whose `kind` is not in the
//! allowlist is rejected before dispatch. The page never receives direct
//! access to the windowing facility, the filesystem, or process APIs.

pub mod request;
pub mod response;
pub mod script;

pub use request::{is_request_allowed, BridgeOp, BridgeRequest, ALLOWED_REQUEST_KINDS};
pub use response::{ActionResult, WindowState};
pub use script::{init_script, js_resolve};
