use wry::WebView;

/// Handle to the display-surface WebView. Dropping the handle destroys
/// the WebView and its IPC wiring.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
}

impl WebViewHandle {
    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}
