use std::sync::Arc;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the display-surface WebView filling the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_devtools(config.devtools)
            .with_focused(true);

        // Bridge setup script, injected before any page script runs
        if let Some(script) = &config.init_script {
            builder = builder.with_initialization_script(script);
        }

        // IPC handler: page -> host
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));

        // Page load handler
        builder = Self::attach_page_load_handler(builder, events);

        // Navigation handler — allowlist: bundled content only
        builder = Self::attach_navigation_handler(builder);

        // Custom protocol for bundled content
        builder = self.attach_custom_protocol(builder);

        builder = builder.with_url(&config.url);

        let webview = builder.build(window)?;

        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
        })
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol("chime".to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = uri
                    .strip_prefix("chime://localhost/")
                    .or_else(|| uri.strip_prefix("chime://localhost"))
                    .or_else(|| uri.strip_prefix("chime:///"))
                    .or_else(|| uri.strip_prefix("chime://"))
                    .unwrap_or("");

                match cp.resolve(path) {
                    Some((mime, data)) => wry::http::Response::builder()
                        .status(200)
                        .header("Content-Type", mime)
                        .header("Access-Control-Allow-Origin", "chime://localhost")
                        .body(std::borrow::Cow::from(data))
                        .unwrap(),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        wry::http::Response::builder()
                            .status(404)
                            .body(std::borrow::Cow::from(b"Not Found".to_vec()))
                            .unwrap()
                    }
                }
            });
        }
        builder
    }
}
