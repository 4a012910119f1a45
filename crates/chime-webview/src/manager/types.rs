/// Configuration for creating the display-surface WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Script injected before any page script runs (the bridge setup).
    pub init_script: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            init_script: None,
            devtools: cfg!(debug_assertions),
        }
    }

    /// Attach an initialization script.
    pub fn init_script(mut self, script: impl Into<String>) -> Self {
        self.init_script = Some(script.into());
        self
    }

    /// Override the devtools toggle.
    pub fn devtools(mut self, enabled: bool) -> Self {
        self.devtools = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_carries_url_and_script() {
        let config = WebViewConfig::with_url("chime://localhost/ui/index.html")
            .init_script("console.log('hi');")
            .devtools(true);
        assert_eq!(config.url, "chime://localhost/ui/index.html");
        assert_eq!(config.init_script.as_deref(), Some("console.log('hi');"));
        assert!(config.devtools);
    }
}
