//! Configuration types for chat-daemon.

/// Configuration for connecting to the chat bot API.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the bot API server (e.g., "https://api.telegram.org").
    pub base_url: String,
    /// Bot authentication token.
    pub token: String,
}

impl GatewayConfig {
    /// Create a new configuration with the given base URL and token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Get the URL for a bot API method.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Get the download URL for a file path returned by `getFile`.
    ///
    /// Path separators are preserved; each segment is percent-encoded.
    pub fn file_url(&self, file_path: &str) -> String {
        let encoded = file_path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/file/bot{}/{}", self.base_url, self.token, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let config = GatewayConfig::new("https://api.example.org", "123:abc");
        assert_eq!(
            config.method_url("sendMessage"),
            "https://api.example.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_file_url_keeps_separators() {
        let config = GatewayConfig::new("https://api.example.org", "123:abc");
        assert_eq!(
            config.file_url("photos/file 1.jpg"),
            "https://api.example.org/file/bot123:abc/photos/file%201.jpg"
        );
    }
}
