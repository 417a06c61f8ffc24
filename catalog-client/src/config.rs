//! Client configuration

/// Connection settings for the catalog API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. "http://localhost:8080/api/v1")
    pub api_url: String,

    /// Asset base URL that thumbnail paths resolve against
    pub asset_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration for the given API base URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            asset_url: "http://localhost:8080".to_string(),
            timeout: 30,
        }
    }

    /// Set the asset base URL
    pub fn with_asset_url(mut self, url: impl Into<String>) -> Self {
        self.asset_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a catalog client from this configuration
    pub fn build_client(&self) -> super::CatalogClient {
        super::CatalogClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api/v1")
    }
}
