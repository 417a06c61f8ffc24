//! Application configuration

use catalog_client::ClientConfig;
use clap::Parser;

/// Maximum thumbnail size (5MB)
const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Supported thumbnail formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Length bounds for a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

/// Upload constraints for thumbnail files
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Maximum file size in bytes
    pub max_size: u64,
    /// Allowed file extensions (lowercase)
    pub formats: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
            formats: SUPPORTED_FORMATS,
        }
    }
}

/// Admin console settings
#[derive(Debug, Clone, Parser)]
#[command(name = "admin-console", about = "Instrument catalog admin console")]
pub struct AppConfig {
    /// API base URL
    #[arg(long, env = "CATALOG_API_URL", default_value = "http://localhost:8080/api/v1")]
    pub api_url: String,

    /// Asset base URL that thumbnail paths resolve against
    #[arg(long, env = "CATALOG_SERVER_URL", default_value = "http://localhost:8080")]
    pub server_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Minimum description length
    #[arg(long, env = "CATALOG_DESCRIPTION_MIN", default_value_t = 10)]
    pub description_min: usize,

    /// Maximum description length
    #[arg(long, env = "CATALOG_DESCRIPTION_MAX", default_value_t = 255)]
    pub description_max: usize,
}

impl AppConfig {
    /// Bounds for the product name and new-brand fields
    pub fn name_bounds(&self) -> LengthBounds {
        LengthBounds { min: 1, max: 100 }
    }

    /// Bounds for the description field
    pub fn description_bounds(&self) -> LengthBounds {
        LengthBounds {
            min: self.description_min,
            max: self.description_max,
        }
    }

    /// Upload constraints
    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy::default()
    }

    /// Client configuration derived from these settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_asset_url(&self.server_url)
            .with_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig::parse_from(["admin-console"])
    }

    #[test]
    fn defaults_cover_local_development() {
        let config = test_config();
        assert_eq!(config.api_url, "http://localhost:8080/api/v1");
        assert_eq!(config.description_bounds(), LengthBounds { min: 10, max: 255 });
    }

    #[test]
    fn client_config_carries_urls_and_timeout() {
        let config = AppConfig::parse_from([
            "admin-console",
            "--api-url",
            "http://catalog:9000/api",
            "--timeout",
            "5",
        ]);
        let client_config = config.client_config();
        assert_eq!(client_config.api_url, "http://catalog:9000/api");
        assert_eq!(client_config.timeout, 5);
    }
}
