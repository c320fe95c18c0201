//! Gateway configuration

use std::time::Duration;

use url::Url;

use crate::error::{ClientError, Result};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Immutable connection settings handed to `HttpGateway` at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: Url,
    timeout: Duration,
}

impl GatewayConfig {
    /// Create a configuration for the given base URL with the default timeout
    ///
    /// # Errors
    /// Returns an error if the URL cannot be parsed or cannot carry a path.
    ///
    /// # Example
    /// ```
    /// use fxboard_client::GatewayConfig;
    ///
    /// let config = GatewayConfig::new("http://localhost:8080")?;
    /// assert_eq!(config.base_url().as_str(), "http://localhost:8080/");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Configuration for a service on `DEFAULT_BASE_URL`
    ///
    /// # Errors
    /// Same as `new`; the default URL parses, so this succeeds in practice.
    pub fn local() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Same configuration with another request timeout
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build an endpoint URL by appending path segments to the base URL
    ///
    /// Segments are percent-encoded, so user input such as a currency code
    /// cannot escape its path position.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config() {
        let config = GatewayConfig::local().unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_url() {
        assert!(GatewayConfig::new("not a url").is_err());
        assert!(matches!(
            GatewayConfig::new("mailto:ops@example.com"),
            Err(ClientError::BaseUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_building() {
        let config = GatewayConfig::new("http://localhost:8080").unwrap();
        let url = config.endpoint(&["api", "currencies", "paged"]);
        assert_eq!(url.as_str(), "http://localhost:8080/api/currencies/paged");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = GatewayConfig::new("https://example.com/fx/").unwrap();
        let url = config.endpoint(&["api", "currencies"]);
        assert_eq!(url.as_str(), "https://example.com/fx/api/currencies");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let config = GatewayConfig::local().unwrap();
        let url = config.endpoint(&["api", "currencies", "US D/../x"]);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/currencies/US%20D%2F..%2Fx"
        );
    }

    #[test]
    fn test_with_timeout() {
        let config = GatewayConfig::local().unwrap().with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }
}
