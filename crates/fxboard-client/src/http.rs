//! HTTP gateway to the currency service

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use fxboard_api::{Currency, CurrencyPayload, PageRequest, PageResponse};

use crate::config::GatewayConfig;
use crate::error::{ClientError, Result};
use crate::traits::CurrencySource;

const CURRENCIES: [&str; 2] = ["api", "currencies"];

/// HTTP client for the currency service
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Create a gateway whose requests time out after `config.timeout()`
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    ///
    /// # Example
    /// ```no_run
    /// use fxboard_client::{GatewayConfig, HttpGateway};
    ///
    /// let gateway = HttpGateway::new(GatewayConfig::new("http://localhost:8080")?)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        tracing::info!(
            base_url = %config.base_url(),
            timeout = ?config.timeout(),
            "currency gateway ready"
        );
        Ok(Self { client, config })
    }

    /// Create a gateway around a custom `reqwest::Client`
    ///
    /// The client's own timeout applies; `config.timeout()` is not re-applied.
    pub fn with_client(config: GatewayConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build a URL under `/api/currencies`
    fn url(&self, extra: &[&str]) -> Url {
        let segments: Vec<&str> = CURRENCIES.iter().chain(extra).copied().collect();
        self.config.endpoint(&segments)
    }

    /// Send a request and deserialize a JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one page of currencies
    ///
    /// # Errors
    /// Returns an error on transport failure, timeout, a non-2xx status or an
    /// undecodable body.
    ///
    /// # Example
    /// ```no_run
    /// # use fxboard_api::{PageRequest, SortDirection, SortField};
    /// # use fxboard_client::HttpGateway;
    /// # async fn example(gateway: HttpGateway) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = PageRequest {
    ///     page: 0,
    ///     size: 10,
    ///     sort_by: SortField::ExchangeRate,
    ///     sort_dir: SortDirection::Desc,
    /// };
    /// let page = gateway.fetch_page(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Currency>> {
        let mut url = self.url(&["paged"]);
        url.query_pairs_mut()
            .extend_pairs(request.query_pairs().iter().map(|(k, v)| (*k, v.as_str())));

        tracing::debug!(%url, "fetching currency page");
        self.send(self.client.get(url)).await
    }

    /// Fetch every currency without paging
    ///
    /// # Errors
    /// Returns an error if the request fails or the service returns an error.
    pub async fn list_all(&self) -> Result<Vec<Currency>> {
        self.send(self.client.get(self.url(&[]))).await
    }

    /// Fetch a single currency by its code
    ///
    /// # Errors
    /// Returns an error if the request fails or the service returns an error
    /// (including 404 for an unknown code).
    pub async fn get_by_code(&self, code: &str) -> Result<Currency> {
        self.send(self.client.get(self.url(&[code]))).await
    }

    /// Create a currency
    ///
    /// The payload is validated locally first; an invalid payload never
    /// reaches the service.
    ///
    /// # Errors
    /// Returns `ClientError::Invalid` for a rejected payload, or any transport
    /// or status error from the service.
    pub async fn create(&self, payload: CurrencyPayload) -> Result<Currency> {
        let payload = payload.validate()?;
        tracing::debug!(code = %payload.code, "creating currency");
        self.send(self.client.post(self.url(&[])).json(&payload))
            .await
    }

    /// Replace the fields of an existing currency
    ///
    /// # Errors
    /// Returns `ClientError::Invalid` for a rejected payload, or any transport
    /// or status error from the service.
    pub async fn update(&self, id: i64, payload: CurrencyPayload) -> Result<Currency> {
        let payload = payload.validate()?;
        let id = id.to_string();
        tracing::debug!(%id, code = %payload.code, "updating currency");
        self.send(self.client.put(self.url(&[&id])).json(&payload))
            .await
    }

    /// Delete a currency
    ///
    /// # Errors
    /// Returns an error if the request fails or the service returns an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let id = id.to_string();
        tracing::debug!(%id, "deleting currency");
        let response = self.client.delete(self.url(&[&id])).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        Ok(())
    }
}

#[async_trait]
impl CurrencySource for HttpGateway {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Currency>> {
        HttpGateway::fetch_page(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> HttpGateway {
        HttpGateway::new(GatewayConfig::local().unwrap()).unwrap()
    }

    #[test]
    fn test_gateway_creation() {
        let gateway = gateway();
        assert_eq!(
            gateway.config().base_url().as_str(),
            "http://localhost:8080/"
        );
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(
            gateway().url(&[]).as_str(),
            "http://localhost:8080/api/currencies"
        );
    }

    #[test]
    fn test_item_url() {
        assert_eq!(
            gateway().url(&["EUR"]).as_str(),
            "http://localhost:8080/api/currencies/EUR"
        );
    }
}
