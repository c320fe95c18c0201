//! fxboard-client: HTTP gateway to the currency service
//!
//! Translates paging requests into `GET /api/currencies/paged` calls and
//! decodes the JSON bodies into the shared `fxboard-api` types. Also exposes
//! the bulk, lookup and CRUD endpoints.
//!
//! # Example
//!
//! ```no_run
//! use fxboard_api::PageRequest;
//! use fxboard_client::{GatewayConfig, HttpGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpGateway::new(GatewayConfig::new("http://localhost:8080")?)?;
//!
//! let page = gateway.fetch_page(&PageRequest::first(10)).await?;
//! println!("{} of {} currencies", page.content.len(), page.meta.total_elements);
//!
//! let usd = gateway.get_by_code("USD").await?;
//! println!("{} {}", usd.symbol, usd.exchange_rate);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod traits;

pub use config::GatewayConfig;
pub use error::{ClientError, Result};
pub use http::HttpGateway;
pub use traits::CurrencySource;
