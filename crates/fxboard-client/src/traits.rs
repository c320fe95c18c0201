//! Source abstraction used by the paging controller

use std::sync::Arc;

use async_trait::async_trait;
use fxboard_api::{Currency, PageRequest, PageResponse};

use crate::error::Result;

/// Anything that can produce a page of currencies
#[async_trait]
pub trait CurrencySource: Send + Sync {
    /// Fetch one page in the requested order
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Currency>>;
}

#[async_trait]
impl<S: CurrencySource + ?Sized> CurrencySource for Arc<S> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Currency>> {
        (**self).fetch_page(request).await
    }
}
