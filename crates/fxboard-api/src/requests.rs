//! Request types for the API

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::responses::Currency;

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Attribute the server orders the full collection by before slicing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Code,
    Name,
    ExchangeRate,
    CreatedAt,
}

impl SortField {
    /// Every sortable field, in selector order
    pub const ALL: [SortField; 4] = [
        SortField::Code,
        SortField::Name,
        SortField::ExchangeRate,
        SortField::CreatedAt,
    ];

    /// Wire spelling used in the `sortBy` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Code => "code",
            SortField::Name => "name",
            SortField::ExchangeRate => "exchangeRate",
            SortField::CreatedAt => "createdAt",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            SortField::Code => "Code",
            SortField::Name => "Name",
            SortField::ExchangeRate => "Exchange rate",
            SortField::CreatedAt => "Created",
        }
    }

    /// The field after this one, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SortField::Code => SortField::Name,
            SortField::Name => SortField::ExchangeRate,
            SortField::ExchangeRate => SortField::CreatedAt,
            SortField::CreatedAt => SortField::Code,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "code" => Ok(SortField::Code),
            "name" => Ok(SortField::Name),
            "exchangerate" | "rate" => Ok(SortField::ExchangeRate),
            "createdat" | "created" => Ok(SortField::CreatedAt),
            _ => Err(ApiError::InvalidSortField(s.to_string())),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire spelling used in the `sortDir` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// The opposite direction
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ApiError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// One page of the ordered currency collection, as requested from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Number of records per page (positive)
    pub size: u32,
    pub sort_by: SortField,
    pub sort_dir: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: SortField::default(),
            sort_dir: SortDirection::default(),
        }
    }
}

impl PageRequest {
    /// First page of `size` records with the default ordering
    pub fn first(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Same request for another page
    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// Query string pairs in wire order
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortDir", self.sort_dir.as_str().to_string()),
        ]
    }
}

/// Body of create and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPayload {
    /// ISO 4217 code
    pub code: String,
    pub name: String,
    pub symbol: String,
    /// Rate against USD
    #[serde(with = "rust_decimal::serde::float")]
    pub exchange_rate: Decimal,
}

impl CurrencyPayload {
    /// Check the payload against the server's constraints and normalize the code
    ///
    /// # Errors
    /// Returns `ApiError::InvalidPayload` naming the first field that fails.
    pub fn validate(mut self) -> Result<Self, ApiError> {
        let code = self.code.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ApiError::InvalidPayload {
                field: "code",
                reason: format!("'{}' must be exactly 3 letters", self.code),
            });
        }
        self.code = code;

        check_text("name", &self.name, 100)?;
        check_text("symbol", &self.symbol, 10)?;

        if self.exchange_rate < Decimal::ZERO {
            return Err(ApiError::InvalidPayload {
                field: "exchangeRate",
                reason: format!("{} must not be negative", self.exchange_rate),
            });
        }

        Ok(self)
    }
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidPayload {
            field,
            reason: "must not be blank".to_string(),
        });
    }
    let len = value.chars().count();
    if len > max {
        return Err(ApiError::InvalidPayload {
            field,
            reason: format!("{len} characters exceeds the limit of {max}"),
        });
    }
    Ok(())
}

impl From<&Currency> for CurrencyPayload {
    fn from(currency: &Currency) -> Self {
        Self {
            code: currency.code.clone(),
            name: currency.name.clone(),
            symbol: currency.symbol.clone(),
            exchange_rate: currency.exchange_rate,
        }
    }
}
