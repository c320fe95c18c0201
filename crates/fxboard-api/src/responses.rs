//! Response types for the API

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency record as stored by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Server-assigned identifier
    pub id: i64,
    /// Unique ISO 4217 code, used as the stable list key
    pub code: String,
    pub name: String,
    pub symbol: String,
    /// Non-negative rate against USD
    #[serde(with = "rust_decimal::serde::float")]
    pub exchange_rate: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Currency {
    /// Whether the rate honours the service's non-negative constraint
    pub fn has_valid_rate(&self) -> bool {
        self.exchange_rate >= Decimal::ZERO
    }
}

/// Paging metadata reported alongside each page of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Zero-based page index
    pub page: u32,
    /// Requested page size
    pub size: u32,
    /// Total number of records across all pages
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
    /// Number of records in this page's content
    pub number_of_elements: u32,
    pub empty: bool,
}

impl PageMeta {
    /// Derive the metadata for a page holding `number_of_elements` records
    pub fn new(page: u32, size: u32, total_elements: u64, number_of_elements: u32) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            u32::try_from(total_elements.div_ceil(u64::from(size))).unwrap_or(u32::MAX)
        };
        let last = if total_pages == 0 {
            page == 0
        } else {
            page == total_pages - 1
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last,
            number_of_elements,
            empty: number_of_elements == 0,
        }
    }

    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        !self.last && self.page.saturating_add(1) < self.total_pages
    }

    /// Whether a page before this one exists
    pub fn has_previous(&self) -> bool {
        !self.first && self.page > 0
    }

    /// Check the paging invariants against the length of the content received
    pub fn is_consistent_with(&self, content_len: usize) -> bool {
        let expected = Self::new(
            self.page,
            self.size,
            self.total_elements,
            self.number_of_elements,
        );
        usize::try_from(self.number_of_elements).is_ok_and(|n| n == content_len)
            && self.number_of_elements <= self.size
            && self.total_pages == expected.total_pages
            && self.last == expected.last
    }
}

/// One page of records plus its metadata
///
/// On the wire the metadata fields sit next to `content` in a single object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl<T> PageResponse<T> {
    /// Build a page whose metadata agrees with its content
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let count = u32::try_from(content.len()).unwrap_or(u32::MAX);
        Self {
            meta: PageMeta::new(page, size, total_elements, count),
            content,
        }
    }

    /// Split into content and metadata
    pub fn into_parts(self) -> (Vec<T>, PageMeta) {
        (self.content, self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"{
        "content": [
            {
                "id": 1,
                "code": "USD",
                "name": "US Dollar",
                "symbol": "$",
                "exchangeRate": 1.0000,
                "createdAt": "2023-12-01T10:30:00",
                "updatedAt": "2023-12-01T10:30:00.123456"
            },
            {
                "id": 12,
                "code": "VND",
                "name": "Vietnamese Dong",
                "symbol": "₫",
                "exchangeRate": 24500,
                "createdAt": "2023-12-01T10:30:00",
                "updatedAt": "2024-01-15T08:00:00"
            }
        ],
        "page": 0,
        "size": 2,
        "totalElements": 11,
        "totalPages": 6,
        "first": true,
        "last": false,
        "numberOfElements": 2,
        "empty": false
    }"#;

    #[test]
    fn test_page_deserialization() {
        let page: PageResponse<Currency> = serde_json::from_str(SAMPLE_PAGE).unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].code, "USD");
        assert_eq!(page.content[0].exchange_rate, Decimal::ONE);
        assert_eq!(page.content[1].exchange_rate, Decimal::new(24500, 0));
        assert_eq!(page.meta.total_elements, 11);
        assert_eq!(page.meta.total_pages, 6);
        assert!(page.meta.first);
        assert!(!page.meta.last);
        assert!(page.meta.is_consistent_with(page.content.len()));
    }

    #[test]
    fn test_page_serialization_is_flat() {
        let page: PageResponse<Currency> = serde_json::from_str(SAMPLE_PAGE).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 6);
        assert_eq!(json["numberOfElements"], 2);
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn test_meta_derivation() {
        let meta = PageMeta::new(0, 10, 47, 10);
        assert_eq!(meta.total_pages, 5);
        assert!(meta.first);
        assert!(!meta.last);
        assert!(meta.has_next());
        assert!(!meta.has_previous());

        let tail = PageMeta::new(4, 10, 47, 7);
        assert!(tail.last);
        assert!(!tail.has_next());
        assert!(tail.has_previous());
        assert!(tail.is_consistent_with(7));
        assert!(!tail.is_consistent_with(10));
    }

    #[test]
    fn test_empty_collection_is_last_page() {
        let meta = PageMeta::new(0, 10, 0, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(meta.last);
        assert!(meta.empty);
        assert!(!meta.has_next());
    }

    #[test]
    fn test_has_next_guards_bad_last_flag() {
        // Some servers report `last: false` for an empty collection
        let mut meta = PageMeta::new(0, 10, 0, 0);
        meta.last = false;
        assert!(!meta.has_next());
        assert!(!meta.is_consistent_with(0));
    }

    #[test]
    fn test_page_response_new() {
        let page = PageResponse::new(vec![1, 2, 3], 1, 3, 9);
        assert_eq!(page.meta.number_of_elements, 3);
        assert_eq!(page.meta.total_pages, 3);
        assert!(!page.meta.first);
        assert!(!page.meta.last);
        let (content, meta) = page.into_parts();
        assert_eq!(content, vec![1, 2, 3]);
        assert_eq!(meta.page, 1);
    }

    #[test]
    fn test_negative_rate_decodes_but_is_flagged() {
        let mut page: PageResponse<Currency> = serde_json::from_str(SAMPLE_PAGE).unwrap();
        assert!(page.content.iter().all(Currency::has_valid_rate));

        let json = SAMPLE_PAGE.replace("24500", "-3.5");
        page = serde_json::from_str(&json).unwrap();
        assert!(!page.content[1].has_valid_rate());

        page.content[1].exchange_rate = Decimal::ZERO;
        assert!(page.content[1].has_valid_rate());
    }
}
