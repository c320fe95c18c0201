//! Page size and sort choices offered by the list view

use fxboard_api::{SortDirection, SortField};

/// Page sizes offered in list mode
pub const LIST_PAGE_SIZES: [u32; 3] = [5, 10, 20];

/// A named field/direction pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPreset {
    pub field: SortField,
    pub dir: SortDirection,
    pub label: &'static str,
}

/// Sort choices offered in list mode
pub const LIST_SORT_PRESETS: [SortPreset; 6] = [
    SortPreset {
        field: SortField::Code,
        dir: SortDirection::Asc,
        label: "Code (A-Z)",
    },
    SortPreset {
        field: SortField::Code,
        dir: SortDirection::Desc,
        label: "Code (Z-A)",
    },
    SortPreset {
        field: SortField::Name,
        dir: SortDirection::Asc,
        label: "Name (A-Z)",
    },
    SortPreset {
        field: SortField::Name,
        dir: SortDirection::Desc,
        label: "Name (Z-A)",
    },
    SortPreset {
        field: SortField::ExchangeRate,
        dir: SortDirection::Asc,
        label: "Rate (low-high)",
    },
    SortPreset {
        field: SortField::ExchangeRate,
        dir: SortDirection::Desc,
        label: "Rate (high-low)",
    },
];

/// Pick the option after (or before) `current`, wrapping at the ends
///
/// When `current` is not one of `options`, stepping forward picks the first
/// larger option and stepping back the last smaller one.
pub fn cycle_size(options: &[u32], current: u32, forward: bool) -> Option<u32> {
    let (first, last) = (*options.first()?, *options.last()?);
    let picked = if forward {
        options.iter().copied().find(|&size| size > current).unwrap_or(first)
    } else {
        options
            .iter()
            .rev()
            .copied()
            .find(|&size| size < current)
            .unwrap_or(last)
    };
    Some(picked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_forward_wraps() {
        assert_eq!(cycle_size(&LIST_PAGE_SIZES, 5, true), Some(10));
        assert_eq!(cycle_size(&LIST_PAGE_SIZES, 20, true), Some(5));
        assert_eq!(cycle_size(&LIST_PAGE_SIZES, 7, true), Some(10));
    }

    #[test]
    fn test_cycle_backward_wraps() {
        assert_eq!(cycle_size(&LIST_PAGE_SIZES, 10, false), Some(5));
        assert_eq!(cycle_size(&LIST_PAGE_SIZES, 5, false), Some(20));
    }

    #[test]
    fn test_cycle_empty() {
        assert_eq!(cycle_size(&[], 5, true), None);
    }

    #[test]
    fn test_presets_cover_three_fields() {
        let codes = LIST_SORT_PRESETS
            .iter()
            .filter(|p| p.field == SortField::Code)
            .count();
        assert_eq!(codes, 2);
        assert!(LIST_SORT_PRESETS.iter().all(|p| p.field != SortField::CreatedAt));
    }
}
