//! Well-known currency symbols

/// Code shown first when nothing else is selected
pub const DEFAULT_CURRENCY: &str = "USD";

const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("JPY", "¥"),
    ("GBP", "£"),
    ("AUD", "A$"),
    ("CAD", "C$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("KRW", "₩"),
    ("INR", "₹"),
    ("VND", "₫"),
];

/// Look up the display symbol for a currency code (case-insensitive)
pub fn symbol_for(code: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, symbol)| *symbol)
}

/// All codes with a known symbol
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    SYMBOLS.iter().map(|(code, _)| *code)
}
