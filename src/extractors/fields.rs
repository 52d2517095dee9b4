// src/extractors/fields.rs
use once_cell::sync::Lazy;
use regex::Regex;

// "a) Firma:" or "a) Name:" followed by the value, on the same line or the next.
static COMPANY_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"a\)\s*(?i:firma|name)\b:?\s*([^\n]+)").expect("Failed to compile COMPANY_NAME_RE")
});

static ADDRESS_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:geschäftsanschrift):\s*([^\n]+)").expect("Failed to compile ADDRESS_LABEL_RE")
});

// Inside "b) Sitz, Niederlassung, ..." the first line is the city and the
// second one the street address.
static SEAT_FALLBACK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"b\)[ \t]*Sitz,[^\n]*\n[^\n]+\n[ \t]*([^\n]+)")
        .expect("Failed to compile SEAT_FALLBACK_RE")
});

/// Registered company name, or `""` when no name label is present.
pub fn extract_company_name(text: &str) -> String {
    first_capture(&COMPANY_NAME_RE, text).unwrap_or_default()
}

/// Business address from the explicit label, falling back to the line after
/// the city in the registered-seat item. `""` when neither is present.
pub fn extract_business_address(text: &str) -> String {
    if let Some(address) = first_capture(&ADDRESS_LABEL_RE, text) {
        return address;
    }
    match first_capture(&SEAT_FALLBACK_RE, text) {
        Some(address) => {
            tracing::debug!("Address taken from registered-seat fallback");
            address
        }
        None => String::new(),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
