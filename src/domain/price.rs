// src/domain/price.rs
//
// Listing prices arrive from the backend as human strings in the local
// numbering convention ("8.5 Crore", "50 Lakh"). Filtering needs a raw
// number, and the filter panel shows the typed-in raw number back as a
// human string.
//
// Scales: Thousand = 1e3, Lakh = 1e5, Crore = 1e7, Arab = 1e9.

/// Parse a price string into a raw number.
///
/// Unit matching is case-insensitive; "cr" is accepted as shorthand for
/// Crore. A pure-numeric string parses directly. Empty or unparseable
/// input yields 0 so one bad record never breaks a whole filtered view.
pub fn parse_price(text: &str) -> f64 {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return 0.0;
    }

    let magnitude = leading_number(&text);

    if text.contains("crore") || text.contains("cr") {
        magnitude * 10_000_000.0
    } else if text.contains("lakh") {
        magnitude * 100_000.0
    } else if text.contains("thousand") {
        magnitude * 1_000.0
    } else if text.contains("arab") {
        magnitude * 1_000_000_000.0
    } else {
        text.parse::<f64>().unwrap_or(0.0)
    }
}

/// Format a raw number as a human PKR string, choosing the largest unit
/// that keeps the displayed magnitude under 1000 of that unit.
///
/// Not a strict inverse of `parse_price`: values at unit boundaries
/// re-format into the next unit up ("100 Lakh" comes back as "1 Crore").
/// Accepted display behavior, not something to correct here.
pub fn format_pkr(num: f64) -> String {
    if num <= 0.0 {
        return String::new();
    }
    if num < 1_000.0 {
        display(num)
    } else if num < 100_000.0 {
        format!("{} Thousand", display(num / 1_000.0))
    } else if num < 10_000_000.0 {
        format!("{} Lakh", display(num / 100_000.0))
    } else if num < 1_000_000_000.0 {
        format!("{} Crore", display(num / 10_000_000.0))
    } else {
        format!("{} Arab", display(num / 1_000_000_000.0))
    }
}

/// Parse the numeric prefix of a string ("8.5 Crore" -> 8.5), tolerating
/// trailing garbage the way a lenient float parse would.
fn leading_number(text: &str) -> f64 {
    let end = text
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
        .unwrap_or(text.len());
    text[..end].parse::<f64>().unwrap_or(0.0)
}

// Drop a trailing ".0" so whole numbers print like integers.
fn display(n: f64) -> String {
    if n == n.trunc() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
