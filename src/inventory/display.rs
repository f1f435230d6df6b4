//! Display-value derivation for listings.
//!
//! Pure functions from a possibly-incomplete record to the strings the pages
//! show. Each has a fixed fallback so the UI never renders an empty slot
//! where a value is expected.

use crate::inventory::model::Listing;

/// Shown when neither the raw nor the numeric price is usable.
pub const PRICE_FALLBACK: &str = "Price on request";
/// Shown when all title components are absent.
pub const TITLE_FALLBACK: &str = "Untitled";
/// Placeholder for absent detail fields.
pub const DASH: &str = "—";

/// Derived price, by precedence:
///   1. non-empty `price_raw`, trimmed, verbatim
///   2. finite numeric `price` > 0, rendered as whole-dollar USD
///   3. the "Price on request" placeholder
pub fn display_price(listing: &Listing) -> String {
    if let Some(raw) = &listing.price_raw {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    match listing.price {
        Some(n) if n.is_finite() && n > 0.0 => format!("${}", group_thousands(n.round() as i64)),
        _ => PRICE_FALLBACK.to_string(),
    }
}

/// Year, make and model joined by single spaces, absent parts skipped.
pub fn display_title(listing: &Listing) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(year) = listing.year {
        parts.push(year.to_string());
    }
    for field in [&listing.make, &listing.model] {
        if let Some(value) = field {
            if !value.is_empty() {
                parts.push(value.clone());
            }
        }
    }
    if parts.is_empty() {
        TITLE_FALLBACK.to_string()
    } else {
        parts.join(" ")
    }
}

/// Thousands-grouped mileage with the unit suffix, when known.
pub fn display_miles(miles: Option<i64>) -> Option<String> {
    miles.map(|m| format!("{} mi", group_thousands(m)))
}

/// Badge text for any non-active status; active or absent means no badge.
pub fn status_badge(status: Option<&str>) -> Option<String> {
    match status {
        Some(s) if !s.is_empty() && s != "active" => Some(s.to_uppercase()),
        _ => None,
    }
}

/// Exterior and interior color joined for the list view; absent entries are
/// skipped, so the summary may be empty.
pub fn color_summary(exterior: Option<&str>, interior: Option<&str>) -> String {
    [exterior, interior]
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Value or the dash placeholder, for the detail view's field list.
pub fn dash_or(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => DASH.to_string(),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
