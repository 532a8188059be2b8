//! Locale amount strings ("13.859,00", "4.500") → f64

/// Parse an amount written with `.` as thousands separator.
///
/// With a comma present the comma is the decimal mark; without one every
/// `.` is a thousands separator and the value has no decimal part.
/// Returns `None` when the cleaned string is not a number.
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let cleaned = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.replace('.', "")
    };
    cleaned.trim().parse().ok()
}
