//! Notification texts for validation results.

/// Single-document success.
pub const DOCUMENT_VALID: &str = "The schema validates this document.";

/// Collection run without a single invalid document.
pub const ALL_VALID: &str = "All documents in this collection validate against the schema.";

/// Share of `part` in `whole`, in percent, rounded half-up to two decimals.
///
/// Rendered with at least one decimal digit: `50.0`, `33.33`, `100.0`.
/// `None` for an empty whole.
#[must_use]
pub fn percentage(part: u64, whole: u64) -> Option<String> {
    if whole == 0 {
        return None;
    }
    let part = u128::from(part);
    let whole = u128::from(whole);
    // Hundredths of a percent, half-up on the exact fraction.
    let hundredths = (part * 20_000 + whole) / (whole * 2);
    let (units, fraction) = (hundredths / 100, hundredths % 100);
    Some(if fraction % 10 == 0 {
        format!("{units}.{}", fraction / 10)
    } else {
        format!("{units}.{fraction:02}")
    })
}

/// Collection run summary.
#[must_use]
pub fn summary(total: u64, invalid: u64) -> String {
    if invalid == 0 {
        return ALL_VALID.to_string();
    }
    let valid = total.saturating_sub(invalid);
    let percent = percentage(valid, total).unwrap_or_else(|| "0.0".to_string());
    format!(
        "Out of {total} documents validate {valid} against this schema. (That's {percent}%.)"
    )
}
