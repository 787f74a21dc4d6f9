use rust_decimal::Decimal;

/// Trims whitespace and removes `,` and `_` thousands separators.
fn normalize_amount_input(s: &str) -> String {
    s.trim().chars().filter(|c| *c != ',' && *c != '_').collect()
}

/// Parses user input for a store setter.
///
/// Handles `,` and `_` as thousands separators (e.g. `"20,000,000"`).
/// Returns `None` for empty input or when parsing fails (logs a warning on
/// parse failure), which the store then clamps to zero.
pub fn parse_lenient_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e: rust_decimal::Error| {
            tracing::warn!(input = %s, "invalid amount, using 0: {}", e);
            None
        },
        Some,
    )
}
