use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to whole cents, half away from zero.
pub(crate) fn round_cents(val: Decimal) -> Decimal {
    val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a decimal amount with exactly 2 decimal places and no grouping.
/// e.g. `-105.5` → `"-105.50"`
pub(crate) fn format_amount(val: Decimal) -> String {
    format!("{:.2}", round_cents(val))
}

/// Keep the first `max` characters of a string. No ellipsis is added.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Upper-case the first character and lower-case the rest.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Right-pad `left` with spaces so that `left + right` spans `width` characters.
/// When the two already fill the width they are joined without a gap.
pub(crate) fn fill_line(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used);
    format!("{left}{}{right}", " ".repeat(gap))
}
