//! Delay Resolver: turns a caller-supplied delay token into a safe wait.
//!
//! Parsing is deliberately permissive. Every input, however malformed,
//! resolves to a value in `MIN_DELAY_MS..=MAX_DELAY_MS`; nothing here can
//! fail.

use rand::Rng;

/// Longest wait the API will ever perform, in milliseconds.
pub const MAX_DELAY_MS: u64 = 2000;

/// Shortest wait the API will ever perform, in milliseconds.
pub const MIN_DELAY_MS: u64 = 0;

/// Wait used when the token contains no number at all.
pub const FALLBACK_DELAY_MS: u64 = 2;

/// Parse the leading base-10 integer of `token`.
///
/// Leading whitespace (including U+FEFF) is skipped, then one optional
/// `+` or `-`, then the longest run of ASCII digits. Anything after the digits is ignored, so
/// `"12abc"` yields `12` and `"1e3"` yields `1`. Returns `None` when no
/// digit follows the optional sign. Values too large for `i64` saturate.
pub fn parse_leading_int(token: &str) -> Option<i64> {
    let trimmed = token.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let (negative, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

/// Resolve a raw delay token to milliseconds in `0..=2000`.
///
/// Non-numeric tokens resolve to [`FALLBACK_DELAY_MS`]; numeric tokens are
/// clamped into range.
pub fn resolve_delay(token: &str) -> u64 {
    parse_leading_int(token).map_or(FALLBACK_DELAY_MS, clamp_millis)
}

/// Pick a random delay for `/api/test` when the caller did not ask for one.
///
/// Uniform in `0..2000`.
pub fn random_test_delay() -> u64 {
    rand::rng().random_range(MIN_DELAY_MS..MAX_DELAY_MS)
}

fn clamp_millis(ms: i64) -> u64 {
    // Negative values fail the conversion and land on the floor.
    u64::try_from(ms).map_or(MIN_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_falls_back() {
        assert_eq!(resolve_delay("abc"), FALLBACK_DELAY_MS);
        assert_eq!(resolve_delay(""), FALLBACK_DELAY_MS);
        assert_eq!(resolve_delay("-"), FALLBACK_DELAY_MS);
        assert_eq!(resolve_delay("   "), FALLBACK_DELAY_MS);
        assert_eq!(resolve_delay("x100"), FALLBACK_DELAY_MS);
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(resolve_delay("-50"), 0);
        assert_eq!(resolve_delay("-0"), 0);
    }

    #[test]
    fn large_clamps_to_max() {
        assert_eq!(resolve_delay("5000"), MAX_DELAY_MS);
        assert_eq!(resolve_delay("2001"), MAX_DELAY_MS);
        assert_eq!(resolve_delay("99999999999999999999999999"), MAX_DELAY_MS);
    }

    #[test]
    fn in_range_passes_through() {
        assert_eq!(resolve_delay("750"), 750);
        assert_eq!(resolve_delay("0"), 0);
        assert_eq!(resolve_delay("2000"), 2000);
    }

    #[test]
    fn leading_prefix_semantics() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("1e3"), Some(1));
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("0x10"), Some(0));
        assert_eq!(parse_leading_int("--1"), None);
        assert_eq!(parse_leading_int("- 1"), None);
    }

    #[test]
    fn resolved_value_always_in_range() {
        let tokens = [
            "", "0", "1", "-1", "1999", "2000", "2001", "abc", "NaN", "Infinity", "-99999",
            "🦀", "٣", "12 34", "\t500",
        ];
        for token in tokens {
            let ms = resolve_delay(token);
            assert!(ms <= MAX_DELAY_MS, "{token:?} resolved to {ms}");
        }
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert_eq!(parse_leading_int("٣"), None);
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(parse_leading_int("\u{FEFF}5"), Some(5));
        assert_eq!(resolve_delay("\u{FEFF} \u{FEFF}-5"), 0);
        assert_eq!(resolve_delay("\u{FEFF}"), FALLBACK_DELAY_MS);
    }

    #[test]
    fn random_test_delay_stays_below_max() {
        for _ in 0..500 {
            assert!(random_test_delay() < MAX_DELAY_MS);
        }
    }
}
