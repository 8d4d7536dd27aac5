//! Text formatting for rates and money amounts.
//!
//! Fixed-point rendering only; no locale handling or thousands separators.

/// Decimal places used when a caller has no preference.
pub const DEFAULT_DECIMALS: usize = 2;

/// Formats a decimal fraction as a percentage.
///
/// ```rust
/// use bondlab_core::format::format_percent;
///
/// assert_eq!(format_percent(0.05, 2), "5.00%");
/// assert_eq!(format_percent(0.033504, 3), "3.350%");
/// ```
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", fixed(value * 100.0, decimals))
}

/// Formats an amount as dollars.
///
/// ```rust
/// use bondlab_core::format::format_currency;
///
/// assert_eq!(format_currency(98.0216, 2), "$98.02");
/// ```
pub fn format_currency(value: f64, decimals: usize) -> String {
    format!("${}", fixed(value, decimals))
}

fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 prints without a sign
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", round_half_up(value.abs(), decimals))
}

/// Fractional digits in the exact decimal expansion of the smallest
/// subnormal `f64`.
const EXACT_DIGITS: usize = 1074;

/// Rounds a non-negative value to `decimals` places, ties away from zero.
///
/// Works on the exact decimal expansion so a value stored just below a
/// tie (`1.005` is `1.00499…`) still rounds down.
fn round_half_up(magnitude: f64, decimals: usize) -> String {
    if decimals >= EXACT_DIGITS {
        return format!("{magnitude:.decimals$}");
    }

    let exact = format!("{magnitude:.EXACT_DIGITS$}");
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let round_up = fraction
        .as_bytes()
        .get(decimals)
        .is_some_and(|&digit| digit >= b'5');

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .collect();
    let mut whole_len = whole.len();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            whole_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 1);
    out.extend(digits[..whole_len].iter().map(|&d| char::from(d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[whole_len..].iter().map(|&d| char::from(d)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.05, DEFAULT_DECIMALS), "5.00%");
        assert_eq!(format_percent(0.0505, 2), "5.05%");
        assert_eq!(format_percent(-0.0125, 2), "-1.25%");
        assert_eq!(format_percent(0.05, 0), "5%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(98.0216, DEFAULT_DECIMALS), "$98.02");
        assert_eq!(format_currency(100.0, 4), "$100.0000");
        assert_eq!(format_currency(-5.5, 1), "$-5.5");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_currency(-0.0, 2), "$0.00");
        assert_eq!(format_percent(-0.0, 1), "0.0%");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_currency(0.125, 2), "$0.13");
        assert_eq!(format_currency(2.5, 0), "$3");
        assert_eq!(format_currency(-2.5, 0), "$-3");
        assert_eq!(format_currency(0.375, 2), "$0.38");
        // carries into a new leading digit
        assert_eq!(format_currency(99.5, 0), "$100");
    }

    #[test]
    fn test_below_tie_rounds_down() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_currency(1.005, 2), "$1.00");
        assert_eq!(format_currency(0.995, 2), "$0.99");
        assert_eq!(format_currency(0.001, 2), "$0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_percent(f64::NAN, 2), "NaN%");
        assert_eq!(format_currency(f64::INFINITY, 2), "$Infinity");
        assert_eq!(format_currency(f64::NEG_INFINITY, 2), "$-Infinity");
    }
}
