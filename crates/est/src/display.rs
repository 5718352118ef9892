//! Display formatting for estimated values.
//!
//! Pure number-to-string helpers shared by anything rendering estimates.
//! The `"--"` placeholder is the user-visible form of "unavailable": an
//! estimator that could not produce a figure must never be shown as `0` or
//! `0%`.

/// Thousands-group suffixes for large balances
const POSTFIXES: [&str; 9] = ["", "k", "M", "B", "T", "P", "E", "Z", "Y"];

/// Format a token balance for display.
///
/// Small balances keep up to `decimals` (capped at 7) fractional digits,
/// balances above 1 show two, and large balances are abbreviated with a
/// magnitude suffix (`12.34M`). Non-finite input renders as `"--"`.
pub fn to_balance(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return "--".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs < 10.0 {
        let visible = if abs >= 1.0 {
            2
        } else {
            decimals.min(7) as usize
        };
        return format!("{value:.visible$}");
    }
    if abs < 10_000.0 {
        return format!("{value:.2}");
    }
    let integer_places = format!("{:.0}", abs).len();
    let postfix_index = ((integer_places - 1) / 3).min(POSTFIXES.len() - 1);
    let adjusted = value / 1_000f64.powi(postfix_index as i32);
    format!("{adjusted:.2}{}", POSTFIXES[postfix_index])
}

/// Format a decimal rate as a percentage, or `"--"` when unavailable.
pub fn to_percentage(rate: Option<f64>, decimals: usize) -> String {
    match rate {
        Some(rate) if rate.is_finite() => format!("{:.decimals$}%", rate * 100.0),
        _ => "--".to_string(),
    }
}

/// Compress a contract address to its ends: `CB64...OHT7`.
pub fn to_compact_address(address: &str) -> String {
    if address.len() < 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..4], &address[address.len() - 4..])
}

/// Format a duration in seconds as `1d 2h 3m`; seconds only show when the
/// span is under a day.
pub fn to_time_span(mut seconds: u64) -> String {
    let days = seconds / 86_400;
    seconds -= days * 86_400;
    let hours = seconds / 3_600;
    seconds -= hours * 3_600;
    let minutes = seconds / 60;
    seconds -= minutes * 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if days > 0 || hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if days == 0 {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_balance_small_values() {
        assert_eq!(to_balance(0.0, 7), "0");
        assert_eq!(to_balance(0.1234567, 7), "0.1234567");
        assert_eq!(to_balance(0.5, 2), "0.50");
        assert_eq!(to_balance(1.5, 7), "1.50");
        assert_eq!(to_balance(9.999, 7), "10.00");
    }

    #[test]
    fn test_to_balance_mid_range() {
        assert_eq!(to_balance(1234.5678, 7), "1234.57");
    }

    #[test]
    fn test_to_balance_suffixes() {
        assert_eq!(to_balance(12_500.0, 7), "12.50k");
        assert_eq!(to_balance(12_345_678.0, 7), "12.35M");
        assert_eq!(to_balance(1_200_000_000.0, 7), "1.20B");
    }

    #[test]
    fn test_to_balance_non_finite() {
        assert_eq!(to_balance(f64::NAN, 7), "--");
        assert_eq!(to_balance(f64::INFINITY, 7), "--");
    }

    #[test]
    fn test_to_percentage() {
        assert_eq!(to_percentage(Some(0.1234), 2), "12.34%");
        assert_eq!(to_percentage(Some(0.0), 2), "0.00%");
        // Unavailable is a placeholder, never "0%"
        assert_eq!(to_percentage(None, 2), "--");
        assert_eq!(to_percentage(Some(f64::NAN), 2), "--");
    }

    #[test]
    fn test_to_compact_address() {
        assert_eq!(
            to_compact_address("CB64D3G7SM2RTH6JSGG34DDTFTQ5CFDKVDZJZSODMCX4NJ2HV2KN7OHT"),
            "CB64...7OHT"
        );
        assert_eq!(to_compact_address("SHORT"), "SHORT");
        assert_eq!(to_compact_address(""), "");
    }

    #[test]
    fn test_to_time_span() {
        assert_eq!(to_time_span(45), "45s");
        assert_eq!(to_time_span(60), "1m 0s");
        assert_eq!(to_time_span(3_661), "1h 1m 1s");
        assert_eq!(to_time_span(90_061), "1d 1h 1m");
    }
}
