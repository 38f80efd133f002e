//! Number formatting for cards and stat tiles

/// Formats a number with a comma thousands separator and the given decimals
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole currency units with thousands separators: `$245,000`
pub fn format_money(value: f64, symbol: &str) -> String {
    if value.fract() == 0.0 {
        format!("{}{}", symbol, format_number_with_decimals(value, 0))
    } else {
        format!("{}{}", symbol, format_number_with_decimals(value, 2))
    }
}

/// Short money for tiles: `$284K`, `$1.2M`
pub fn format_compact_money(value: f64, symbol: &str) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{}{}{:.1}M", sign, symbol, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{}{:.0}K", sign, symbol, abs / 1_000.0)
    } else {
        format!("{}{}", sign, format_money(abs, symbol))
    }
}

/// Integer with thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(245000.0, "$"), "$245,000");
        assert_eq!(format_money(62.5, "$"), "$62.50");
        assert_eq!(format_money(0.0, "$"), "$0");
    }

    #[test]
    fn test_format_compact_money() {
        assert_eq!(format_compact_money(284000.0, "$"), "$284K");
        assert_eq!(format_compact_money(1200000.0, "$"), "$1.2M");
        assert_eq!(format_compact_money(5943.75, "$"), "$6K");
        assert_eq!(format_compact_money(950.0, "$"), "$950");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1,234");
        assert_eq!(format_number_with_decimals(123.0, 0), "123");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(2847.0), "2,847");
        assert_eq!(format_number_int(1080000.0), "1,080,000");
    }
}
