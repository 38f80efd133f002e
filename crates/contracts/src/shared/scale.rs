//! Proportional bar scaling.
//!
//! Turns a value and a reference capacity into a `[0, 100]` percentage used
//! only as a CSS width or height.

/// Reference capacity for fields that are already percentages.
pub const PERCENT_CAPACITY: f64 = 100.0;

/// `clamp(value / capacity * 100, 0, 100)`.
///
/// A non-positive or non-finite capacity, or a non-finite value, yields `0`.
pub fn scale(value: f64, capacity: f64) -> f64 {
    if !(capacity > 0.0) || !capacity.is_finite() || !value.is_finite() {
        return 0.0;
    }
    if value >= capacity {
        return 100.0;
    }
    (value * 100.0 / capacity).clamp(0.0, 100.0)
}

/// Largest value of a series, `0` for an empty series.
pub fn series_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Scale every value of a series against the series maximum.
pub fn scale_series(values: &[f64]) -> Vec<f64> {
    let max = series_max(values);
    values.iter().map(|v| scale(*v, max)).collect()
}

/// Format a scaled percentage as a CSS length, e.g. `"30%"` or `"42.5%"`.
pub fn css_percent(percent: f64) -> String {
    let rounded = (percent * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_is_zero() {
        assert_eq!(scale(10.0, 0.0), 0.0);
        assert_eq!(scale(0.0, 0.0), 0.0);
        assert_eq!(scale(-5.0, 0.0), 0.0);
        assert_eq!(scale(10.0, -3.0), 0.0);
        assert_eq!(scale(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(scale(50.0, 50.0), 100.0);
        assert_eq!(scale(0.0, 50.0), 0.0);
        assert_eq!(scale(250.0, 200.0), 100.0);
        assert_eq!(scale(-1.0, 200.0), 0.0);
        for v in 0..=70 {
            let p = scale(v as f64, 70.0);
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn test_stock_gauge_example() {
        // currentStock 15 against twice the reorder point of 25
        assert_eq!(scale(15.0, 50.0), 30.0);
    }

    #[test]
    fn test_scale_series_against_max() {
        let heights = scale_series(&[400.0, 300.0, 500.0, 0.0]);
        assert_eq!(heights, vec![80.0, 60.0, 100.0, 0.0]);
        assert!(scale_series(&[]).is_empty());
        assert_eq!(scale_series(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_css_percent() {
        assert_eq!(css_percent(30.0), "30%");
        assert_eq!(css_percent(56.25), "56.3%");
        assert_eq!(css_percent(100.0), "100%");
    }
}
