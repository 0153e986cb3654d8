use statrs::statistics::Statistics;

/// Rounds to `dp` decimal places, half away from zero.
#[inline]
pub fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

/// Arithmetic mean, 0.0 for an empty slice (statrs would give NaN).
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().mean()
}

/// Groups the integer part with commas: 1234567.8 -> "1,234,567.80" for `dp` = 2.
pub fn format_thousands(value: f64, dp: usize) -> String {
    let raw = format!("{:.*}", dp, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && raw.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_dp(1.005_1, 2), 1.01);
        assert_eq!(round_dp(-2.344, 2), -2.34);
        assert_eq!(round_dp(6.999, 2), 7.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(5000.0, 0), "5,000");
        assert_eq!(format_thousands(98.0, 0), "98");
        assert_eq!(format_thousands(12283.5, 2), "12,283.50");
        assert_eq!(format_thousands(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }
}
