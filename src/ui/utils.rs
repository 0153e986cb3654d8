use std::time::Duration;

use eframe::egui::Context;

use crate::utils::format_thousands;

/// Logical clock for reveals: egui's frame time since app start.
pub(crate) fn frame_now(ctx: &Context) -> Duration {
    let secs = ctx.input(|i| i.time);
    Duration::try_from_secs_f64(secs).unwrap_or_default()
}

/// Formats a price with "Trader Precision".
/// - Large (>1000): 2 decimals ($95,123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 8 decimals ($0.00001234)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("${}", format_thousands(price, 2))
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else {
        // Meme coins: 8 decimals needed to see movement
        format!("${:.8}", price)
    }
}

/// "+1.25" / "-0.40". Zero gets a plus sign.
pub fn format_signed(value: f64, dp: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    format!("{}{}", sign, format_thousands(value.abs(), dp))
}

/// "+$1,234.56" / "-$12.00"
pub fn format_signed_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    format!("{}${}", sign, format_thousands(value.abs(), 2))
}

pub fn format_percent_change(pct: f64) -> String {
    format!("{}%", format_signed(pct, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_precision_tiers() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(95123.5), "$95,123.50");
        assert_eq!(format_price(12.48291), "$12.4829");
        assert_eq!(format_price(0.00001234), "$0.00001234");
    }

    #[test]
    fn signed_formats() {
        assert_eq!(format_signed(1.254, 2), "+1.25");
        assert_eq!(format_signed(-0.4, 2), "-0.40");
        assert_eq!(format_signed(0.0, 2), "+0.00");
        assert_eq!(format_signed_usd(-1234.5), "-$1,234.50");
        assert_eq!(format_signed_usd(12.0), "+$12.00");
        assert_eq!(format_percent_change(5.2), "+5.20%");
    }
}
