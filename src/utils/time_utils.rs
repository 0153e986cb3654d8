use chrono::{Days, Local, NaiveDate};

/// Monotonic instant that also works on wasm32.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    /// en-US short date, e.g. "Mar 15" (no zero padding on the day).
    pub const SHORT_DATE_FORMAT: &str = "%b %-d";

    /// Today's calendar date in the local timezone.
    pub fn today_local() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn short_date_label(date: NaiveDate) -> String {
        format!("{}", date.format(Self::SHORT_DATE_FORMAT))
    }

    /// `date` moved back by `days` calendar days. Saturates at `NaiveDate::MIN`.
    pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
        date.checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_has_no_day_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(TimeUtils::short_date_label(date), "Mar 5");
    }

    #[test]
    fn days_before_crosses_year_boundary() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let earlier = TimeUtils::days_before(date, 89);
        assert_eq!(earlier, NaiveDate::from_ymd_opt(2023, 12, 17).unwrap());
        assert_eq!(TimeUtils::short_date_label(earlier), "Dec 17");
    }
}
