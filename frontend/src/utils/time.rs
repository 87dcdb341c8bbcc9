use chrono::{Local, NaiveDate};

/// Today's date in the browser's local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// `2024-01-05` -> `Jan 5, 2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
