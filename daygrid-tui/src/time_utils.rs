use time::{Date, OffsetDateTime};

/// Today's date in the local timezone, falling back to UTC when the offset is unknown.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// e.g. "Thu 25 Jul 2024"
pub fn format_long_date(date: Date) -> String {
    let weekday = format!("{}", date.weekday());
    let month = format!("{}", date.month());
    format!(
        "{} {} {} {}",
        &weekday[..3],
        date.day(),
        &month[..3],
        date.year()
    )
}
