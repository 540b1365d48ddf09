use chrono::{Datelike, NaiveDate};

/// Sunday-based ordinal week of year as a zero-padded two-digit string.
///
/// Week boundaries fall on Sundays and days before the first Sunday of
/// the year land in week "00", the strftime `%U` convention. The weekly
/// series depend on this numbering; deliberately not ISO 8601.
pub fn week_of_year(date: NaiveDate) -> String {
    let week = (date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7;
    format!("{week:02}")
}
