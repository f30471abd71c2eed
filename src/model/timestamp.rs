//! ISO-8601 timestamps as carried by embeds.

use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, OffsetDateTime, Time, UtcOffset,
};

const ISO: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

const DISPLAY_DATE: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

const CLOCK: &[FormatItem<'static>] = format_description!("[hour]:[minute]");

/// Formats as UTC with millisecond precision, e.g. `2024-05-16T15:00:00.000Z`.
pub fn to_iso(dt: OffsetDateTime) -> String {
    dt.to_offset(UtcOffset::UTC)
        .format(ISO)
        .unwrap_or_else(|_| dt.unix_timestamp().to_string())
}

pub fn parse(input: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(input.trim(), &Rfc3339).ok()
}

/// Re-formats any RFC 3339 timestamp into [`to_iso`] form.
pub fn normalize(input: &str) -> Option<String> {
    parse(input).map(to_iso)
}

pub fn start_of_today() -> String {
    to_iso(OffsetDateTime::now_utc().replace_time(Time::MIDNIGHT))
}

/// Sets the time of day, keeping the date and seconds. A missing or
/// unreadable timestamp starts from now.
pub fn with_time(current: Option<&str>, hours: u8, minutes: u8) -> Option<String> {
    let dt = current
        .and_then(parse)
        .unwrap_or_else(OffsetDateTime::now_utc)
        .to_offset(UtcOffset::UTC);
    let time = Time::from_hms_nano(hours, minutes, dt.second(), dt.nanosecond()).ok()?;
    Some(to_iso(dt.replace_time(time)))
}

/// Sets the date, keeping the time of day.
pub fn with_date(current: Option<&str>, date: Date) -> String {
    let dt = current
        .and_then(parse)
        .unwrap_or_else(|| OffsetDateTime::now_utc().replace_time(Time::MIDNIGHT))
        .to_offset(UtcOffset::UTC);
    to_iso(dt.replace_date(date))
}

pub fn parse_date(input: &str) -> Option<Date> {
    Date::parse(
        input.trim(),
        format_description!("[year]-[month]-[day]"),
    )
    .ok()
}

/// `dd/MM/yyyy`, as shown in embed footers.
pub fn display_date(input: &str) -> Option<String> {
    parse(input)?.format(DISPLAY_DATE).ok()
}

pub fn clock(dt: OffsetDateTime) -> String {
    dt.format(CLOCK).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn iso_form() {
        assert_eq!(
            to_iso(datetime!(2024-05-16 15:00:00 UTC)),
            "2024-05-16T15:00:00.000Z"
        );
        assert_eq!(
            normalize("2024-05-16T17:00:00.000+02:00").as_deref(),
            Some("2024-05-16T15:00:00.000Z")
        );
        assert_eq!(normalize("yesterday"), None);
    }

    #[test]
    fn time_of_day() {
        let ts = "2024-05-16T15:42:13.250Z";
        assert_eq!(
            with_time(Some(ts), 8, 5).as_deref(),
            Some("2024-05-16T08:05:13.250Z")
        );
        assert_eq!(with_time(Some(ts), 24, 0), None);
        assert_eq!(with_time(Some(ts), 0, 60), None);
    }

    #[test]
    fn date_keeps_time() {
        let ts = "2024-05-16T15:42:00.000Z";
        assert_eq!(
            with_date(Some(ts), date!(2025 - 01 - 02)),
            "2025-01-02T15:42:00.000Z"
        );
        assert_eq!(parse_date(" 2025-01-02 "), Some(date!(2025 - 01 - 02)));
        assert_eq!(parse_date("02/01/2025"), None);
    }

    #[test]
    fn footer_date() {
        assert_eq!(
            display_date("2024-05-16T15:00:00.000Z").as_deref(),
            Some("16/05/2024")
        );
        assert_eq!(display_date(""), None);
    }
}
