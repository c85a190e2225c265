use jiff::{Timestamp, tz::TimeZone};

/// Render a date the way en-US browsers do for `toLocaleDateString`: `M/D/YYYY`.
pub fn format_date(ts: Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime("%-m/%-d/%Y").to_string()
}

/// [`format_date`] in the local time zone, or UTC when it can't be determined.
pub fn format_local_date(ts: Timestamp) -> String {
    format_date(ts, &TimeZone::system())
}
