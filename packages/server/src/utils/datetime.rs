use chrono::{DateTime, NaiveDateTime, Utc};

/// Display format for show start times, e.g. `May 21 2019 21:30:00`.
pub const START_TIME_FORMAT: &str = "%b %d %Y %H:%M:%S";

/// Naive layouts accepted from forms, tried in order after RFC 3339.
const FORM_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Layout used to pre-fill the show form.
pub fn format_form_time(time: &DateTime<Utc>) -> String {
    time.format(FORM_LAYOUTS[0]).to_string()
}

/// Parses a submitted start time. Values without an offset are taken as UTC.
pub fn parse_form_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    FORM_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc())
}
