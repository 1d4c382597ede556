use std::fmt::Display;

use chrono::TimeZone;

use crate::api::Time;

/// Short age of `ts` as seen at `now`, falling back to the date in `tz` after a day
pub fn format_time<Tz>(ts: Time, now: Time, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let secs = (now - ts).num_seconds();
    if secs < 60 {
        String::from("Just now")
    } else if secs < 3600 {
        format!("{} min", secs / 60)
    } else if secs < 86400 {
        format!("{} h", secs / 3600)
    } else {
        ts.with_timezone(tz).format("%-d/%-m/%Y").to_string()
    }
}
