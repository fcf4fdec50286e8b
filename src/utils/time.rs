use chrono::{DateTime, Local, NaiveDateTime};
use std::time::{SystemTime, UNIX_EPOCH};

/// Shown for timestamps chrono cannot represent.
const UNKNOWN_TIME: &str = "unknown time";

/// `ctime`-style rendering used for slot tooltips, e.g. `Sun Mar  7 09:05:02 2010`.
pub fn format_save_time(time: SystemTime) -> String {
    let Some((secs, nanos)) = unix_timestamp(time) else {
        return UNKNOWN_TIME.to_string();
    };
    match DateTime::from_timestamp(secs, nanos) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%a %b %e %H:%M:%S %Y")
            .to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Seconds and nanoseconds relative to the Unix epoch, nanoseconds always
/// non-negative.
fn unix_timestamp(time: SystemTime) -> Option<(i64, u32)> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => Some((i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => Some((-secs, 0)),
                nanos => Some((-secs - 1, 1_000_000_000 - nanos)),
            }
        }
    }
}

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
