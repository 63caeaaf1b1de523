//! Display formatting for dates, sizes, and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;

const UNKNOWN_DATE: &str = "Unknown";
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// A stored timestamp: Firestore `Timestamp` seconds or epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    Seconds(i64),
    Millis(i64),
}

impl Timestamp {
    fn to_datetime(self) -> Option<OffsetDateTime> {
        let nanos = match self {
            Self::Seconds(s) => i128::from(s) * 1_000_000_000,
            Self::Millis(ms) => i128::from(ms) * 1_000_000,
        };
        OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
    }
}

/// `"January 5, 2024"` in UTC. Missing, zero, or out-of-range timestamps
/// read `"Unknown"`.
pub fn format_date(timestamp: Option<Timestamp>) -> String {
    let Some(ts) = timestamp.filter(|ts| !matches!(ts, Timestamp::Seconds(0) | Timestamp::Millis(0))) else {
        return UNKNOWN_DATE.to_owned();
    };
    match ts.to_datetime() {
        Some(dt) => format!("{} {}, {}", dt.month(), dt.day(), dt.year()),
        None => UNKNOWN_DATE.to_owned(),
    }
}

/// Human-readable size in 1024 steps, at most two decimals with trailing
/// zeros dropped (`1536` is `"1.5 KB"`). Sizes past a terabyte stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }
    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / scale as f64;
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Cut `text` to `max_chars` characters and append `...` when it was longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => format!("{}...", &text[..byte]),
        None => text.to_owned(),
    }
}

/// Category card label: `"1 work"`, `"3 works"`.
pub fn works_label(count: u64) -> String {
    if count == 1 { "1 work".to_owned() } else { format!("{count} works") }
}
