use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a record or query date into a UTC timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and bare
/// `YYYY-MM-DD` (midnight). Timestamps without an offset are read as UTC.
/// Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Half-open window `[start, end + 1 day)` built from an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end_exclusive: DateTime<Utc>,
}

impl DateWindow {
    /// Build a window from inclusive start and end dates.
    ///
    /// Returns `None` when either bound cannot be parsed. A start after the
    /// end yields a window that contains nothing.
    pub fn from_inclusive_dates(start: &str, end: &str) -> Option<Self> {
        let start = parse_timestamp(start)?;
        let end_exclusive = parse_timestamp(end)?.checked_add_signed(Duration::days(1))?;
        Some(Self { start, end_exclusive })
    }

    /// Whether `ts` falls inside the window.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts < self.end_exclusive
    }

    /// Whether a raw record date falls inside the window. Unparseable dates
    /// never match.
    pub fn matches(&self, raw: &str) -> bool {
        parse_timestamp(raw).is_some_and(|ts| self.contains(ts))
    }
}
