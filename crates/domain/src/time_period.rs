use crate::errors::DomainError;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::fmt;

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;

/// Longest accepted trailing window, roughly 10,000 years.
const MAX_RELATIVE_DAYS: i64 = 3_652_425;

/// Window of time a stats query is restricted to.
///
/// Built once per request from the raw query parameters and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePeriod {
    /// No period given: the query spans all recorded data.
    Unbounded,
    /// Trailing window ending at evaluation time.
    Relative(RelativePeriod),
    /// Window with explicit, fixed instants on one or both sides.
    Absolute(AbsolutePeriod),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativePeriod {
    span: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsolutePeriod {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl TimePeriod {
    /// Builds the period from the raw `lastTimePeriod`, `startDate` and
    /// `endDate` parameters. A relative duration takes precedence over dates.
    pub fn from_query(
        last: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, DomainError> {
        if let Some(raw) = last {
            return RelativePeriod::parse(raw).map(TimePeriod::Relative);
        }

        if start.is_none() && end.is_none() {
            return Ok(TimePeriod::Unbounded);
        }

        let start = start.map(parse_bound).transpose()?;
        let end = end.map(parse_bound).transpose()?;
        AbsolutePeriod::new(start, end).map(TimePeriod::Absolute)
    }

    /// Resolves the window into concrete instants as seen at `now`.
    ///
    /// `None` on the start side means "from the first recorded measurement".
    pub fn bounds(&self, now: DateTime<Utc>) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        match self {
            TimePeriod::Unbounded => (None, None),
            TimePeriod::Relative(relative) => {
                let start = now
                    .checked_sub_signed(relative.span)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                (Some(start), Some(now))
            }
            TimePeriod::Absolute(absolute) => (absolute.start, Some(absolute.end.unwrap_or(now))),
        }
    }

    pub fn as_absolute(&self) -> Option<&AbsolutePeriod> {
        match self {
            TimePeriod::Absolute(absolute) => Some(absolute),
            _ => None,
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePeriod::Unbounded => write!(f, "unbounded"),
            TimePeriod::Relative(relative) => {
                write!(f, "last {}s", relative.span.num_seconds())
            }
            TimePeriod::Absolute(absolute) => {
                let fmt_bound = |bound: Option<DateTime<Utc>>| {
                    bound.map_or_else(|| "open".to_string(), |b| b.to_rfc3339())
                };
                write!(f, "{}..{}", fmt_bound(absolute.start), fmt_bound(absolute.end))
            }
        }
    }
}

impl RelativePeriod {
    pub fn new(span: Duration) -> Result<Self, DomainError> {
        if span <= Duration::zero() {
            return Err(DomainError::InvalidTimePeriod(
                "relative period must be positive".to_string(),
            ));
        }
        if span > Duration::days(MAX_RELATIVE_DAYS) {
            return Err(DomainError::InvalidTimePeriod(format!(
                "relative period exceeds {} days",
                MAX_RELATIVE_DAYS
            )));
        }
        Ok(Self { span })
    }

    /// Parses strings like "30m", "24h", "7d", "1w" or "1.5h". The number is
    /// plain digits with at most one decimal point.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidTimePeriod(format!("invalid duration '{}'", raw));

        let raw = raw.trim();
        if raw.len() < 2 || !raw.is_char_boundary(raw.len() - 1) {
            return Err(invalid());
        }

        let (value_str, unit) = raw.split_at(raw.len() - 1);
        if !is_plain_decimal(value_str) {
            return Err(invalid());
        }
        let value: f64 = value_str.parse().map_err(|_| invalid())?;
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid());
        }

        let unit_ms = match unit {
            "m" => MS_PER_MINUTE,
            "h" => MS_PER_HOUR,
            "d" => MS_PER_DAY,
            "w" => MS_PER_WEEK,
            _ => return Err(invalid()),
        };

        let millis = value * unit_ms;
        if millis >= i64::MAX as f64 {
            return Err(invalid());
        }
        let span = Duration::try_milliseconds(millis as i64).ok_or_else(invalid)?;
        Self::new(span)
    }

    pub fn span(&self) -> Duration {
        self.span
    }
}

impl AbsolutePeriod {
    /// Both bounds are truncated to whole seconds, the precision stats are
    /// cached at, so the queried window always matches its cache key.
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        let start = start.map(truncate_to_second).transpose()?;
        let end = end.map(truncate_to_second).transpose()?;
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DomainError::InvalidTimePeriod(format!(
                    "start {} is after end {}",
                    s.to_rfc3339(),
                    e.to_rfc3339()
                )));
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Both bounds, when the window is closed on both sides.
    pub fn closed_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.start.zip(self.end)
    }
}

fn truncate_to_second(instant: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
    instant
        .with_nanosecond(0)
        .ok_or_else(|| DomainError::InvalidTimePeriod(format!("invalid instant {}", instant)))
}

fn is_plain_decimal(raw: &str) -> bool {
    raw.bytes().any(|b| b.is_ascii_digit())
        && raw.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && raw.bytes().filter(|&b| b == b'.').count() <= 1
}

fn parse_bound(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    parse_instant(raw)
        .ok_or_else(|| DomainError::InvalidTimePeriod(format!("invalid date '{}'", raw)))
}

/// Accepts RFC 3339, "YYYY-MM-DD HH:MM:SS" (UTC) or a bare "YYYY-MM-DD"
/// (midnight UTC).
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
