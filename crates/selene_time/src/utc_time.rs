//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical moment type used throughout the
//! workspace. Leap seconds are ignored: a UTC day is always 86 400 s, which
//! is all the synodic model needs.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TimeError;
use crate::julian::{
    MILLIS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, jd_to_calendar,
    unix_seconds_to_jd,
};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub const fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub const fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Read the system clock.
    pub fn now() -> Result<Self, TimeError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TimeError::ClockBeforeUnixEpoch)?;
        Ok(Self::from_unix_seconds(elapsed.as_secs_f64()))
    }

    /// Julian Date (UTC) of this moment.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar moment for a Julian Date (UTC), rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let ms = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64).round() as i64;
        let whole_days = ms.div_euclid(MILLIS_PER_DAY);
        let ms_of_day = ms.rem_euclid(MILLIS_PER_DAY);

        // Sample the calendar at noon so the day number never straddles midnight.
        let (year, month, day_frac) = jd_to_calendar(UNIX_EPOCH_JD + whole_days as f64 + 0.5);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
            hour,
            minute,
            second,
        }
    }

    /// Calendar moment for seconds since 1970-01-01T00:00:00Z.
    pub fn from_unix_seconds(secs: f64) -> Self {
        Self::from_jd(unix_seconds_to_jd(secs))
    }

    /// This moment shifted by a (possibly negative or fractional) number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_jd(self.to_jd() + days)
    }

    /// This moment shifted by a number of hours.
    pub fn add_hours(&self, hours: f64) -> Self {
        self.add_days(hours / 24.0)
    }

    fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::OutOfRange("month"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::OutOfRange("day"));
        }
        if self.hour > 23 {
            return Err(TimeError::OutOfRange("hour"));
        }
        if self.minute > 59 {
            return Err(TimeError::OutOfRange("minute"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::OutOfRange("second"));
        }
        Ok(())
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ssZ`, `YYYY-MM-DDThh:mm:ss`, `YYYY-MM-DDThh:mm`
    /// or a bare `YYYY-MM-DD` (midnight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 || date_parts[0].is_empty() {
            return Err(TimeError::InvalidFormat(format!(
                "expected YYYY-MM-DD[Thh:mm:ssZ], got {s}"
            )));
        }
        let year: i32 = parse_field(date_parts[0])?;
        let month: u32 = parse_field(date_parts[1])?;
        let day: u32 = parse_field(date_parts[2])?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                match time_parts.as_slice() {
                    [h, m] => (parse_field(h)?, parse_field(m)?, 0.0),
                    [h, m, sec] => (parse_field(h)?, parse_field(m)?, parse_field(sec)?),
                    _ => {
                        return Err(TimeError::InvalidFormat(format!(
                            "invalid time of day: {t}"
                        )));
                    }
                }
            }
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

fn parse_field<T: FromStr>(s: &str) -> Result<T, TimeError>
where
    T::Err: std::fmt::Display,
{
    s.parse()
        .map_err(|e| TimeError::InvalidFormat(format!("{s:?}: {e}")))
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
