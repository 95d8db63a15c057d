//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), ch. 7. The forward conversion
//! assumes the proleptic Gregorian calendar; the inverse switches to the
//! Julian calendar before JD 2299160.5 (1582-Oct-15).

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Milliseconds in one day.
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Convert a calendar date to a Julian Date.
///
/// `day_frac` carries the time of day as a fraction, so noon on the 15th
/// is `15.5`.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day_frac)
}

/// Julian Date for a count of seconds since the Unix epoch.
pub fn unix_seconds_to_jd(secs: f64) -> f64 {
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        // J2000.0
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch() {
        let jd = calendar_to_jd(1970, 1, 1.0);
        assert!((jd - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // Meeus example 7.a: 1957-Oct-4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn reference_new_moon_1920() {
        // 1920-Jan-21 05:25 UTC
        let jd = calendar_to_jd(1920, 1, 21.0 + 5.0 / 24.0 + 25.0 / 1440.0);
        assert!((jd - 2_422_344.725_694).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn inverse_recovers_date() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!(y, 1957);
        assert_eq!(m, 10);
        assert!((d - 4.81).abs() < 1e-6);
    }

    #[test]
    fn inverse_january_and_february() {
        let jd = calendar_to_jd(2024, 2, 29.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.25).abs() < 1e-6);
    }

    #[test]
    fn unix_seconds_conversion() {
        assert_eq!(unix_seconds_to_jd(0.0), UNIX_EPOCH_JD);
        assert!((unix_seconds_to_jd(SECONDS_PER_DAY) - (UNIX_EPOCH_JD + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 13), 0);
    }
}
