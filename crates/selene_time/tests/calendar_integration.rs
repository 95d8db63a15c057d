//! Integration tests for UTC parsing and Julian Date conversion.
//!
//! Pure-math tests (no external data needed).

use selene_time::{UtcTime, calendar_to_jd, jd_to_calendar};

#[test]
fn parse_display_roundtrip() {
    for s in [
        "1920-01-21T05:25:00Z",
        "2000-01-01T12:00:00Z",
        "2024-02-29T23:59:59Z",
        "2099-12-31T00:00:00Z",
    ] {
        let t: UtcTime = s.parse().unwrap();
        assert_eq!(t.to_string(), s);
    }
}

#[test]
fn consecutive_days_differ_by_one_jd() {
    let mut prev = UtcTime::date(1999, 12, 25).to_jd();
    for i in 1..15 {
        let t = UtcTime::date(1999, 12, 25).add_days(i as f64);
        let jd = t.to_jd();
        assert!((jd - prev - 1.0).abs() < 1e-6, "day {i}: {t}");
        prev = jd;
    }
}

#[test]
fn hourly_sweep_roundtrips_through_jd() {
    let start = UtcTime::new(2024, 6, 1, 0, 0, 0.0);
    for h in 0..(24 * 40) {
        let t = start.add_hours(h as f64);
        assert_eq!(UtcTime::from_jd(t.to_jd()), t, "hour {h}");
        assert_eq!(t.second, 0.0, "hour {h}: {t}");
    }
}

#[test]
fn calendar_inverse_over_a_century() {
    let mut jd = calendar_to_jd(1920, 1, 1.0);
    let end = calendar_to_jd(2020, 1, 1.0);
    while jd < end {
        let (y, m, d) = jd_to_calendar(jd);
        let back = calendar_to_jd(y, m, d);
        assert!((back - jd).abs() < 1e-6, "jd {jd} -> {y}-{m}-{d}");
        jd += 97.3;
    }
}
