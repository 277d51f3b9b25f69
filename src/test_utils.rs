//! Fixtures shared by the unit tests.

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};

use crate::render::{DecodedInstant, Decompose};

#[allow(clippy::too_many_arguments)]
fn at(offset_seconds: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ns: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_seconds)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        .with_nanosecond(ns)
        .unwrap()
}

/// 2006-01-02T15:04:05.123456789-07:00, a Monday afternoon
pub fn d1() -> DateTime<FixedOffset> {
    at(-7 * 3600, 2006, 1, 2, 15, 4, 5, 123_456_789)
}

/// 1998-04-18T09:45:30.123456789Z, a Saturday morning
pub fn d2() -> DateTime<FixedOffset> {
    at(0, 1998, 4, 18, 9, 45, 30, 123_456_789)
}

/// 2030-12-31T23:59:59.987654321Z, a Tuesday night
pub fn d3() -> DateTime<FixedOffset> {
    at(0, 2030, 12, 31, 23, 59, 59, 987_654_321)
}

/// A UTC instant with no fractional seconds
pub fn decoded(y: i32, mo: u32, d: u32, h: u8, mi: u32, s: u32) -> DecodedInstant {
    Utc.with_ymd_and_hms(y, mo, d, u32::from(h), mi, s).unwrap().decompose()
}
