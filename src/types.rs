use std::fmt;

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, ISO8601_DATE,
    LEAP_YEAR_CYCLE, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MIN_DAY, NANOS_PER_SECOND,
};
use crate::prelude::*;
use crate::render::{DecodedInstant, Decompose};
use crate::token::DATE_ONLY_LAYOUTS;
use crate::{DateError, FormatError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Timelike};
use serde::{Serialize, Serializer};

/// A local Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date, validating the month and the day against the
    /// length of that month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth`, `DateError::InvalidDay`, or
    /// `DateError::InvalidYear` when the year is beyond what can be
    /// represented.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(DateError::InvalidYear(year))
    }

    /// The local calendar date of `dt` in its own timezone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    // chrono keeps month and day within u8 range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Joins this date and `time` into an instant in `tz`.
    ///
    /// A local time that occurs twice (a DST fold) resolves to the earlier
    /// instant. One skipped by a DST gap is read with the offset in force
    /// before the gap, so it lands after the transition: 02:30 on a night
    /// that jumps from 02:00 to 03:00 becomes 03:30.
    pub fn combine<Tz: TimeZone>(&self, time: TimeOfDay, tz: &Tz) -> DateTime<Tz> {
        let local = self.0.and_time(time.0);
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return dt;
        }

        let offset = local
            .checked_sub_signed(TimeDelta::hours(1))
            .and_then(|before| tz.offset_from_local_datetime(&before).earliest())
            .unwrap_or_else(|| tz.offset_from_utc_datetime(&local));
        let utc = local
            .checked_sub_signed(TimeDelta::seconds(i64::from(offset.fix().local_minus_utc())))
            .unwrap_or(local);
        tz.from_utc_datetime(&utc)
    }

    /// Formats this date with a date-only layout.
    ///
    /// # Errors
    /// Returns `FormatError` if the layout holds anything other than date
    /// symbols and literal text.
    pub fn format(&self, layout: &str, locale: &str) -> Result<String, FormatError> {
        crate::format(self, layout, locale, &DATE_ONLY_LAYOUTS)
    }

    /// Day of the week, 0 (Sunday) through 6.
    #[allow(clippy::cast_possible_truncation)]
    pub fn weekday(&self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// Day of the year, 1 through 366.
    #[allow(clippy::cast_possible_truncation)]
    pub fn year_day(&self) -> u16 {
        self.0.ordinal() as u16
    }

    /// Week of the year, 1 through 54. Weeks start on Sunday and the days
    /// before the first Sunday make up week 1.
    #[allow(clippy::cast_possible_truncation)]
    pub fn week_num(&self) -> u8 {
        let wday = u16::from(self.weekday());
        let yday = self.year_day() - 1;
        ((yday + 7 - wday) / 7 + 1) as u8
    }
}

/// `YYYY-MM-DD`
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = self.format(ISO8601_DATE, "").map_err(|_| fmt::Error)?;
        f.write_str(&iso)
    }
}

impl Decompose for Date {
    /// Midnight UTC on this date.
    fn decompose(&self) -> DecodedInstant {
        self.0.and_time(TimeOfDay::ZERO.0).and_utc().decompose()
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A time of day on a 24 hour wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{:02}:{:02}:{:02}.{:06}",
    "_0.hour()",
    "_0.minute()",
    "_0.second()",
    "_0.nanosecond() % NANOS_PER_SECOND / 1_000"
)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Midnight
    pub const ZERO: Self = Self(NaiveTime::MIN);

    /// # Errors
    /// Returns `DateError::InvalidTime` if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, DateError> {
        let err = DateError::InvalidTime {
            hour,
            minute,
            second,
            nanosecond,
        };
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND || nanosecond >= NANOS_PER_SECOND {
            return Err(err);
        }
        NaiveTime::from_hms_nano_opt(u32::from(hour), u32::from(minute), u32::from(second), nanosecond)
            .map(Self)
            .ok_or(err)
    }

    /// The wall clock time of `dt` in its own timezone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.time())
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn hour(&self) -> u8 {
        self.0.hour() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn minute(&self) -> u8 {
        self.0.minute() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn second(&self) -> u8 {
        self.0.second() as u8
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
