/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Largest valid hour on a 24 hour clock
pub const MAX_HOUR: u8 = 23;
/// Largest valid minute
pub const MAX_MINUTE: u8 = 59;
/// Largest valid second (leap seconds are not representable)
pub const MAX_SECOND: u8 = 59;

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;
pub(crate) const SECONDS_PER_MINUTE: u32 = 60;
pub(crate) const SECONDS_PER_HOUR: u32 = 3_600;

/// Hour at which the afternoon marker takes over
pub(crate) const NOON: u8 = 12;

/// Layout for ISO 8601 calendar dates
pub const ISO8601_DATE: &str = "YYYY-MM-DD";
