use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::consts::{NANOS_PER_SECOND, NOON, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::locale::LocaleTable;
use crate::token::{LayoutToken, Symbol};

/// The calendar fields of an instant in its own timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedInstant {
    pub year:           i32,
    /// 1-12
    pub month:          u8,
    pub day:            u8,
    /// 0-23
    pub hour:           u8,
    pub minute:         u8,
    pub second:         u8,
    pub nanosecond:     u32,
    /// Local time minus UTC
    pub offset_seconds: i32,
    /// 0-6, Sunday being 0
    pub weekday:        u8,
}

/// Breaks an instant down into calendar fields.
pub trait Decompose {
    fn decompose(&self) -> DecodedInstant;
}

impl Decompose for DecodedInstant {
    fn decompose(&self) -> DecodedInstant {
        *self
    }
}

impl<Tz: TimeZone> Decompose for DateTime<Tz> {
    // chrono range-limits these fields, so narrowing them is lossless.
    #[allow(clippy::cast_possible_truncation)]
    fn decompose(&self) -> DecodedInstant {
        DecodedInstant {
            year:           self.year(),
            month:          self.month() as u8,
            day:            self.day() as u8,
            hour:           self.hour() as u8,
            minute:         self.minute() as u8,
            second:         self.second() as u8,
            // leap seconds are folded back into the last second
            nanosecond:     self.nanosecond() % NANOS_PER_SECOND,
            offset_seconds: self.offset().fix().local_minus_utc(),
            weekday:        self.weekday().num_days_from_sunday() as u8,
        }
    }
}

/// Writes `tokens` out for `instant` using the names in `locale`.
pub fn render(tokens: &[LayoutToken<'_>], instant: &DecodedInstant, locale: &LocaleTable) -> String {
    let mut out = String::new();
    for token in tokens {
        match *token {
            LayoutToken::Literal(text) => out.push_str(text),
            LayoutToken::Pattern(symbol, length) => render_pattern(&mut out, symbol, length, instant, locale),
        }
    }
    out
}

fn render_pattern(out: &mut String, symbol: Symbol, length: usize, t: &DecodedInstant, locale: &LocaleTable) {
    match symbol {
        Symbol::Year if length == 2 => push_number(out, t.year.rem_euclid(100), 2),
        Symbol::Year => push_number(out, t.year, length),
        Symbol::Month if length >= 3 => out.push_str(locale.month_name(t.month, length == 3)),
        Symbol::Month => push_number(out, t.month, length),
        Symbol::Day => push_number(out, t.day, length),
        Symbol::Weekday => out.push_str(locale.weekday_name(t.weekday, length == 3)),
        Symbol::Hour24 => push_number(out, t.hour, length),
        Symbol::Hour12 => push_number(out, twelve_hour(t.hour), length),
        Symbol::Minute => push_number(out, t.minute, length),
        Symbol::Second => push_number(out, t.second, length),
        Symbol::Fraction => push_fraction(out, t.nanosecond, length),
        Symbol::Offset => push_offset(out, t.offset_seconds, length == 1),
        Symbol::MeridiemUpper => out.push_str(locale.meridiem(t.hour, true)),
        Symbol::MeridiemLower => out.push_str(locale.meridiem(t.hour, false)),
    }
}

/// Zero pads to `length` when it is 2 or more.
fn push_number(out: &mut String, value: impl Into<i64>, length: usize) {
    let value = value.into();
    let width = if length >= 2 { length } else { 0 };
    out.push_str(&format!("{value:0width$}"));
}

fn push_fraction(out: &mut String, nanosecond: u32, digits: usize) {
    let digits = digits.min(9);
    let scale = 10u32.pow(9 - u32::try_from(digits).unwrap_or(9));
    out.push_str(&format!("{:0digits$}", nanosecond / scale));
}

/// `±hh:mm`, or `Z` for a zero offset when `zulu` is set.
fn push_offset(out: &mut String, offset_seconds: i32, zulu: bool) {
    if zulu && offset_seconds == 0 {
        out.push('Z');
        return;
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.unsigned_abs();
    let hours = abs / SECONDS_PER_HOUR;
    let minutes = abs % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    out.push_str(&format!("{sign}{hours:02}:{minutes:02}"));
}

const fn twelve_hour(hour: u8) -> u8 {
    match hour % NOON {
        0 => NOON,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN_US, resolve};
    use crate::test_utils::{d1, decoded};
    use crate::token::{DATE_TIME_LAYOUTS, tokenize};

    fn render_layout(layout: &str, instant: &DecodedInstant) -> String {
        let tokens = tokenize(layout, &DATE_TIME_LAYOUTS).unwrap();
        render(&tokens, instant, &EN_US)
    }

    #[test]
    fn test_decompose_datetime() {
        let t = d1().decompose();
        assert_eq!(
            t,
            DecodedInstant {
                year:           2006,
                month:          1,
                day:            2,
                hour:           15,
                minute:         4,
                second:         5,
                nanosecond:     123_456_789,
                offset_seconds: -7 * 3600,
                weekday:        1,
            }
        );
        assert_eq!(t.decompose(), t);
    }

    #[test]
    fn test_numeric_padding() {
        let t = decoded(2006, 1, 2, 3, 4, 5);
        assert_eq!(render_layout("M/D t:m:s", &t), "1/2 3:4:5");
        assert_eq!(render_layout("MM/DD tt:mm:ss", &t), "01/02 03:04:05");
    }

    #[test]
    fn test_years() {
        assert_eq!(render_layout("YYYY YY", &decoded(2006, 1, 1, 0, 0, 0)), "2006 06");
        assert_eq!(render_layout("YYYY YY", &decoded(2000, 1, 1, 0, 0, 0)), "2000 00");
        assert_eq!(render_layout("YYYY YY", &decoded(987, 1, 1, 0, 0, 0)), "0987 87");
        assert_eq!(render_layout("YYYY YY", &decoded(12345, 1, 1, 0, 0, 0)), "12345 45");
    }

    #[test]
    fn test_twelve_hour_clock() {
        struct TestCase {
            hour:     u8,
            expected: &'static str,
        }

        let cases = [
            TestCase { hour: 0, expected: "12 am AM" },
            TestCase { hour: 1, expected: "1 am AM" },
            TestCase { hour: 11, expected: "11 am AM" },
            TestCase { hour: 12, expected: "12 pm PM" },
            TestCase { hour: 13, expected: "1 pm PM" },
            TestCase { hour: 23, expected: "11 pm PM" },
        ];

        for case in &cases {
            let t = decoded(2006, 1, 2, case.hour, 0, 0);
            assert_eq!(render_layout("h aa AA", &t), case.expected, "hour {}", case.hour);
        }
        assert_eq!(render_layout("hh", &decoded(2006, 1, 2, 9, 0, 0)), "09");
    }

    #[test]
    fn test_fraction_truncates() {
        let mut t = d1().decompose();
        assert_eq!(render_layout("f ff fff ffffff fffffffff", &t), "1 12 123 123456 123456789");

        t.nanosecond = 999_999_999;
        assert_eq!(render_layout("f fff", &t), "9 999");

        t.nanosecond = 1_000;
        assert_eq!(render_layout("fff ffffff fffffffff", &t), "000 000001 000001000");
    }

    #[test]
    fn test_offsets() {
        let mut t = d1().decompose();
        assert_eq!(render_layout("Z ZZZ", &t), "-07:00 -07:00");

        t.offset_seconds = 0;
        assert_eq!(render_layout("Z ZZZ", &t), "Z +00:00");

        t.offset_seconds = 5 * 3600 + 45 * 60;
        assert_eq!(render_layout("Z ZZZ", &t), "+05:45 +05:45");

        t.offset_seconds = -(9 * 3600 + 30 * 60);
        assert_eq!(render_layout("ZZZ", &t), "-09:30");
    }

    #[test]
    fn test_pushers_append() {
        let mut out = String::from(">");
        push_number(&mut out, 7u8, 3);
        push_number(&mut out, -5i32, 1);
        push_fraction(&mut out, 123_456_789, 12);
        push_fraction(&mut out, 5_000_000, 2);
        push_offset(&mut out, -(3 * 3600 + 30 * 60 + 15), false);
        push_offset(&mut out, 0, true);
        assert_eq!(out, ">007-512345678900-03:30Z");
    }

    #[test]
    fn test_names() {
        let t = d1().decompose();
        assert_eq!(render_layout("EEE EEEE MMM MMMM", &t), "Mon Monday Jan January");

        let tokens = tokenize("EEEE D MMMM", &DATE_TIME_LAYOUTS).unwrap();
        assert_eq!(render(&tokens, &t, resolve("ru")), "Понедельник 2 января");
    }

    #[test]
    fn test_literals_verbatim() {
        let t = d1().decompose();
        assert_eq!(render_layout("[ YYYY ] — ¿?", &t), "[ 2006 ] — ¿?");
    }
}
