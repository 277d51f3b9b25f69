//! Layout-driven date and time formatting.
//!
//! Layouts are written with a small set of repeated symbol characters rather
//! than `%` directives:
//!
//! | Symbol | Lengths | Renders |
//! |---|---|---|
//! | `Y` | 2, 4 | year |
//! | `M` | 1, 2, 3, 4 | month number, abbreviated or full name |
//! | `D` | 1, 2 | day of month |
//! | `E` | 3, 4 | abbreviated or full weekday name |
//! | `t` | 1, 2 | hour, 24 hour clock |
//! | `h` | 1, 2 | hour, 12 hour clock |
//! | `m` | 1, 2 | minute |
//! | `s` | 1, 2 | second |
//! | `f` | 1, 2, 3, 6, 9 | fractional second digits |
//! | `Z` | 1, 3 | UTC offset, `Z` when zero (1) or always `±hh:mm` (3) |
//! | `A`, `a` | 2 | AM/PM marker, upper or lower case |
//!
//! Everything else except digits is copied through as is.
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use layout_date::{DATE_TIME_LAYOUTS, format};
//!
//! let mst = FixedOffset::west_opt(7 * 3600).unwrap();
//! let dt = mst.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
//!
//! let s = format(&dt, "EEE D MMM YYYY h:mm aa", "en-US", &DATE_TIME_LAYOUTS).unwrap();
//! assert_eq!(s, "Mon 2 Jan 2006 3:04 pm");
//! ```

#[macro_use]
mod logging;

mod consts;
mod locale;
mod prelude;
mod render;
mod token;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use locale::{LocaleTable, normalize_tag, resolve};
pub use render::{DecodedInstant, Decompose, render};
pub use token::{DATE_ONLY_LAYOUTS, DATE_TIME_LAYOUTS, LayoutKind, LayoutToken, Symbol, TokenSet, tokenize};
pub use types::{Date, TimeOfDay, is_leap_year};

use crate::prelude::*;

/// A layout held a run that the active [`TokenSet`] does not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{token}' is not valid in a {kind} formatting layout")]
pub struct FormatError {
    token: String,
    kind:  LayoutKind,
}

impl FormatError {
    pub(crate) fn new(token: &str, kind: LayoutKind) -> Self {
        Self {
            token: token.to_owned(),
            kind,
        }
    }

    /// The offending run, exactly as written in the layout
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Which kind of layout rejected it
    pub const fn kind(&self) -> LayoutKind {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid time of day: {hour:02}:{minute:02}:{second:02}.{nanosecond:09}")]
    InvalidTime {
        hour:       u8,
        minute:     u8,
        second:     u8,
        nanosecond: u32,
    },
}

impl std::error::Error for DateError {}

/// Formats `instant` according to `layout`.
///
/// Month and weekday names and AM/PM markers come from the table for
/// `locale` (see [`resolve`]); an unknown locale falls back to US English.
///
/// # Errors
/// Returns [`FormatError`] if `layout` holds a run that `tokens` does not
/// allow. Nothing is rendered in that case.
pub fn format<I>(instant: &I, layout: &str, locale: &str, tokens: &TokenSet) -> Result<String, FormatError>
where
    I: Decompose + ?Sized,
{
    let tokens = tokenize(layout, tokens)?;
    let table = resolve(locale);
    Ok(render(&tokens, &instant.decompose(), table))
}
