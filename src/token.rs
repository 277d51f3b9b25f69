//! Layout tokenizing.
//!
//! A layout is scanned left to right into literal runs and pattern runs. A
//! pattern run is the maximal run of one repeated symbol character, and its
//! length picks the rendering (e.g. `MM` is a padded month number, `MMMM` is
//! the full month name). Which symbols and lengths are legal depends on the
//! [`TokenSet`] in force.

use serde::Serialize;

use crate::FormatError;
use crate::prelude::*;

/// The closed alphabet of pattern symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `Y`: year, 2 or 4 digits
    Year,
    /// `M`: month number (1-2), abbreviated name (3) or full name (4)
    Month,
    /// `D`: day of month
    Day,
    /// `E`: weekday name, abbreviated (3) or full (4)
    Weekday,
    /// `t`: hour on a 24 hour clock
    Hour24,
    /// `h`: hour on a 12 hour clock
    Hour12,
    /// `m`: minute
    Minute,
    /// `s`: second
    Second,
    /// `f`: fractional second digits
    Fraction,
    /// `Z`: UTC offset
    Offset,
    /// `A`: uppercase AM/PM marker
    MeridiemUpper,
    /// `a`: lowercase am/pm marker
    MeridiemLower,
}

impl Symbol {
    pub const ALL: [Self; 12] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Weekday,
        Self::Hour24,
        Self::Hour12,
        Self::Minute,
        Self::Second,
        Self::Fraction,
        Self::Offset,
        Self::MeridiemUpper,
        Self::MeridiemLower,
    ];

    /// Maps a layout character onto its symbol, if it is one.
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'Y' => Self::Year,
            'M' => Self::Month,
            'D' => Self::Day,
            'E' => Self::Weekday,
            't' => Self::Hour24,
            'h' => Self::Hour12,
            'm' => Self::Minute,
            's' => Self::Second,
            'f' => Self::Fraction,
            'Z' => Self::Offset,
            'A' => Self::MeridiemUpper,
            'a' => Self::MeridiemLower,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month => 'M',
            Self::Day => 'D',
            Self::Weekday => 'E',
            Self::Hour24 => 't',
            Self::Hour12 => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
            Self::Fraction => 'f',
            Self::Offset => 'Z',
            Self::MeridiemUpper => 'A',
            Self::MeridiemLower => 'a',
        }
    }

    /// Run lengths this symbol can be written with.
    pub const fn allowed_lengths(self) -> &'static [usize] {
        match self {
            Self::Year => &[2, 4],
            Self::Month => &[1, 2, 3, 4],
            Self::Weekday => &[3, 4],
            Self::Day | Self::Hour24 | Self::Hour12 | Self::Minute | Self::Second => &[1, 2],
            Self::Fraction => &[1, 2, 3, 6, 9],
            Self::Offset => &[1, 3],
            Self::MeridiemUpper | Self::MeridiemLower => &[2],
        }
    }
}

/// One piece of a tokenized layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutToken<'a> {
    /// Text copied to the output as is
    Literal(&'a str),
    /// A symbol and the length of its run
    Pattern(Symbol, usize),
}

/// The formatting context a [`TokenSet`] belongs to. It selects the wording
/// of [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "datetime")]
    DateTime,
}

/// The symbols legal in one formatting context. Each symbol carries the
/// lengths given by [`Symbol::allowed_lengths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet {
    kind:    LayoutKind,
    symbols: &'static [Symbol],
}

/// Layouts for formatting a calendar date. Time-of-day symbols are rejected.
pub const DATE_ONLY_LAYOUTS: TokenSet = TokenSet {
    kind:    LayoutKind::Date,
    symbols: &[Symbol::Year, Symbol::Month, Symbol::Day, Symbol::Weekday],
};

/// Layouts for formatting a full date and time.
pub const DATE_TIME_LAYOUTS: TokenSet = TokenSet {
    kind:    LayoutKind::DateTime,
    symbols: &Symbol::ALL,
};

impl TokenSet {
    pub const fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// Lengths `symbol` may be written with here, or `None` if the symbol is
    /// not part of this set at all.
    pub fn allowed_lengths(&self, symbol: Symbol) -> Option<&'static [usize]> {
        self.symbols
            .contains(&symbol)
            .then(|| symbol.allowed_lengths())
    }

    pub fn allows(&self, symbol: Symbol, length: usize) -> bool {
        self.allowed_lengths(symbol)
            .is_some_and(|lengths| lengths.contains(&length))
    }

    /// Every (symbol, allowed lengths) pair in this set.
    pub fn entries(&self) -> impl Iterator<Item = (Symbol, &'static [usize])> + '_ {
        self.symbols.iter().map(|&s| (s, s.allowed_lengths()))
    }
}

/// Splits `layout` into tokens, rejecting anything `tokens` does not allow.
///
/// The whole layout is consumed or nothing is returned. Digits are never
/// literal text: a bare digit fails as a token of its own.
///
/// # Errors
/// Returns [`FormatError`] naming the first offending run.
pub fn tokenize<'a>(layout: &'a str, tokens: &TokenSet) -> Result<Vec<LayoutToken<'a>>, FormatError> {
    let mut out = Vec::new();
    let mut literal_start: Option<usize> = None;
    let mut chars = layout.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            return Err(reject(&layout[start..start + c.len_utf8()], tokens));
        }
        let Some(symbol) = Symbol::from_char(c) else {
            literal_start.get_or_insert(start);
            continue;
        };
        if let Some(lit) = literal_start.take() {
            out.push(LayoutToken::Literal(&layout[lit..start]));
        }

        let mut end = start + c.len_utf8();
        let mut length = 1;
        while let Some(&(i, next)) = chars.peek() {
            if next != c {
                break;
            }
            chars.next();
            end = i + next.len_utf8();
            length += 1;
        }

        if !tokens.allows(symbol, length) {
            return Err(reject(&layout[start..end], tokens));
        }
        out.push(LayoutToken::Pattern(symbol, length));
    }

    if let Some(lit) = literal_start {
        out.push(LayoutToken::Literal(&layout[lit..]));
    }
    Ok(out)
}

fn reject(run: &str, tokens: &TokenSet) -> FormatError {
    trace!("rejecting '{}' in a {} layout", run, tokens.kind());
    FormatError::new(run, tokens.kind())
}
