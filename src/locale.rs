//! Translated month and weekday names and AM/PM markers.
//!
//! The tables are static data. The lookup index over them is built on first
//! use and only read afterwards, so [`resolve`] can be called from any thread
//! without synchronization beyond that first initialization.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Names and markers for one locale. Weekdays are Sunday-first.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleTable {
    tag:            &'static str,
    short_months:   [&'static str; 12],
    long_months:    [&'static str; 12],
    short_weekdays: [&'static str; 7],
    long_weekdays:  [&'static str; 7],
    upper_markers:  [&'static str; 2],
    lower_markers:  [&'static str; 2],
}

impl LocaleTable {
    /// The normalized tag this table is registered under
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    pub const fn short_months(&self) -> &[&'static str; 12] {
        &self.short_months
    }

    pub const fn long_months(&self) -> &[&'static str; 12] {
        &self.long_months
    }

    pub const fn short_weekdays(&self) -> &[&'static str; 7] {
        &self.short_weekdays
    }

    pub const fn long_weekdays(&self) -> &[&'static str; 7] {
        &self.long_weekdays
    }

    /// Month name for `month` in `1..=12`; abbreviated when `short`.
    pub fn month_name(&self, month: u8, short: bool) -> &'static str {
        let names = if short { &self.short_months } else { &self.long_months };
        names[usize::from(month.clamp(1, 12) - 1)]
    }

    /// Weekday name for `weekday` in `0..=6`, Sunday being 0.
    pub fn weekday_name(&self, weekday: u8, short: bool) -> &'static str {
        let names = if short { &self.short_weekdays } else { &self.long_weekdays };
        names[usize::from(weekday % 7)]
    }

    /// The AM/PM marker for `hour` (0-23).
    pub fn meridiem(&self, hour: u8, upper: bool) -> &'static str {
        let markers = if upper { &self.upper_markers } else { &self.lower_markers };
        markers[usize::from(hour >= crate::consts::NOON)]
    }
}

pub static EN_US: LocaleTable = LocaleTable {
    tag:            "en-us",
    short_months:   ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
    long_months:    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    short_weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    long_weekdays:  ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    upper_markers:  ["AM", "PM"],
    lower_markers:  ["am", "pm"],
};

static ES: LocaleTable = LocaleTable {
    tag:            "es",
    short_months:   ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic"],
    long_months:    [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    short_weekdays: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    long_weekdays:  ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
    upper_markers:  ["AM", "PM"],
    lower_markers:  ["am", "pm"],
};

static FR: LocaleTable = LocaleTable {
    tag:            "fr",
    short_months:   [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
    ],
    long_months:    [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    short_weekdays: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    long_weekdays:  ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
    upper_markers:  ["AM", "PM"],
    lower_markers:  ["am", "pm"],
};

static DE: LocaleTable = LocaleTable {
    tag:            "de",
    short_months:   ["Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"],
    long_months:    [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    short_weekdays: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    long_weekdays:  ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
    upper_markers:  ["AM", "PM"],
    lower_markers:  ["am", "pm"],
};

static PT: LocaleTable = LocaleTable {
    tag:            "pt",
    short_months:   ["jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez"],
    long_months:    [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
    short_weekdays: ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"],
    long_weekdays:  [
        "domingo",
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
    ],
    upper_markers:  ["AM", "PM"],
    lower_markers:  ["am", "pm"],
};

// Long month names are in the genitive, as used after a day number.
static RU: LocaleTable = LocaleTable {
    tag:            "ru",
    short_months:   ["янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек"],
    long_months:    [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ],
    short_weekdays: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
    long_weekdays:  ["Воскресенье", "Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота"],
    upper_markers:  ["AM", "PM"],
    lower_markers:  ["am", "pm"],
};

static AR: LocaleTable = LocaleTable {
    tag:            "ar",
    short_months:   ["ينا", "فبر", "مار", "أبر", "ماي", "يون", "يول", "أغس", "سبت", "أكت", "نوف", "ديس"],
    long_months:    [
        "يناير",
        "فبراير",
        "مارس",
        "أبريل",
        "مايو",
        "يونيو",
        "يوليو",
        "أغسطس",
        "سبتمبر",
        "أكتوبر",
        "نوفمبر",
        "ديسمبر",
    ],
    short_weekdays: ["ح", "ن", "ث", "ر", "خ", "ج", "س"],
    long_weekdays:  ["الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت"],
    upper_markers:  ["ص", "م"],
    lower_markers:  ["ص", "م"],
};

// Abbreviations are the first three characters, space padded when shorter.
static TI: LocaleTable = LocaleTable {
    tag:            "ti",
    short_months:   [
        "ጥሪ ", "ለካቲ", "መጋቢ", "ሚያዝ", "ግንቦ", "ሰነ ", "ሓምለ", "ነሓሰ", "መስከ", "ጥቅም", "ሕዳር", "ታሕሳ",
    ],
    long_months:    [
        "ጥሪ", "ለካቲት", "መጋቢት", "ሚያዝያ", "ግንቦት", "ሰነ", "ሓምለ", "ነሓሰ", "መስከረም", "ጥቅምቲ", "ሕዳር", "ታሕሳስ",
    ],
    short_weekdays: ["ሰንበ", "ሰኑይ", "ሰሉስ", "ረቡዕ", "ሓሙስ", "ዓርቢ", "ቀዳም"],
    long_weekdays:  ["ሰንበት", "ሰኑይ", "ሰሉስ", "ረቡዕ", "ሓሙስ", "ዓርቢ", "ቀዳም"],
    upper_markers:  ["ንጉሆ ሰዓተ", "ድሕር ሰዓት"],
    lower_markers:  ["ንጉሆ ሰዓተ", "ድሕር ሰዓት"],
};

static TABLES: LazyLock<HashMap<&'static str, &'static LocaleTable>> = LazyLock::new(|| {
    [&EN_US, &ES, &FR, &DE, &PT, &RU, &AR, &TI]
        .into_iter()
        .map(|table| (table.tag, table))
        .collect()
});

/// Normalizes a locale tag: trimmed, lowercase, `-` separated.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase().replace('_', "-")
}

/// Finds the table for `tag`.
///
/// Tries the exact normalized tag, then its primary language subtag, and
/// falls back to US English. Never fails.
pub fn resolve(tag: &str) -> &'static LocaleTable {
    let tag = normalize_tag(tag);
    if let Some(&table) = TABLES.get(tag.as_str()) {
        return table;
    }
    let language = tag.split('-').next().unwrap_or_default();
    if let Some(&table) = TABLES.get(language) {
        return table;
    }
    debug!("no locale table for '{}', using {}", tag, EN_US.tag);
    &EN_US
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("en-US"), "en-us");
        assert_eq!(normalize_tag(" pt_BR "), "pt-br");
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn test_resolve_exact() {
        assert_eq!(resolve("en-US").tag(), "en-us");
        assert_eq!(resolve("en_us").tag(), "en-us");
        assert_eq!(resolve("RU").tag(), "ru");
    }

    #[test]
    fn test_resolve_primary_language() {
        struct TestCase {
            tag:      &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { tag: "es-EC", expected: "es" },
            TestCase { tag: "es_MX", expected: "es" },
            TestCase { tag: "ar-QA", expected: "ar" },
            TestCase { tag: "pt-BR", expected: "pt" },
            TestCase { tag: "fr-CA", expected: "fr" },
            TestCase { tag: "de-AT-1996", expected: "de" },
            TestCase { tag: "ti-ER", expected: "ti" },
        ];

        for case in &cases {
            assert_eq!(resolve(case.tag).tag(), case.expected, "tag {:?}", case.tag);
        }
    }

    #[test]
    fn test_resolve_falls_back_to_us_english() {
        for tag in ["", "   ", "xx", "zz-ZZ", "en-GB", "-", "klingon"] {
            assert_eq!(resolve(tag), &EN_US, "tag {tag:?}");
        }
    }

    #[test]
    fn test_month_and_weekday_names() {
        let es = resolve("es");
        assert_eq!(es.month_name(1, true), "ene");
        assert_eq!(es.month_name(12, false), "diciembre");
        assert_eq!(es.weekday_name(6, true), "sáb");
        assert_eq!(es.weekday_name(0, false), "domingo");
    }

    #[test]
    fn test_meridiem() {
        let en = resolve("en-US");
        assert_eq!(en.meridiem(0, false), "am");
        assert_eq!(en.meridiem(11, true), "AM");
        assert_eq!(en.meridiem(12, false), "pm");
        assert_eq!(en.meridiem(23, true), "PM");
    }

    #[test]
    fn test_all_tables_complete() {
        for table in TABLES.values() {
            assert!(table.short_months().iter().all(|n| !n.is_empty()), "{}", table.tag());
            assert!(table.long_months().iter().all(|n| !n.is_empty()), "{}", table.tag());
            assert!(table.short_weekdays().iter().all(|n| !n.is_empty()), "{}", table.tag());
            assert!(table.long_weekdays().iter().all(|n| !n.is_empty()), "{}", table.tag());
            assert!(table.upper_markers.iter().all(|n| !n.is_empty()), "{}", table.tag());
            assert!(table.lower_markers.iter().all(|n| !n.is_empty()), "{}", table.tag());
        }
    }

    proptest! {
        #[test]
        fn resolve_is_total(tag in "\\PC{0,16}") {
            let table = resolve(&tag);
            prop_assert!(TABLES.contains_key(table.tag()));
            prop_assert_eq!(table.short_months().len(), 12);
            prop_assert_eq!(table.long_weekdays().len(), 7);
        }
    }
}
