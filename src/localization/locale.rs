//! Built-in locale table.

use chrono::Locale;

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPosition {
    /// `$1,234.56`
    Prefix,
    /// `R$ 1.234,56`
    PrefixSpaced,
    /// `1 234,56 ₽`
    Suffix,
}

/// Formatting data for one locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleData {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    /// Integer digits needed before grouping kicks in.
    pub min_grouping_digits: usize,
    pub numeric_date: &'static str,
    pub long_date: &'static str,
    pub full_date: &'static str,
    pub currency_position: CurrencyPosition,
    pub chrono: Locale,
}

impl LocaleData {
    /// Primary language subtag (`en` for `en-GB`).
    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }
}

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

pub static LOCALES: &[LocaleData] = &[
    LocaleData {
        tag: "en",
        group_separator: ",",
        decimal_separator: ".",
        min_grouping_digits: 4,
        numeric_date: "%-m/%-d/%Y",
        long_date: "%B %-d, %Y",
        full_date: "%A, %B %-d, %Y",
        currency_position: CurrencyPosition::Prefix,
        chrono: Locale::en_US,
    },
    LocaleData {
        tag: "en-GB",
        group_separator: ",",
        decimal_separator: ".",
        min_grouping_digits: 4,
        numeric_date: "%d/%m/%Y",
        long_date: "%-d %B %Y",
        full_date: "%A %-d %B %Y",
        currency_position: CurrencyPosition::Prefix,
        chrono: Locale::en_GB,
    },
    LocaleData {
        tag: "ru",
        group_separator: NBSP,
        decimal_separator: ",",
        min_grouping_digits: 4,
        numeric_date: "%d.%m.%Y",
        long_date: "%-d %B %Y г.",
        full_date: "%A, %-d %B %Y г.",
        currency_position: CurrencyPosition::Suffix,
        chrono: Locale::ru_RU,
    },
    LocaleData {
        tag: "uk",
        group_separator: NBSP,
        decimal_separator: ",",
        min_grouping_digits: 4,
        numeric_date: "%d.%m.%Y",
        long_date: "%-d %B %Y р.",
        full_date: "%A, %-d %B %Y р.",
        currency_position: CurrencyPosition::Suffix,
        chrono: Locale::uk_UA,
    },
    LocaleData {
        tag: "de",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 4,
        numeric_date: "%d.%m.%Y",
        long_date: "%-d. %B %Y",
        full_date: "%A, %-d. %B %Y",
        currency_position: CurrencyPosition::Suffix,
        chrono: Locale::de_DE,
    },
    LocaleData {
        tag: "fr",
        group_separator: NNBSP,
        decimal_separator: ",",
        min_grouping_digits: 4,
        numeric_date: "%d/%m/%Y",
        long_date: "%-d %B %Y",
        full_date: "%A %-d %B %Y",
        currency_position: CurrencyPosition::Suffix,
        chrono: Locale::fr_FR,
    },
    LocaleData {
        tag: "es",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 5,
        numeric_date: "%-d/%-m/%Y",
        long_date: "%-d de %B de %Y",
        full_date: "%A, %-d de %B de %Y",
        currency_position: CurrencyPosition::Suffix,
        chrono: Locale::es_ES,
    },
    LocaleData {
        tag: "it",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 4,
        numeric_date: "%d/%m/%Y",
        long_date: "%-d %B %Y",
        full_date: "%A %-d %B %Y",
        currency_position: CurrencyPosition::Suffix,
        chrono: Locale::it_IT,
    },
    LocaleData {
        tag: "pt",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 4,
        numeric_date: "%d/%m/%Y",
        long_date: "%-d de %B de %Y",
        full_date: "%A, %-d de %B de %Y",
        currency_position: CurrencyPosition::PrefixSpaced,
        chrono: Locale::pt_BR,
    },
    LocaleData {
        tag: "id",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 4,
        numeric_date: "%-d/%-m/%Y",
        long_date: "%-d %B %Y",
        full_date: "%A, %-d %B %Y",
        currency_position: CurrencyPosition::PrefixSpaced,
        chrono: Locale::id_ID,
    },
];

/// Find the locale for a normalized tag.
///
/// Tries the full tag first (`en-GB`), then its language (`en-US` → `en`),
/// then falls back to English.
pub fn lookup(tag: &str) -> &'static LocaleData {
    let by_tag = |wanted: &str| {
        LOCALES
            .iter()
            .find(|data| data.tag.eq_ignore_ascii_case(wanted))
    };
    let language = tag.split('-').next().unwrap_or(tag);

    by_tag(tag)
        .or_else(|| by_tag(language))
        .unwrap_or(&LOCALES[0])
}

/// Insert group separators into a run of ASCII digits.
pub fn group_digits(digits: &str, data: &LocaleData) -> String {
    if digits.len() < data.min_grouping_digits {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(data.group_separator);
        }
        out.push(ch);
    }
    out
}

/// Format `value` with at least `min_fraction` and at most `max_fraction`
/// fraction digits.
pub fn format_decimal(
    value: f64,
    min_fraction: usize,
    max_fraction: usize,
    data: &LocaleData,
) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut frac = frac_part.trim_end_matches('0');
    if frac.len() < min_fraction {
        frac = &frac_part[..min_fraction];
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, data));
    if !frac.is_empty() {
        out.push_str(data.decimal_separator);
        out.push_str(frac);
    }
    out
}
