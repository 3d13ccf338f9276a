//! Locale-aware formatting for numbers, dates, relative times and currency.
//!
//! Locales are BCP 47 tags (`en-US`, `ru`) or Telegram's `language_code`
//! style (`en_US`). Unknown locales fall back to English. Dates render in
//! UTC.

mod locale;
mod relative;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use locale::{CurrencyPosition, format_decimal, lookup};

pub use relative::Unit;

/// Localization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

/// Convert Telegram's `en_US` style to a BCP 47 tag.
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('_', "-")
}

/// Format a number with the locale's separators, up to 3 fraction digits.
///
/// ```
/// use tgkit::localization::format_number;
///
/// assert_eq!(format_number(1234567.0, "en_US"), "1,234,567");
/// assert_eq!(format_number(1234567.0, "ru"), "1\u{a0}234\u{a0}567");
/// ```
pub fn format_number(num: f64, locale: &str) -> String {
    format_decimal(num, 0, 3, lookup(&normalize_locale(locale)))
}

/// Anything that can name a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    DateTime(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// RFC 3339, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`; the latter two as UTC.
    Text(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(date: DateTime<Utc>) -> Self {
        Self::DateTime(date)
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        Self::Timestamp(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl DateInput {
    /// Resolve to a UTC timestamp.
    pub fn resolve(&self) -> Result<DateTime<Utc>, LocalizationError> {
        match self {
            Self::DateTime(date) => Ok(*date),
            Self::Timestamp(millis) => DateTime::from_timestamp_millis(*millis)
                .ok_or_else(|| LocalizationError::InvalidDate(millis.to_string())),
            Self::Text(text) => parse_date(text),
        }
    }
}

fn parse_date(text: &str) -> Result<DateTime<Utc>, LocalizationError> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(date.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| LocalizationError::InvalidDate(text.to_string()))
}

/// How much of a date to spell out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `1/15/2024`
    #[default]
    Numeric,
    /// `January 15, 2024`
    Long,
    /// `Monday, January 15, 2024`
    Full,
}

/// Format a date for the locale.
pub fn format_date(
    date: impl Into<DateInput>,
    locale: &str,
    style: DateStyle,
) -> Result<String, LocalizationError> {
    let date = date.into().resolve()?;
    let data = lookup(&normalize_locale(locale));
    let pattern = match style {
        DateStyle::Numeric => data.numeric_date,
        DateStyle::Long => data.long_date,
        DateStyle::Full => data.full_date,
    };
    Ok(date.format_localized(pattern, data.chrono).to_string())
}

/// Format a date relative to the current time ("2 hours ago").
pub fn format_relative_time(
    date: impl Into<DateInput>,
    locale: &str,
) -> Result<String, LocalizationError> {
    format_relative_time_from(date, Utc::now(), locale)
}

/// Format a date relative to `now`.
pub fn format_relative_time_from(
    date: impl Into<DateInput>,
    now: DateTime<Utc>,
    locale: &str,
) -> Result<String, LocalizationError> {
    let date = date.into().resolve()?;
    let diff_seconds = (date - now).num_milliseconds().div_euclid(1000);
    let (value, unit) = relative::select_unit(diff_seconds);
    Ok(relative::phrase(value, unit, lookup(&normalize_locale(locale))))
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "RUB" => "₽",
        "UAH" => "₴",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "KRW" => "₩",
        "INR" => "₹",
        "BRL" => "R$",
        "IDR" => "Rp",
        "TRY" => "₺",
        "ILS" => "₪",
        _ => return None,
    })
}

fn currency_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

/// Format an amount of money for the locale.
///
/// ```
/// use tgkit::localization::format_currency;
///
/// assert_eq!(format_currency(1234.56, "USD", "en-US").unwrap(), "$1,234.56");
/// assert_eq!(format_currency(1234.56, "RUB", "ru").unwrap(), "1\u{a0}234,56\u{a0}₽");
/// ```
pub fn format_currency(
    amount: f64,
    currency: &str,
    locale: &str,
) -> Result<String, LocalizationError> {
    if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(LocalizationError::InvalidCurrency(currency.to_string()));
    }
    let code = currency.to_ascii_uppercase();
    let data = lookup(&normalize_locale(locale));
    let digits = currency_digits(&code);
    let number = format_decimal(amount.abs(), digits, digits, data);
    let sign = if amount < 0.0 && number.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    let symbol = currency_symbol(&code);
    let unit = symbol.unwrap_or(code.as_str());
    let position = match (data.currency_position, symbol) {
        (CurrencyPosition::Prefix, None) => CurrencyPosition::PrefixSpaced,
        (position, _) => position,
    };

    Ok(match position {
        CurrencyPosition::Prefix => format!("{sign}{unit}{number}"),
        CurrencyPosition::PrefixSpaced => format!("{sign}{unit}\u{a0}{number}"),
        CurrencyPosition::Suffix => format!("{sign}{number}\u{a0}{unit}"),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en_US"), "en-US");
        assert_eq!(normalize_locale("ru"), "ru");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.0, "en-US"), "1,234,567");
        assert_eq!(format_number(1234567.0, "en_US"), "1,234,567");
        assert_eq!(format_number(123.0, "en"), "123");
        assert_eq!(format_number(1234567.0, "ru"), "1\u{a0}234\u{a0}567");
        assert_eq!(format_number(1234.5678, "de"), "1.234,568");
        assert_eq!(format_number(1234.0, "es"), "1234");
        assert_eq!(format_number(-9876.5, "fr"), "-9\u{202f}876,5");
        assert_eq!(format_number(42.0, "unknown"), "42");
    }

    #[test]
    fn test_date_input() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(DateInput::from("2024-01-15").resolve(), Ok(expected));
        assert_eq!(DateInput::from(1_705_276_800_000_i64).resolve(), Ok(expected));
        assert_eq!(DateInput::from("2024-01-15T00:00:00Z").resolve(), Ok(expected));
        assert_eq!(DateInput::from("2024-01-15T03:00:00+03:00").resolve(), Ok(expected));
        assert_eq!(DateInput::from("2024-01-15T00:00:00").resolve(), Ok(expected));
        assert_eq!(DateInput::from(expected).resolve(), Ok(expected));
        assert!(matches!(
            DateInput::from("not a date").resolve(),
            Err(LocalizationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2024-01-15", "en-US", DateStyle::Numeric).unwrap(),
            "1/15/2024"
        );
        assert_eq!(
            format_date("2024-01-15", "en", DateStyle::Long).unwrap(),
            "January 15, 2024"
        );
        assert_eq!(
            format_date("2024-01-15", "en", DateStyle::Full).unwrap(),
            "Monday, January 15, 2024"
        );
        assert_eq!(
            format_date("2024-01-15", "en_GB", DateStyle::default()).unwrap(),
            "15/01/2024"
        );
        assert_eq!(
            format_date(1_705_276_800_000_i64, "ru", DateStyle::Numeric).unwrap(),
            "15.01.2024"
        );
        assert!(format_date("2024-13-45", "en", DateStyle::Numeric).is_err());
    }

    #[test]
    fn test_format_relative_time_from() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let at = |secs: i64| now + Duration::seconds(secs);

        assert_eq!(format_relative_time_from(at(-3600), now, "en").unwrap(), "1 hour ago");
        assert_eq!(format_relative_time_from(at(86_400), now, "en").unwrap(), "tomorrow");
        assert_eq!(format_relative_time_from(at(2 * 86_400), now, "en").unwrap(), "in 2 days");
        assert_eq!(format_relative_time_from(at(0), now, "en").unwrap(), "now");
        assert_eq!(
            format_relative_time_from(at(86_400), now, "ru_RU").unwrap(),
            "завтра"
        );
        assert_eq!(
            format_relative_time_from(at(-5 * 60), now, "ru").unwrap(),
            "5 минут назад"
        );
    }

    #[test]
    fn test_format_relative_time_floors_milliseconds() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let date = now - Duration::milliseconds(500);
        assert_eq!(format_relative_time_from(date, now, "en").unwrap(), "1 second ago");
    }

    #[test]
    fn test_format_relative_time_now() {
        let past = Utc::now() - Duration::hours(1);
        assert!(format_relative_time(past, "en").unwrap().contains("hour"));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56, "USD", "en-US").unwrap(), "$1,234.56");
        assert_eq!(format_currency(1234.56, "EUR", "en-US").unwrap(), "€1,234.56");
        assert_eq!(
            format_currency(1234.56, "EUR", "ru").unwrap(),
            "1\u{a0}234,56\u{a0}€"
        );
        assert_eq!(format_currency(1234.56, "JPY", "en").unwrap(), "¥1,235");
        assert_eq!(format_currency(1234.5, "BRL", "pt-BR").unwrap(), "R$\u{a0}1.234,50");
        assert_eq!(format_currency(10.0, "CHF", "en").unwrap(), "CHF\u{a0}10.00");
        assert_eq!(format_currency(-5.0, "usd", "en").unwrap(), "-$5.00");
    }

    #[test]
    fn test_format_currency_rejects_bad_codes() {
        for code in ["", "US", "USDT", "U$D", "12A"] {
            assert_eq!(
                format_currency(1.0, code, "en"),
                Err(LocalizationError::InvalidCurrency(code.to_string()))
            );
        }
    }
}
