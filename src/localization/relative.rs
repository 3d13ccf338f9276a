//! Relative time phrases ("2 hours ago", "через 3 дня").

use super::locale::{LocaleData, format_decimal};

/// Relative time unit, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Units with their length in seconds.
pub const INTERVALS: [(Unit, i64); 7] = [
    (Unit::Year, 31_536_000),
    (Unit::Month, 2_592_000),
    (Unit::Week, 604_800),
    (Unit::Day, 86_400),
    (Unit::Hour, 3_600),
    (Unit::Minute, 60),
    (Unit::Second, 1),
];

/// Pick the largest unit with a count of at least one.
///
/// Returns the signed count, or `(0, Second)` for a zero difference.
pub fn select_unit(diff_seconds: i64) -> (i64, Unit) {
    let abs = diff_seconds.unsigned_abs();
    for (unit, seconds) in INTERVALS {
        let count = (abs / seconds as u64) as i64;
        if count >= 1 {
            return (if diff_seconds > 0 { count } else { -count }, unit);
        }
    }
    (0, Unit::Second)
}

/// Render `value` units relative to now with `numeric: auto` phrasing.
pub fn phrase(value: i64, unit: Unit, data: &LocaleData) -> String {
    let count = format_decimal(value.unsigned_abs() as f64, 0, 0, data);
    match data.language() {
        "ru" => russian(value, unit, &count),
        "id" => indonesian(value, unit, &count),
        _ => english(value, unit, &count),
    }
}

fn english(value: i64, unit: Unit, count: &str) -> String {
    match (value, unit) {
        (0, Unit::Second) => return "now".to_string(),
        (-1, Unit::Day) => return "yesterday".to_string(),
        (1, Unit::Day) => return "tomorrow".to_string(),
        (-1, Unit::Week) => return "last week".to_string(),
        (1, Unit::Week) => return "next week".to_string(),
        (-1, Unit::Month) => return "last month".to_string(),
        (1, Unit::Month) => return "next month".to_string(),
        (-1, Unit::Year) => return "last year".to_string(),
        (1, Unit::Year) => return "next year".to_string(),
        _ => {}
    }

    let name = match unit {
        Unit::Year => "year",
        Unit::Month => "month",
        Unit::Week => "week",
        Unit::Day => "day",
        Unit::Hour => "hour",
        Unit::Minute => "minute",
        Unit::Second => "second",
    };
    let plural = if value.abs() == 1 { "" } else { "s" };
    if value < 0 {
        format!("{count} {name}{plural} ago")
    } else {
        format!("in {count} {name}{plural}")
    }
}

fn russian(value: i64, unit: Unit, count: &str) -> String {
    match (value, unit) {
        (0, Unit::Second) => return "сейчас".to_string(),
        (-1, Unit::Day) => return "вчера".to_string(),
        (1, Unit::Day) => return "завтра".to_string(),
        (-1, Unit::Week) => return "на прошлой неделе".to_string(),
        (1, Unit::Week) => return "на следующей неделе".to_string(),
        (-1, Unit::Month) => return "в прошлом месяце".to_string(),
        (1, Unit::Month) => return "в следующем месяце".to_string(),
        (-1, Unit::Year) => return "в прошлом году".to_string(),
        (1, Unit::Year) => return "в следующем году".to_string(),
        _ => {}
    }

    let [one, few, many] = match unit {
        Unit::Year => ["год", "года", "лет"],
        Unit::Month => ["месяц", "месяца", "месяцев"],
        Unit::Week => ["неделю", "недели", "недель"],
        Unit::Day => ["день", "дня", "дней"],
        Unit::Hour => ["час", "часа", "часов"],
        Unit::Minute => ["минуту", "минуты", "минут"],
        Unit::Second => ["секунду", "секунды", "секунд"],
    };
    let n = value.unsigned_abs();
    let name = match (n % 10, n % 100) {
        (1, rem) if rem != 11 => one,
        (2..=4, rem) if !(12..=14).contains(&rem) => few,
        _ => many,
    };
    if value < 0 {
        format!("{count} {name} назад")
    } else {
        format!("через {count} {name}")
    }
}

fn indonesian(value: i64, unit: Unit, count: &str) -> String {
    match (value, unit) {
        (0, Unit::Second) => return "sekarang".to_string(),
        (-1, Unit::Day) => return "kemarin".to_string(),
        (1, Unit::Day) => return "besok".to_string(),
        (-1, Unit::Week) => return "minggu lalu".to_string(),
        (1, Unit::Week) => return "minggu depan".to_string(),
        (-1, Unit::Month) => return "bulan lalu".to_string(),
        (1, Unit::Month) => return "bulan depan".to_string(),
        (-1, Unit::Year) => return "tahun lalu".to_string(),
        (1, Unit::Year) => return "tahun depan".to_string(),
        _ => {}
    }

    let name = match unit {
        Unit::Year => "tahun",
        Unit::Month => "bulan",
        Unit::Week => "minggu",
        Unit::Day => "hari",
        Unit::Hour => "jam",
        Unit::Minute => "menit",
        Unit::Second => "detik",
    };
    if value < 0 {
        format!("{count} {name} yang lalu")
    } else {
        format!("dalam {count} {name}")
    }
}
