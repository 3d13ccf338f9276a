//! Telegram Stars conversion.

/// Stars per US dollar.
pub const STARS_PER_USD: f64 = 50.0;

/// Convert Telegram Stars to USD, rounded to cents.
///
/// `50` stars is `1.0`, `25` is `0.5`.
pub fn stars_to_usd(stars: u64) -> f64 {
    ((stars as f64 / STARS_PER_USD) * 100.0).round() / 100.0
}

/// Convert USD to the nearest whole number of Telegram Stars.
///
/// Negative amounts give zero.
pub fn usd_to_stars(usd: f64) -> u64 {
    (usd * STARS_PER_USD).round().max(0.0) as u64
}
