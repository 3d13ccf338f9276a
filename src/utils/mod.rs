//! Utility functions.
//!
//! Small helpers for picking, shuffling and slicing data, plus async
//! sleeping and retrying.

pub mod retry;

use rand::Rng;
use rand::seq::SliceRandom;

pub use retry::{RetryPolicy, retry, sleep};

/// Pick a random element, `None` for an empty slice.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// Random integer between `min` and `max`, both inclusive.
///
/// The bounds may be given in either order.
pub fn random_int(min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}

/// Shuffled copy of a slice (Fisher-Yates); the input is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled
}

/// Split a slice into chunks of `size`; the last chunk may be shorter.
///
/// A size of zero yields no chunks.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Truncate to `max_len` characters, ending with `suffix` when cut.
///
/// The suffix counts towards `max_len`.
pub fn truncate(text: &str, max_len: usize, suffix: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(suffix);
    out
}
