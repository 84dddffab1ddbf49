//! Shared helpers used across the engine.
//!
//! Generation draws everything (number pairs, operations, swaps, decimal
//! styles, final question order) the same way: pick a random entry from a
//! working list and remove it. The list helpers here keep that in one place so
//! the generator reads as the algorithm, not as index bookkeeping.

use rand::Rng;

/// Absolute tolerance when comparing a supplied answer to the expected value.
pub const TOLERANCE: f64 = 1.0e-6;

/// Remove and return a uniformly random entry, or `None` if `entries` is empty.
///
/// Order of the remaining entries is not preserved.
pub fn take_random<T, R: Rng + ?Sized>(entries: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if entries.is_empty() {
        return None;
    }
    let i = rng.gen_range(0..entries.len());
    Some(entries.swap_remove(i))
}

/// Build a pool of `len` entries: `first` for the first half (rounded up),
/// `second` for the rest.
pub fn split_pool<T: Copy>(len: usize, first: T, second: T) -> Vec<T> {
    let half = (len + 1) / 2;
    (0..len).map(|i| if i < half { first } else { second }).collect()
}

/// `true` if `a` and `b` differ by no more than [`TOLERANCE`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Render a non-negative integer divided by 10, e.g. 42 → "4.2", 40 → "4".
pub fn tenths(value: u32) -> String {
    let whole = value / 10;
    let rem = value % 10;
    if rem == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{rem}")
    }
}

/// Parse the leading number of a free-text answer, ignoring anything after it.
///
/// Leading whitespace and an optional sign are accepted, then digits with an
/// optional fractional part and exponent. `"4.2 cm"` → 4.2, `"  .5"` → 0.5,
/// `"abc"` / `""` → `None`. A signed or unsigned `Infinity` (case-sensitive)
/// reads as infinity, which no question accepts.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Only take the exponent if it is complete.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
