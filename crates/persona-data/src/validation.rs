//! Lenient normalisation of free-form numeric input.
//!
//! Form fields and command-line flags accept whatever the user types. Instead
//! of rejecting bad input, these helpers normalise it:
//!
//! - Leading digits are read and anything after them is ignored.
//! - Input with no leading digits, including the empty string, becomes 0.
//! - Negative values become 0.
//! - Values above the documented bound clamp to that bound.

use crate::intensity::{ErrorIntensity, MAX_ERROR_INTENSITY};
use crate::seed::GenerationSeed;

/// Number of fractional digits kept for error intensities.
const FRACTION_DIGITS: usize = 3;

/// Normalises a seed typed by the user.
///
/// # Examples
///
/// ```
/// use persona_data::{MAX_SAFE_INTEGER, normalize_seed_input};
///
/// assert_eq!(normalize_seed_input("42").get(), 42);
/// assert_eq!(normalize_seed_input("").get(), 0);
/// assert_eq!(normalize_seed_input("abc").get(), 0);
/// assert_eq!(normalize_seed_input("99999999999999999999").get(), MAX_SAFE_INTEGER);
/// ```
#[must_use]
pub fn normalize_seed_input(input: &str) -> GenerationSeed {
    let Some(unsigned) = non_negative(input) else {
        return GenerationSeed::default();
    };
    GenerationSeed::new(saturating_decimal(leading_digits(unsigned)))
}

/// Normalises an error intensity typed by the user.
///
/// Up to three fractional digits are kept; values above 1000 clamp to 1000.
///
/// # Examples
///
/// ```
/// use persona_data::{ErrorIntensity, normalize_error_intensity_input};
///
/// assert_eq!(normalize_error_intensity_input("2.25"), ErrorIntensity::new(2, 250));
/// assert_eq!(normalize_error_intensity_input("5000"), ErrorIntensity::MAX);
/// assert_eq!(normalize_error_intensity_input("lots"), ErrorIntensity::ZERO);
/// ```
#[must_use]
pub fn normalize_error_intensity_input(input: &str) -> ErrorIntensity {
    let Some(unsigned) = non_negative(input) else {
        return ErrorIntensity::ZERO;
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let whole_digits = leading_digits(integer);
    // A fraction only counts when the integer part was read in full.
    let fraction_digits = if whole_digits.len() == integer.len() {
        leading_digits(fraction)
    } else {
        ""
    };

    let whole = saturating_decimal(whole_digits).min(u64::from(MAX_ERROR_INTENSITY));
    let thousandths = fraction_digits
        .chars()
        .chain(std::iter::repeat('0'))
        .take(FRACTION_DIGITS)
        .filter_map(|c| c.to_digit(10))
        .fold(0_u16, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u16::try_from(digit).unwrap_or(0))
        });

    ErrorIntensity::new(u32::try_from(whole).unwrap_or(MAX_ERROR_INTENSITY), thousandths)
}

/// Strips surrounding whitespace and an optional `+`; `None` for negatives.
fn non_negative(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return None;
    }
    Some(trimmed.strip_prefix('+').unwrap_or(trimmed))
}

fn leading_digits(input: &str) -> &str {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.get(..end).unwrap_or_default()
}

fn saturating_decimal(digits: &str) -> u64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}
