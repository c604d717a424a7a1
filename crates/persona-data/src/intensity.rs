//! Error intensity: the expected number of typing errors per field.
//!
//! Intensities are fixed-point values with three decimal places, so the
//! fractional part can be realised exactly as a `numerator / 1000` ratio.

use std::fmt;

use rand::Rng;

/// Highest accepted error intensity.
pub const MAX_ERROR_INTENSITY: u32 = 1000;

/// Denominator of the fractional part.
const THOUSANDTHS_PER_ERROR: u16 = 1000;

/// Expected number of corruption operations applied to each field.
///
/// The value lies in `[0, 1000]`. An intensity of `2.25` applies exactly two
/// errors 75% of the time and three errors 25% of the time.
///
/// # Example
///
/// ```
/// use persona_data::ErrorIntensity;
///
/// let intensity = ErrorIntensity::new(2, 250);
/// assert_eq!(intensity.to_string(), "2.25");
/// assert_eq!(ErrorIntensity::new(4000, 0), ErrorIntensity::MAX);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorIntensity {
    whole: u32,
    thousandths: u16,
}

impl ErrorIntensity {
    /// No corruption: fields pass through unchanged.
    pub const ZERO: Self = Self {
        whole: 0,
        thousandths: 0,
    };

    /// The highest intensity, `1000`.
    pub const MAX: Self = Self {
        whole: MAX_ERROR_INTENSITY,
        thousandths: 0,
    };

    /// Builds an intensity from whole errors and thousandths of an error.
    ///
    /// Values above [`MAX_ERROR_INTENSITY`] clamp to [`ErrorIntensity::MAX`];
    /// thousandths above 999 clamp to 999.
    #[must_use]
    pub const fn new(whole: u32, thousandths: u16) -> Self {
        if whole >= MAX_ERROR_INTENSITY {
            return Self::MAX;
        }
        let capped = if thousandths >= THOUSANDTHS_PER_ERROR {
            THOUSANDTHS_PER_ERROR - 1
        } else {
            thousandths
        };
        Self {
            whole,
            thousandths: capped,
        }
    }

    /// Builds an integral intensity.
    #[must_use]
    pub const fn from_whole(whole: u32) -> Self {
        Self::new(whole, 0)
    }

    /// Returns the integral part.
    #[must_use]
    pub const fn whole(self) -> u32 {
        self.whole
    }

    /// Returns the fractional part in thousandths.
    #[must_use]
    pub const fn thousandths(self) -> u16 {
        self.thousandths
    }

    /// Returns `true` when no errors will ever be applied.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.whole == 0 && self.thousandths == 0
    }

    /// Draws the number of errors for one field.
    ///
    /// Returns the integral part plus one extra error with probability equal
    /// to the fractional part. Integral intensities consume no randomness.
    pub fn sample_count<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        if self.thousandths == 0 {
            return self.whole;
        }
        let extra = rng.random_ratio(
            u32::from(self.thousandths),
            u32::from(THOUSANDTHS_PER_ERROR),
        );
        self.whole.saturating_add(u32::from(extra))
    }
}

impl fmt::Display for ErrorIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.thousandths == 0 {
            return write!(f, "{}", self.whole);
        }
        let fraction = format!("{:03}", self.thousandths);
        write!(f, "{}.{}", self.whole, fraction.trim_end_matches('0'))
    }
}
