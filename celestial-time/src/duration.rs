//! Signed elapsed time decomposed for display.
//!
//! A [`Duration`] splits a millisecond count into hours, minutes, seconds and
//! milliseconds using plain integer division. Hours are not wrapped at 24: a
//! duration is elapsed time, not a clock reading.
//!
//! ```
//! use celestial_time::Duration;
//!
//! let d = Duration::from_millis(5_428_869);
//! assert_eq!((d.hours(), d.minutes(), d.seconds(), d.millis()), (1, 30, 28, 869));
//! assert_eq!(d.total_millis(), 5_428_869);
//! ```
//!
//! The magnitude is kept as a `u64`, so `i64::MIN` decomposes without
//! overflow and every rendering path stays 64 bits wide.

use crate::constants::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::errors::{FormatError, FormatResult};
use crate::format::DurationFormatter;
use std::fmt;

/// A signed millisecond count split into display components.
///
/// Invariant: `hours*3_600_000 + minutes*60_000 + seconds*1_000 + millis`
/// equals the absolute value of the count it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    negative: bool,
    hours: u64,
    minutes: u8,
    seconds: u8,
    millis: u16,
}

impl Duration {
    pub const ZERO: Self = Self::from_millis(0);

    /// Decomposes a signed millisecond count.
    pub const fn from_millis(millis: i64) -> Self {
        let magnitude = millis.unsigned_abs();
        Self {
            negative: millis < 0,
            hours: magnitude / MILLIS_PER_HOUR,
            minutes: ((magnitude / MILLIS_PER_MINUTE) % 60) as u8,
            seconds: ((magnitude / MILLIS_PER_SECOND) % 60) as u8,
            millis: (magnitude % MILLIS_PER_SECOND) as u16,
        }
    }

    /// Decomposes a floating-point millisecond count, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::OutOfRange`] for NaN, infinities, and values
    /// whose integer part does not fit in an `i64`.
    pub fn try_from_millis_f64(millis: f64) -> FormatResult<Self> {
        if !millis.is_finite() {
            return Err(FormatError::out_of_range(
                "Duration::try_from_millis_f64",
                "value is not finite",
            ));
        }
        let whole = millis.trunc();
        // i64::MAX is not representable as f64; the cast rounds it up to 2^63.
        if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
            return Err(FormatError::out_of_range(
                "Duration::try_from_millis_f64",
                &format!("{millis} ms does not fit in a 64-bit millisecond count"),
            ));
        }
        Ok(Self::from_millis(whole as i64))
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    #[inline]
    pub const fn millis(&self) -> u16 {
        self.millis
    }

    /// Returns `true` when every component is zero.
    pub const fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.millis == 0
    }

    /// Recomposes the absolute millisecond count.
    pub const fn abs_millis(&self) -> u64 {
        self.hours * MILLIS_PER_HOUR
            + self.minutes as u64 * MILLIS_PER_MINUTE
            + self.seconds as u64 * MILLIS_PER_SECOND
            + self.millis as u64
    }

    /// Recomposes the signed millisecond count this value was built from.
    pub const fn total_millis(&self) -> i64 {
        // |i64::MIN| wraps to i64::MIN, and negating that wraps back to itself.
        let magnitude = self.abs_millis() as i64;
        if self.negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }
}

impl From<i64> for Duration {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl fmt::Display for Duration {
    /// Formats with the default configuration (`HH:MM:SS.mmm`, unsigned).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DurationFormatter::default().fmt(*self))
    }
}
