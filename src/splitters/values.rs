//! This module implements `ValuesByRangesSplitter`.

use alloc::vec::{self, Vec};
use core::{fmt, slice};

use num_traits::{float::FloatCore, NumCast};

use crate::{
    error::{ErrorMessage, IntervalError},
    rounding::{IncrementRounder, RoundingMode},
    IntervalResult, IntervalUnwrap,
};

/// A remainder past the last full bucket only gets its own bucket when it is
/// wider than this.
const REMAINDER_EPSILON: f64 = 0.01;

/// Whether a [`ValueRange`] includes its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBounds {
    /// `[start, end)`
    HalfOpen,
    /// `[start, end]`
    Closed,
}

/// A bucket produced by a [`ValuesByRangesSplitter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange<T> {
    pub start: T,
    pub end: T,
    pub bounds: RangeBounds,
}

impl<T: FloatCore> ValueRange<T> {
    /// Returns whether `value` falls into this bucket.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        match self.bounds {
            RangeBounds::HalfOpen => self.start <= value && value < self.end,
            RangeBounds::Closed => self.start <= value && value <= self.end,
        }
    }

    #[must_use]
    pub fn width(&self) -> T {
        self.end - self.start
    }
}

impl<T: fmt::Display> fmt::Display for ValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = match self.bounds {
            RangeBounds::HalfOpen => ')',
            RangeBounds::Closed => ']',
        };
        write!(f, "[{}, {}{close}", self.start, self.end)
    }
}

/// Splits the numeric range `[min, max]` into buckets of width `step`.
///
/// Every full bucket is half-open. When more than `0.01` of the range is left
/// after the last full bucket, one closed bucket `[last_end, max]` covers the
/// remainder.
///
/// ```rust
/// use calendar_intervals::splitters::{RangeBounds, ValuesByRangesSplitter};
///
/// let splitter = ValuesByRangesSplitter::try_new(0.0, 10.0, 3.0).unwrap();
/// let buckets = splitter.ranges();
///
/// assert_eq!(buckets.len(), 4);
/// assert_eq!((buckets[0].start, buckets[0].end), (0.0, 3.0));
/// assert_eq!((buckets[3].start, buckets[3].end), (9.0, 10.0));
/// assert_eq!(buckets[3].bounds, RangeBounds::Closed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesByRangesSplitter<T> {
    min: T,
    max: T,
    step: T,
    ranges: Vec<ValueRange<T>>,
}

impl<T: FloatCore> ValuesByRangesSplitter<T> {
    /// Creates a splitter over `[min, max]` with buckets of width `step`.
    ///
    /// Fails with `InvalidArgument` when a bound is not finite, when `step`
    /// is not a positive finite number, or when `min` is greater than `max`.
    /// A `step` too small to move past either bound in `T` is rejected too.
    pub fn try_new(min: T, max: T, step: T) -> IntervalResult<Self> {
        validate(min, max, step)?;
        let epsilon = <T as NumCast>::from(REMAINDER_EPSILON).interval_unwrap()?;

        let mut ranges = Vec::new();
        let mut start = min;
        let mut count: usize = 1;
        loop {
            // Offsets are taken from `min` so rounding errors do not accumulate.
            let end = min + step * <T as NumCast>::from(count).interval_unwrap()?;
            if end > max {
                break;
            }
            count += 1;
            if end <= start {
                continue;
            }
            ranges.push(ValueRange {
                start,
                end,
                bounds: RangeBounds::HalfOpen,
            });
            start = end;
        }

        if max - start > epsilon {
            ranges.push(ValueRange {
                start,
                end: max,
                bounds: RangeBounds::Closed,
            });
        }

        #[cfg(feature = "log")]
        log::trace!("split a value range into {} buckets", ranges.len());

        Ok(Self {
            min,
            max,
            step,
            ranges,
        })
    }

    /// Creates a splitter after flooring `min` and ceiling `max` to multiples
    /// of `step`.
    pub fn try_new_rounded(min: T, max: T, step: T) -> IntervalResult<Self> {
        validate(min, max, step)?;
        let min = IncrementRounder::from_signed_num(min, step)?.round(RoundingMode::Floor);
        let max = IncrementRounder::from_signed_num(max, step)?.round(RoundingMode::Ceil);
        Self::try_new(min, max, step)
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }

    #[inline]
    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the computed buckets.
    #[inline]
    #[must_use]
    pub fn ranges(&self) -> &[ValueRange<T>] {
        &self.ranges
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<ValueRange<T>> {
        self.ranges.clone()
    }

    pub fn iter(&self) -> slice::Iter<'_, ValueRange<T>> {
        self.ranges.iter()
    }

    /// Returns the bucket `value` falls into, if any.
    pub fn find(&self, value: T) -> Option<&ValueRange<T>> {
        self.ranges.iter().find(|range| range.contains(value))
    }
}

impl<T> IntoIterator for ValuesByRangesSplitter<T> {
    type Item = ValueRange<T>;
    type IntoIter = vec::IntoIter<ValueRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ValuesByRangesSplitter<T> {
    type Item = &'a ValueRange<T>;
    type IntoIter = slice::Iter<'a, ValueRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

fn validate<T: FloatCore>(min: T, max: T, step: T) -> IntervalResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::NonFiniteValue));
    }
    if !step.is_finite() || step <= T::zero() {
        return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::InvalidStep));
    }
    // A step below the float spacing of the bounds would not advance.
    if min + step == min || max - step == max {
        return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::InvalidStep));
    }
    if min > max {
        return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::MinGreaterThanMax));
    }
    Ok(())
}
