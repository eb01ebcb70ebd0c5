//! This module implements `TimeRangeSplitter`.

use alloc::vec::{self, Vec};
use core::{fmt, slice, time::Duration};

use num_traits::NumCast;

use crate::{
    components::CalendarDate,
    error::{ErrorMessage, IntervalError},
    rounding::{IncrementRounder, RoundingMode},
    IntervalResult, IntervalUnwrap,
};

/// Fifteen minutes, in milliseconds.
const QUARTER_HOUR: f64 = 900_000.0;

/// A half-open `[start, end)` span of time produced by a [`TimeRangeSplitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{})", self.start, self.end)
    }
}

/// Splits the time between two dates into consecutive strides.
///
/// Range `i` starts at `min + i * stride` and ends one stride later. Ranges
/// are produced while their start is earlier than `max`, so the last range
/// may end after `max`.
///
/// ```rust
/// use calendar_intervals::{splitters::TimeRangeSplitter, CalendarDate, UtcOffset};
/// use core::time::Duration;
///
/// let min = CalendarDate::try_new_with_time(2020, 6, 9, 9, 0, 0, UtcOffset::UTC).unwrap();
/// let max = CalendarDate::try_new_with_time(2020, 6, 9, 10, 10, 0, UtcOffset::UTC).unwrap();
///
/// let splitter = TimeRangeSplitter::try_new(min, max, Duration::from_secs(30 * 60)).unwrap();
/// assert_eq!(splitter.ranges().len(), 3);
/// assert_eq!(splitter.ranges()[2].end.hour(), 10);
/// assert_eq!(splitter.ranges()[2].end.minute(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeSplitter {
    min: CalendarDate,
    max: CalendarDate,
    stride: Duration,
    ranges: Vec<TimeRange>,
}

impl TimeRangeSplitter {
    /// Creates a splitter over `[min, max]` with the provided `stride`.
    ///
    /// Fails with `InvalidArgument` when the stride is shorter than one
    /// millisecond or when `min` is later than `max`.
    pub fn try_new(min: CalendarDate, max: CalendarDate, stride: Duration) -> IntervalResult<Self> {
        let stride_ms = i64::try_from(stride.as_millis())
            .map_err(|_| IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange))?;
        if stride_ms == 0 {
            return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::ZeroStride));
        }
        if min > max {
            return Err(
                IntervalError::invalid_argument().with_enum(ErrorMessage::MinGreaterThanMax)
            );
        }

        let mut ranges = Vec::new();
        let mut start = min;
        while start < max {
            let end = start.add_milliseconds(stride_ms)?;
            ranges.push(TimeRange { start, end });
            start = end;
        }

        #[cfg(feature = "log")]
        log::trace!("split [{min}, {max}] into {} strides", ranges.len());

        Ok(Self {
            min,
            max,
            stride,
            ranges,
        })
    }

    /// Creates a splitter after flooring `min` and ceiling `max` to a
    /// quarter hour of their wall-clock time.
    pub fn try_new_rounded(
        min: CalendarDate,
        max: CalendarDate,
        stride: Duration,
    ) -> IntervalResult<Self> {
        Self::try_new(
            round_to_quarter_hour(min, RoundingMode::Floor)?,
            round_to_quarter_hour(max, RoundingMode::Ceil)?,
            stride,
        )
    }

    #[inline]
    #[must_use]
    pub const fn min(&self) -> CalendarDate {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> CalendarDate {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn stride(&self) -> Duration {
        self.stride
    }

    /// Returns the computed ranges.
    #[inline]
    #[must_use]
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<TimeRange> {
        self.ranges.clone()
    }

    pub fn iter(&self) -> slice::Iter<'_, TimeRange> {
        self.ranges.iter()
    }
}

impl IntoIterator for TimeRangeSplitter {
    type Item = TimeRange;
    type IntoIter = vec::IntoIter<TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a TimeRangeSplitter {
    type Item = &'a TimeRange;
    type IntoIter = slice::Iter<'a, TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

fn round_to_quarter_hour(date: CalendarDate, mode: RoundingMode) -> IntervalResult<CalendarDate> {
    let local = date.iso_date_time().to_local_epoch_ms();
    let value = <f64 as NumCast>::from(local).interval_unwrap()?;
    let rounded = IncrementRounder::from_signed_num(value, QUARTER_HOUR)?.round(mode);
    let rounded = <i64 as NumCast>::from(rounded).interval_unwrap()?;
    date.add_milliseconds(rounded - local)
}
