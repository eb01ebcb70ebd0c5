//! This module implements `MonthInterval` and any directly related algorithms.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, ops::Deref};

use crate::{
    components::{CalendarDate, Interval, UtcOffset},
    error::{range_not_in_month_message, ErrorMessage, IntervalError},
    IntervalResult,
};

/// An [`Interval`] that starts and ends within the same calendar month.
///
/// A `MonthInterval` may cover only part of its month, as the first and
/// last elements of [`Interval::split_by_months`] do.
///
/// ```rust
/// use calendar_intervals::{MonthInterval, UtcOffset};
///
/// let june = MonthInterval::try_from_year_month(2020, 6, UtcOffset::UTC).unwrap();
/// assert_eq!(june.days_count(), 30);
/// assert_eq!(june.work_days_count().unwrap(), 22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthInterval {
    interval: Interval,
}

impl MonthInterval {
    /// Creates a new `MonthInterval` from `start` through `end`.
    pub fn try_new(start: CalendarDate, end: CalendarDate) -> IntervalResult<Self> {
        Self::try_from_interval(Interval::try_new(start, end)?)
    }

    /// Narrows `interval` to a `MonthInterval`, failing when it spans more
    /// than one calendar month.
    pub fn try_from_interval(interval: Interval) -> IntervalResult<Self> {
        if !interval.start().same_month(&interval.end()) {
            return Err(IntervalError::invalid_interval()
                .with_enum(ErrorMessage::MonthIntervalNotSingleMonth));
        }
        Ok(Self { interval })
    }

    /// Creates the `MonthInterval` covering all of `year`-`month`.
    pub fn try_from_year_month(year: i32, month: u8, offset: UtcOffset) -> IntervalResult<Self> {
        let first = CalendarDate::try_new(year, month, 1, offset)?;
        Self::try_new(first, first.last_day_of_month())
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.interval.start().year()
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.interval.start().month()
    }

    #[inline]
    #[must_use]
    pub const fn as_interval(&self) -> &Interval {
        &self.interval
    }

    /// Returns the number of Monday through Friday days in this interval.
    pub fn work_days_count(&self) -> IntervalResult<usize> {
        Ok(self.interval.work_days()?.len())
    }

    /// Returns the interval covering this interval's whole month.
    pub fn full_month_range(&self) -> IntervalResult<Self> {
        let (start, end) = (self.interval.start(), self.interval.end());
        if start.is_first_day_of_month() && end.is_last_day_of_month() {
            return Ok(*self);
        }
        Self::try_new(start.first_day_of_month(), end.last_day_of_month())
    }

    /// Removes `to_remove` from this month.
    ///
    /// Each range is first narrowed to its overlap with this month, so a
    /// range may extend into neighbouring months. Fails with `NotContained`
    /// when a range does not overlap this month at all, and with
    /// `InvalidInterval` when a range in another offset overlaps the month
    /// in time but not by day.
    pub fn remove_ranges(&self, to_remove: &[Interval]) -> IntervalResult<Vec<Interval>> {
        let intersections = to_remove
            .iter()
            .map(|range| {
                self.interval.try_intersection(range)?.ok_or_else(|| {
                    #[cfg(feature = "log")]
                    log::debug!("{range} does not intersect {self}");
                    IntervalError::not_contained().with_message(range_not_in_month_message(
                        &range.to_display_string(),
                        &self.to_display_string(),
                    ))
                })
            })
            .collect::<IntervalResult<Vec<_>>>()?;

        self.interval.remove_ranges(&intersections)
    }

    /// Returns `"MonthInterval. [{start}:{end}]"`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl Deref for MonthInterval {
    type Target = Interval;

    fn deref(&self) -> &Self::Target {
        &self.interval
    }
}

impl AsRef<Interval> for MonthInterval {
    fn as_ref(&self) -> &Interval {
        &self.interval
    }
}

impl From<MonthInterval> for Interval {
    fn from(value: MonthInterval) -> Self {
        value.interval
    }
}

impl TryFrom<Interval> for MonthInterval {
    type Error = IntervalError;

    fn try_from(value: Interval) -> Result<Self, Self::Error> {
        Self::try_from_interval(value)
    }
}

impl fmt::Display for MonthInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.interval.fmt_with_name("MonthInterval", f)
    }
}
