//! This module implements `Interval` and any directly related algorithms.

use alloc::string::{String, ToString};
use core::{fmt, hash};

use crate::{
    components::{CalendarDate, UtcOffset},
    error::{ErrorMessage, IntervalError},
    EpochMilliseconds, IntervalResult, MAX_DATE_TIME, MIN_DATE_TIME,
};

mod gaps;
mod split;

#[cfg(test)]
mod tests;

/// A bounded, inclusive range of calendar days.
///
/// An `Interval` is built from a `start` and an `end` [`CalendarDate`]. Its
/// exact bounds are normalized to [`Interval::from_bound`], the start of the first
/// day, and [`Interval::to_bound`], the end of the last day.
///
/// Construction checks that `start` does not fall on a later day than `end`
/// and that both bounds lie within [`MIN_DATE_TIME`] and [`MAX_DATE_TIME`],
/// measured on the wall clock of their own offset.
///
/// Two intervals are equal when their `from` and `to` instants are equal to
/// the second.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    start: CalendarDate,
    end: CalendarDate,
}

// ==== Private API ====

impl Interval {
    /// Writes `"{name}. [{start}:{end}]"`.
    pub(crate) fn fmt_with_name(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{name}. [{}:{}]", self.start, self.end)
    }
}

// ==== Public API ====

impl Interval {
    /// Creates a new `Interval` from `start` through `end`.
    pub fn try_new(start: CalendarDate, end: CalendarDate) -> IntervalResult<Self> {
        if start.later(&end) {
            return Err(IntervalError::invalid_interval().with_enum(ErrorMessage::StartAfterEnd));
        }

        let interval = Self { start, end };
        if interval.from_bound().iso_date_time() < MIN_DATE_TIME
            || interval.to_bound().iso_date_time() > MAX_DATE_TIME
        {
            return Err(
                IntervalError::invalid_interval().with_enum(ErrorMessage::IntervalOutOfBounds)
            );
        }

        Ok(interval)
    }

    /// Creates a single day `Interval`.
    pub fn try_from_date(date: CalendarDate) -> IntervalResult<Self> {
        Self::try_new(date, date)
    }

    /// Creates an `Interval` from two exact instants seen from `offset`.
    ///
    /// A missing `end` defaults to `start`.
    pub fn from_instants(
        start: EpochMilliseconds,
        end: Option<EpochMilliseconds>,
        offset: UtcOffset,
    ) -> IntervalResult<Self> {
        let start = CalendarDate::from_epoch_milliseconds(start, offset)?;
        let end = match end {
            Some(end) => CalendarDate::from_epoch_milliseconds(end, offset)?,
            None => start,
        };
        Self::try_new(start, end)
    }

    /// Returns the date this interval was started with.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the date this interval was ended with.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// The start of the first day, `00:00:00`.
    #[inline]
    #[must_use]
    pub fn from_bound(&self) -> CalendarDate {
        self.start.start_of_day()
    }

    /// The end of the last day, `23:59:59`.
    #[inline]
    #[must_use]
    pub fn to_bound(&self) -> CalendarDate {
        self.end.end_of_day()
    }

    /// Returns the number of calendar days in this interval.
    #[must_use]
    pub fn days_count(&self) -> usize {
        // `start` never falls after `end`, so the difference is non-negative.
        self.start.days_until(&self.end) as usize + 1
    }

    /// Returns whether `other` lies completely within this interval.
    #[must_use]
    pub fn contains(&self, other: &Interval) -> bool {
        other.from_bound() >= self.from_bound() && other.to_bound() <= self.to_bound()
    }

    /// Returns whether the instant of `date` lies within this interval.
    #[must_use]
    pub fn contains_date(&self, date: &CalendarDate) -> bool {
        *date >= self.from_bound() && *date <= self.to_bound()
    }

    /// Returns the overlap of this interval and `other`, or `None` when the
    /// two are disjoint.
    ///
    /// With mixed offsets two intervals can overlap in time while their
    /// days are ordered the other way round. No day range describes such an
    /// overlap and `None` is returned; [`MonthInterval::remove_ranges`]
    /// reports it as `InvalidInterval` instead.
    ///
    /// [`MonthInterval::remove_ranges`]: crate::MonthInterval::remove_ranges
    #[must_use]
    pub fn intersection_or_none(&self, other: &Interval) -> Option<Interval> {
        self.try_intersection(other).ok().flatten()
    }

    /// Returns the overlap of this interval and `other`, `Ok(None)` when
    /// they are disjoint, or `InvalidInterval` when they overlap in time but
    /// the overlap has no valid day range.
    pub(crate) fn try_intersection(&self, other: &Interval) -> IntervalResult<Option<Interval>> {
        if self.contains(other) {
            return Ok(Some(*other));
        }

        if other.contains(self) {
            return Ok(Some(*self));
        }

        let (from, to) = (self.from_bound(), self.to_bound());

        if other.from_bound() <= from && other.to_bound() >= from && other.to_bound() <= to {
            return Interval::try_new(self.start, other.end).map(Some);
        }

        if other.from_bound() >= from && other.from_bound() <= to && other.to_bound() >= to {
            return Interval::try_new(other.start, self.end).map(Some);
        }

        Ok(None)
    }

    /// Returns `"Interval. [{start}:{end}]"`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

// ==== Trait impls ====

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.from_bound().epoch_milliseconds().as_seconds()
            == other.from_bound().epoch_milliseconds().as_seconds()
            && self.to_bound().epoch_milliseconds().as_seconds()
                == other.to_bound().epoch_milliseconds().as_seconds()
    }
}

impl Eq for Interval {}

impl hash::Hash for Interval {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.from_bound().epoch_milliseconds().as_seconds().hash(state);
        self.to_bound().epoch_milliseconds().as_seconds().hash(state);
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_name("Interval", f)
    }
}
