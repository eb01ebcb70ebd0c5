//! This module implements `DayInterval`.

use alloc::string::{String, ToString};
use core::{fmt, ops::Deref};

use crate::{
    components::{CalendarDate, Interval},
    error::{ErrorMessage, IntervalError},
    IntervalResult,
};

/// An [`Interval`] covering exactly one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayInterval(Interval);

impl DayInterval {
    /// Creates the `DayInterval` of `date`.
    pub fn try_new(date: CalendarDate) -> IntervalResult<Self> {
        Interval::try_from_date(date).map(Self)
    }

    /// Creates a `DayInterval` from a `start` and `end` on the same day.
    pub fn try_from_bounds(start: CalendarDate, end: CalendarDate) -> IntervalResult<Self> {
        Self::try_from_interval(Interval::try_new(start, end)?)
    }

    /// Narrows `interval` to a `DayInterval`, failing when it spans more
    /// than one day.
    pub fn try_from_interval(interval: Interval) -> IntervalResult<Self> {
        if !interval.start().same_day(&interval.end()) {
            return Err(IntervalError::invalid_interval()
                .with_enum(ErrorMessage::DayIntervalNotSingleDay));
        }
        Ok(Self(interval))
    }

    /// Returns the day this interval represents.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> CalendarDate {
        self.0.start()
    }

    #[inline]
    #[must_use]
    pub const fn as_interval(&self) -> &Interval {
        &self.0
    }

    /// Returns `"DayInterval. [{start}:{end}]"`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl Deref for DayInterval {
    type Target = Interval;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Interval> for DayInterval {
    fn as_ref(&self) -> &Interval {
        &self.0
    }
}

impl From<DayInterval> for Interval {
    fn from(value: DayInterval) -> Self {
        value.0
    }
}

impl TryFrom<Interval> for DayInterval {
    type Error = IntervalError;

    fn try_from(value: Interval) -> Result<Self, Self::Error> {
        Self::try_from_interval(value)
    }
}

impl fmt::Display for DayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_with_name("DayInterval", f)
    }
}
