//! This module implements the wall-clock field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` represents a proleptic Gregorian year, month and day. An
//! `IsoTime` represents an hour, minute, second and millisecond within a day.
//! An `IsoDateTime` is the record of both. None of the records carry a UTC
//! offset; they describe what a wall clock shows.

use date_equations::gregorian;

use crate::{
    error::{ErrorMessage, IntervalError},
    utils, IntervalResult, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

// ==== `IsoDateTime` section ====

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates an `IsoDateTime` from milliseconds since the epoch of the
    /// wall clock, i.e. without any offset applied.
    pub(crate) fn from_local_epoch_ms(ms: i64) -> IntervalResult<Self> {
        let days = utils::epoch_time_to_day_number(ms);
        if !utils::is_valid_epoch_days(days) {
            return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange));
        }
        let (hour, minute, second, millisecond) =
            utils::time_in_day_to_fields(utils::epoch_time_to_time_in_day(ms));
        Ok(Self::new_unchecked(
            IsoDate::from_epoch_days_unchecked(days as i32),
            IsoTime::new_unchecked(hour, minute, second, millisecond),
        ))
    }

    /// Returns the wall clock milliseconds since the epoch.
    pub(crate) fn to_local_epoch_ms(self) -> i64 {
        utils::epoch_days_to_epoch_ms(self.date.to_epoch_days(), self.time.to_milliseconds())
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for the year, month and day fields.
///
/// Valid dates range from 0001-01-01 through 9999-12-31.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub fn try_new(year: i32, month: u8, day: u8) -> IntervalResult<Self> {
        if !(1..=9999).contains(&year) {
            return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange));
        }
        if !is_valid_date(year, month, day) {
            return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::InvalidDate));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    fn from_epoch_days_unchecked(epoch_days: i32) -> Self {
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        Self::new_unchecked(year, month, day)
    }

    /// Creates an `IsoDate` from days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i64) -> IntervalResult<Self> {
        if !utils::is_valid_epoch_days(epoch_days) {
            return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange));
        }
        Ok(Self::from_epoch_days_unchecked(epoch_days as i32))
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub fn to_epoch_days(self) -> i32 {
        gregorian::epoch_days_from_ymd(self.year, i32::from(self.month), i32::from(self.day))
    }

    /// Returns whether the current `IsoDate` names an existing day.
    #[must_use]
    pub fn is_valid(self) -> bool {
        (1..=9999).contains(&self.year) && is_valid_date(self.year, self.month, self.day)
    }

    /// Returns the date `days` calendar days away.
    pub fn add_days(self, days: i64) -> IntervalResult<Self> {
        let target = i64::from(self.to_epoch_days())
            .checked_add(days)
            .ok_or(IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange))?;
        Self::from_epoch_days(target)
    }

    /// Returns the signed number of days from `self` to `other`.
    #[inline]
    #[must_use]
    pub fn days_until(self, other: Self) -> i32 {
        other.to_epoch_days() - self.to_epoch_days()
    }

    /// Returns the ISO day of the week, 1 (Monday) through 7 (Sunday).
    #[inline]
    #[must_use]
    pub fn day_of_week(self) -> u8 {
        utils::iso_day_of_week(self.year, self.month, self.day)
    }

    /// Returns the 1-based day of the year.
    #[inline]
    #[must_use]
    pub fn day_of_year(self) -> u16 {
        utils::iso_day_of_year(self.year, self.month, self.day)
    }

    #[inline]
    #[must_use]
    pub fn days_in_month(self) -> u8 {
        utils::iso_days_in_month(self.year, self.month)
    }

    #[inline]
    #[must_use]
    pub fn same_month(self, other: Self) -> bool {
        self.year == other.year && self.month == other.month
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record holding the hour, minute, second and millisecond
/// fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Creates a new validated `IsoTime`.
    pub fn try_new(hour: u8, minute: u8, second: u8, millisecond: u16) -> IntervalResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::InvalidTime));
        }
        Ok(Self::new_unchecked(hour, minute, second, millisecond))
    }

    /// `00:00:00.000`
    #[must_use]
    pub const fn start_of_day() -> Self {
        Self::new_unchecked(0, 0, 0, 0)
    }

    /// `23:59:59.000`
    #[must_use]
    pub const fn end_of_day() -> Self {
        Self::new_unchecked(23, 59, 59, 0)
    }

    /// Returns the milliseconds elapsed since midnight.
    #[must_use]
    pub fn to_milliseconds(self) -> i64 {
        i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

// ==== `IsoDate` specific utility functions ====

#[inline]
/// Utility function to determine if a `Date` is valid.
pub(crate) fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    (1..=utils::iso_days_in_month(year, month)).contains(&day)
}
