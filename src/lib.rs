//! The `calendar_intervals` crate implements an algebra of day-granularity
//! calendar intervals.
//!
//! ```rust
//! use calendar_intervals::{CalendarDate, Interval, UtcOffset};
//!
//! let start = CalendarDate::try_new(2020, 3, 15, UtcOffset::UTC).unwrap();
//! let end = CalendarDate::try_new(2020, 5, 15, UtcOffset::UTC).unwrap();
//! let interval = Interval::try_new(start, end).unwrap();
//!
//! let months = interval.split_by_months().unwrap();
//! assert_eq!(months.len(), 3);
//! assert_eq!(months[0].days_count(), 17);
//! assert_eq!(months[1].days_count(), 30);
//! assert_eq!(months[2].days_count(), 15);
//! ```
//!
//! The central types are:
//!
//! - [`CalendarDate`]: a calendar day attached to a wall-clock time and a fixed
//!   [`UtcOffset`].
//! - [`Interval`]: an inclusive `[start, end]` range of calendar days, normalized
//!   to the start of its first day and the end of its last day, and bounded by
//!   [`MIN_DATE_TIME`] and [`MAX_DATE_TIME`].
//! - [`DayInterval`] and [`MonthInterval`]: intervals restricted to a single day
//!   or a single calendar month.
//!
//! Intervals can be split into days, Monday aligned weeks, calendar months or
//! fixed chunks, intersected, and have sub-ranges removed from them. The
//! [`splitters`] module applies the same bucketing idea to time strides and
//! numeric ranges.
//!
//! No time zone database is consulted: offsets are fixed and
//! [`CalendarDate::with_timezone`] relabels a wall-clock time under another
//! offset.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod iso;
pub mod splitters;

#[cfg(feature = "sys")]
pub mod sys;

mod components;
mod epoch_milliseconds;

#[doc(hidden)]
pub(crate) mod rounding;
#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::IntervalError;

/// The `calendar_intervals` result type
pub type IntervalResult<T> = Result<T, IntervalError>;

pub use crate::components::{
    CalendarDate, DayInterval, Interval, MonthInterval, UtcOffset, Weekday,
};
pub use crate::epoch_milliseconds::EpochMilliseconds;
pub use crate::iso::{IsoDate, IsoDateTime, IsoTime};

/// The earliest wall-clock date time an [`Interval`] may start at.
pub const MIN_DATE_TIME: IsoDateTime = IsoDateTime::new_unchecked(
    IsoDate::new_unchecked(2000, 1, 1),
    IsoTime::new_unchecked(0, 0, 0, 0),
);

/// The latest wall-clock date time an [`Interval`] may end at.
pub const MAX_DATE_TIME: IsoDateTime = IsoDateTime::new_unchecked(
    IsoDate::new_unchecked(2100, 12, 31),
    IsoTime::new_unchecked(23, 59, 59, 0),
);

/// A library specific trait for unwrapping assertions.
pub(crate) trait IntervalUnwrap {
    type Output;

    /// `calendar_intervals` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn interval_unwrap(self) -> IntervalResult<Self::Output>;
}

impl<T> IntervalUnwrap for Option<T> {
    type Output = T;

    fn interval_unwrap(self) -> IntervalResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(IntervalError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! interval_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::IntervalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::IntervalError::assert());
        }
    };
}

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Milliseconds per hour constant: 3.6e+6
pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
/// Milliseconds per minute constant: 6e+4
pub const MS_PER_MINUTE: i64 = 60 * 1000;
/// Milliseconds per second constant.
pub const MS_PER_SECOND: i64 = 1000;
