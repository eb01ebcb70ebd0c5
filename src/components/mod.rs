//! The primary calendar components provided by `calendar_intervals`.
//!
//! A [`CalendarDate`] names a single day. An [`Interval`] is an inclusive
//! range of days, specialized by [`DayInterval`] and [`MonthInterval`] for
//! ranges restricted to one day or one calendar month.

mod date;
mod day_interval;
mod interval;
mod month_interval;
mod offset;

#[doc(inline)]
pub use date::{CalendarDate, Weekday};
#[doc(inline)]
pub use day_interval::DayInterval;
#[doc(inline)]
pub use interval::Interval;
#[doc(inline)]
pub use month_interval::MonthInterval;
#[doc(inline)]
pub use offset::UtcOffset;
