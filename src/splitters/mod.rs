//! Fixed stride bucketing of time and numeric ranges.
//!
//! The splitters in this module apply the bucketing used by
//! [`Interval`](crate::Interval) splitting to continuous domains:
//!
//!   - [`TimeRangeSplitter`] walks from a minimum to a maximum
//!     [`CalendarDate`](crate::CalendarDate) in steps of a fixed duration.
//!   - [`ValuesByRangesSplitter`] divides a numeric range into buckets of a
//!     fixed width, as used for histogram boundaries.
//!
//! Both compute their ranges once, at construction, and hand out the same
//! stored ranges on every access.

mod time;
mod values;

#[doc(inline)]
pub use time::{TimeRange, TimeRangeSplitter};
#[doc(inline)]
pub use values::{RangeBounds, ValueRange, ValuesByRangesSplitter};
