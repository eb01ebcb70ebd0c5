//! This module implements `UtcOffset`.

use core::fmt;

use crate::{
    error::{ErrorMessage, IntervalError},
    IntervalResult, MS_PER_MINUTE,
};

const MAX_OFFSET_MINUTES: i16 = 14 * 60;

/// A fixed offset from UTC, with minute precision.
///
/// A `UtcOffset` never consults a time zone database. It only records how
/// far a wall clock is ahead of (positive) or behind (negative) UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i16);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);

    /// Creates an offset from whole minutes, within `-14:00..=+14:00`.
    pub fn from_minutes(minutes: i16) -> IntervalResult<Self> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(
                IntervalError::invalid_argument().with_enum(ErrorMessage::OffsetOutOfRange)
            );
        }
        Ok(Self(minutes))
    }

    /// Creates an offset from whole hours, within `-14..=14`.
    pub fn from_hours(hours: i8) -> IntervalResult<Self> {
        Self::from_minutes(i16::from(hours) * 60)
    }

    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i16 {
        self.0
    }

    #[inline]
    pub(crate) fn as_milliseconds(self) -> i64 {
        i64::from(self.0) * MS_PER_MINUTE
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let minutes = self.0.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::UtcOffset;
    use alloc::string::ToString;

    #[test]
    fn offset_limits() {
        assert!(UtcOffset::from_hours(14).is_ok());
        assert!(UtcOffset::from_hours(-14).is_ok());
        assert!(UtcOffset::from_hours(15).is_err());
        assert!(UtcOffset::from_minutes(-841).is_err());
    }

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
        assert_eq!(UtcOffset::from_hours(3).unwrap().to_string(), "+03:00");
        assert_eq!(UtcOffset::from_minutes(-570).unwrap().to_string(), "-09:30");
    }
}
