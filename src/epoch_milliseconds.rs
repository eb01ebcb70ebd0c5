use crate::MS_PER_SECOND;

#[cfg(feature = "std")]
use crate::error::{ErrorMessage, IntervalError};

/// An exact instant, counted in milliseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochMilliseconds(pub(crate) i64);

impl From<i64> for EpochMilliseconds {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl EpochMilliseconds {
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * MS_PER_SECOND)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns the whole seconds of this instant, rounded towards negative
    /// infinity.
    pub const fn as_seconds(&self) -> i64 {
        self.0.div_euclid(MS_PER_SECOND)
    }
}

#[cfg(feature = "std")]
impl TryFrom<std::time::SystemTime> for EpochMilliseconds {
    type Error = IntervalError;

    /// Converts a [`std::time::SystemTime`], truncating towards negative
    /// infinity. Times before the Unix epoch are supported.
    fn try_from(time: std::time::SystemTime) -> Result<Self, Self::Error> {
        let out_of_range =
            || IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange);
        match time.duration_since(std::time::UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis())
                .map(Self)
                .map_err(|_| out_of_range()),
            Err(before) => {
                let before = before.duration();
                let mut millis = i64::try_from(before.as_millis()).map_err(|_| out_of_range())?;
                if before.subsec_nanos() % 1_000_000 != 0 {
                    millis = millis.checked_add(1).ok_or_else(out_of_range)?;
                }
                Ok(Self(-millis))
            }
        }
    }
}
