//! Access to the system clock.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::{ErrorMessage, IntervalError},
    host::HostClock,
    EpochMilliseconds, IntervalResult,
};

/// A [`HostClock`] backed by [`std::time::SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_milliseconds(&self) -> IntervalResult<EpochMilliseconds> {
        get_system_milliseconds()
    }
}

/// Returns the system time in milliseconds.
pub(crate) fn get_system_milliseconds() -> IntervalResult<EpochMilliseconds> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| IntervalError::invalid_argument().with_enum(ErrorMessage::SystemTimeUnavailable))?
        .as_millis();
    i64::try_from(millis)
        .map(EpochMilliseconds::from)
        .map_err(|_| IntervalError::invalid_argument().with_enum(ErrorMessage::SystemTimeUnavailable))
}
