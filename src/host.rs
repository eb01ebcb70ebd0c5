//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::{EpochMilliseconds, IntervalResult};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_milliseconds(&self) -> IntervalResult<EpochMilliseconds>;
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_milliseconds(&self) -> IntervalResult<EpochMilliseconds> {
        Ok(EpochMilliseconds::from_seconds(0))
    }
}
