//! Removal of sub-ranges from an `Interval`.

use alloc::vec::Vec;

use crate::{
    components::Interval,
    error::{ErrorMessage, IntervalError},
    IntervalResult,
};

impl Interval {
    /// Removes every day covered by `to_remove` from this interval and
    /// returns the remaining maximal runs of consecutive days, in order.
    ///
    /// The result is empty when every day was removed. Fails with
    /// `InvalidArgument` when `to_remove` is empty.
    ///
    /// Runs in time linear to the number of days in this interval times the
    /// number of ranges to remove.
    pub fn remove_ranges(&self, to_remove: &[Interval]) -> IntervalResult<Vec<Interval>> {
        if to_remove.is_empty() {
            return Err(
                IntervalError::invalid_argument().with_enum(ErrorMessage::EmptyRemovalList)
            );
        }

        let mut remaining = self.split_by_days()?;
        remaining.retain(|day| !to_remove.iter().any(|range| range.contains(day)));
        remaining.sort_by_key(|day| day.as_date().iso_date());

        let mut result = Vec::new();
        let mut days = remaining.iter().map(|day| day.as_date());
        let Some(first) = days.next() else {
            return Ok(result);
        };

        let mut chunk_start = first;
        let mut previous = first;
        for date in days {
            if previous.days_until(&date) != 1 {
                result.push(Interval::try_new(chunk_start, previous)?);
                chunk_start = date;
            }
            previous = date;
        }
        result.push(Interval::try_new(chunk_start, previous)?);

        #[cfg(feature = "log")]
        log::trace!(
            "removed {} ranges from {self}, {} ranges remain",
            to_remove.len(),
            result.len()
        );

        Ok(result)
    }
}
