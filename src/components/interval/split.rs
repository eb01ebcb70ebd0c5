//! Decomposition of an `Interval` into days, weeks, months and chunks.

use alloc::{vec, vec::Vec};

use crate::{
    components::{DayInterval, Interval, MonthInterval, Weekday},
    error::{ErrorMessage, IntervalError},
    IntervalResult,
};

/// Weeks are emitted as `[monday, monday + 6 days]`.
const WEEK_CHUNK_DAYS: u32 = 6;

impl Interval {
    /// Splits this interval into one [`DayInterval`] per calendar day, in
    /// ascending order.
    pub fn split_by_days(&self) -> IntervalResult<Vec<DayInterval>> {
        if self.start.same_day(&self.end) {
            return Ok(vec![DayInterval::try_new(self.start)?]);
        }

        let mut days = Vec::with_capacity(self.days_count());
        let mut cursor = self.start;
        while cursor.earlier_or_equal(&self.end) {
            days.push(DayInterval::try_new(cursor)?);
            cursor = cursor.add_days(1)?;
        }

        Ok(days)
    }

    /// Splits this interval at month boundaries.
    ///
    /// The first and last months are trimmed to this interval's start and
    /// end; every month in between is complete. At least one month is always
    /// returned.
    pub fn split_by_months(&self) -> IntervalResult<Vec<MonthInterval>> {
        if self.start.same_month(&self.end) {
            return Ok(vec![MonthInterval::try_new(self.start, self.end)?]);
        }

        let mut months = vec![MonthInterval::try_new(
            self.start,
            self.start.last_day_of_month(),
        )?];

        let mut cursor = self.start.last_day_of_month().add_days(1)?;
        while !cursor.same_month(&self.end) {
            let month_end = cursor.last_day_of_month();
            months.push(MonthInterval::try_new(cursor, month_end)?);
            cursor = month_end.add_days(1)?;
        }

        months.push(MonthInterval::try_new(
            self.end.first_day_of_month(),
            self.end,
        )?);

        #[cfg(feature = "log")]
        log::trace!("{self} split into {} months", months.len());

        Ok(months)
    }

    /// Splits this interval into Monday through Sunday weeks.
    ///
    /// When the interval does not start on a Monday, the first element runs
    /// from the start to the following Sunday. The last element ends with
    /// the interval and may be shorter than a week.
    pub fn split_by_weeks(&self) -> IntervalResult<Vec<Interval>> {
        if self.start.day_of_week() == Weekday::Monday {
            return self.split_by_chunks_internal(WEEK_CHUNK_DAYS, true);
        }

        let first_week_end = self.start.end_of_week()?;
        if first_week_end.later_or_equal(&self.end) {
            return Ok(vec![*self]);
        }

        let mut weeks = vec![Interval::try_new(self.start, first_week_end)?];
        let remainder = Interval::try_new(first_week_end.add_days(1)?, self.end)?;
        weeks.extend(remainder.split_by_chunks_internal(WEEK_CHUNK_DAYS, true)?);

        Ok(weeks)
    }

    /// Splits this interval into `[cursor, cursor + days]` chunks.
    ///
    /// Each chunk starts on the day the previous chunk ended, so neighbouring
    /// chunks share a boundary day. The final chunk always ends with the
    /// interval and may be shorter than `days`.
    pub fn split_by_chunks(&self, days: u32) -> IntervalResult<Vec<Interval>> {
        self.split_by_chunks_internal(days, false)
    }

    fn split_by_chunks_internal(
        &self,
        days: u32,
        advance_by_chunk_plus_one_day: bool,
    ) -> IntervalResult<Vec<Interval>> {
        if days == 0 {
            return Err(IntervalError::invalid_argument().with_enum(ErrorMessage::ZeroChunkSize));
        }
        // A chunk wider than any interval is never emitted.
        let days = i32::try_from(days).unwrap_or(i32::MAX);

        let mut chunks = Vec::new();
        let mut cursor = self.start;
        // `end` is later than `cursor + days`
        while cursor.days_until(&self.end) > days {
            let chunk_end = cursor.add_days(days)?;
            chunks.push(Interval::try_new(cursor, chunk_end)?);
            cursor = if advance_by_chunk_plus_one_day {
                chunk_end.add_days(1)?
            } else {
                chunk_end
            };
        }
        chunks.push(Interval::try_new(cursor, self.end)?);

        #[cfg(feature = "log")]
        log::trace!("{self} split into {} chunks of {days} days", chunks.len());

        Ok(chunks)
    }

    /// Returns every Monday through Friday of this interval.
    pub fn work_days(&self) -> IntervalResult<Vec<DayInterval>> {
        let mut days = self.split_by_days()?;
        days.retain(|day| !day.as_date().is_weekend());
        Ok(days)
    }
}
