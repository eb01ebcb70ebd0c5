//! Utility date and time equations

use date_equations::gregorian;

use crate::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// The epoch days of 0001-01-01.
pub(crate) const MIN_EPOCH_DAYS: i32 = -719_162;
/// The epoch days of 9999-12-31.
pub(crate) const MAX_EPOCH_DAYS: i32 = 2_932_896;

// ==== Begin Date Equations ====

/// `EpochDaysToEpochMS`
pub(crate) fn epoch_days_to_epoch_ms(day: i32, time_ms: i64) -> i64 {
    i64::from(day) * MS_PER_DAY + time_ms
}

/// `EpochTimeToDayNumber`
pub(crate) fn epoch_time_to_day_number(t: i64) -> i64 {
    t.div_euclid(MS_PER_DAY)
}

/// Returns the milliseconds elapsed since the start of the day for `t`.
pub(crate) fn epoch_time_to_time_in_day(t: i64) -> i64 {
    t.rem_euclid(MS_PER_DAY)
}

/// Returns `(hour, minute, second, millisecond)` for milliseconds into a day.
pub(crate) fn time_in_day_to_fields(ms: i64) -> (u8, u8, u8, u16) {
    let hour = ms / MS_PER_HOUR;
    let minute = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let second = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    (hour as u8, minute as u8, second as u8, millis as u16)
}

pub(crate) fn is_valid_epoch_days(epoch_days: i64) -> bool {
    (i64::from(MIN_EPOCH_DAYS)..=i64::from(MAX_EPOCH_DAYS)).contains(&epoch_days)
}

// ==== End Date Equations ====

// ==== Begin Calendar Equations ====

/// `ISODaysInMonth ( year, month )`
pub(crate) fn iso_days_in_month(year: i32, month: u8) -> u8 {
    gregorian::days_in_month(year, month)
}

/// Returns the 1-based ordinal day of the year.
pub(crate) fn iso_day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let jan_first = gregorian::epoch_days_from_ymd(year, 1, 1);
    let date = gregorian::epoch_days_from_ymd(year, i32::from(month), i32::from(day));
    (date - jan_first + 1) as u16
}

/// Returns the ISO day of the week, 1 (Monday) through 7 (Sunday).
pub(crate) fn iso_day_of_week(year: i32, month: u8, day: u8) -> u8 {
    gregorian::day_of_week(gregorian::epoch_days_from_ymd(
        year,
        i32::from(month),
        i32::from(day),
    ))
}

/// Week of year where weeks start on Monday and week 1 is the first week
/// with at least four days in the year.
///
/// Days before the first week belong to the last week of the previous year.
/// Late December days are never moved into week 1 of the following year, so
/// a late December Monday through Wednesday may be reported as week 53.
pub(crate) fn first_four_day_week_of_year(year: i32, month: u8, day: u8) -> u8 {
    let day_of_year = i32::from(iso_day_of_year(year, month, day)) - 1;
    let jan_first = i32::from(iso_day_of_week(year, 1, 1)) - 1;

    // Zero-based ordinal of the Monday starting week 1. Week 1 begins in
    // the previous year when January 1st falls on Monday through Thursday.
    let first_monday = if jan_first <= 3 {
        -jan_first
    } else {
        7 - jan_first
    };

    let offset = day_of_year - first_monday;
    if offset >= 0 {
        return (offset / 7 + 1) as u8;
    }

    first_four_day_week_of_year(year - 1, 12, 31)
}

// ==== End Calendar Equations ====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_fields() {
        assert_eq!(time_in_day_to_fields(0), (0, 0, 0, 0));
        assert_eq!(time_in_day_to_fields(MS_PER_DAY - 1), (23, 59, 59, 999));
        assert_eq!(
            time_in_day_to_fields(13 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 7_250),
            (13, 5, 7, 250)
        );
    }

    #[test]
    fn day_number_floors_negative_times() {
        assert_eq!(epoch_time_to_day_number(-1), -1);
        assert_eq!(epoch_time_to_time_in_day(-1), MS_PER_DAY - 1);
        assert_eq!(epoch_time_to_day_number(MS_PER_DAY), 1);
    }

    #[test]
    fn day_of_year() {
        assert_eq!(iso_day_of_year(2021, 1, 1), 1);
        assert_eq!(iso_day_of_year(2020, 12, 31), 366);
        assert_eq!(iso_day_of_year(2021, 12, 31), 365);
        assert_eq!(iso_day_of_year(2020, 3, 1), 61);
    }

    #[test]
    fn first_four_day_weeks() {
        // 2020-01-01 is a Wednesday, so week 1 starts 2019-12-30.
        assert_eq!(first_four_day_week_of_year(2020, 1, 1), 1);
        assert_eq!(first_four_day_week_of_year(2020, 1, 5), 1);
        assert_eq!(first_four_day_week_of_year(2020, 1, 6), 2);
        // 2021-01-01 is a Friday and still belongs to 2020's last week.
        assert_eq!(first_four_day_week_of_year(2021, 1, 1), 53);
        assert_eq!(first_four_day_week_of_year(2021, 1, 3), 53);
        assert_eq!(first_four_day_week_of_year(2021, 1, 4), 1);
        // No roll forward into the next year.
        assert_eq!(first_four_day_week_of_year(2019, 12, 30), 53);
    }
}
