/// Gregorian Date Calculations
///
/// This module contains the logic for Gregorian Date Calculations.
///
/// ## Shift window
///
/// Neri-Schneider compute over unsigned "computational" days, so
/// epoch days are shifted by whole 400 year cycles before the
/// conversion and the year is shifted back afterwards. A shift of
/// 680 cycles covers every epoch day in the `i32` year range used
/// by the calling crates.
///
/// | Significant Date | Computational Rata Die | Rata Die Shift
/// | -----------------|------------------------|-----------------|
/// | January 1, 0001 | 306 | 99,346,266 |
/// | January 1, 1970 | 719,468 | 100,065,428 |
/// | December 31, 9999 | 3,652,364 | 102,998,324 |
///
pub mod neri_schneider;

pub use neri_schneider::{
    day_of_week, days_in_month, epoch_days_from_gregorian_date as epoch_days_from_ymd,
    gregorian_day as day, gregorian_month as month, gregorian_year as year,
    gregorian_ymd_from_epoch_days as ymd_from_epoch_days, is_leap_year,
    rata_die_for_epoch_days, rata_die_from_gregorian_date,
};
