// NOTE: The forward equations (Y, M, D -> rata die) are only exact for
// a non-negative computational year, i.e. years >= 1. Callers are
// expected to validate their year range before converting.

const EPOCH_COMPUTATIONAL_RATA_DIE: i32 = 719_468;

const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant
const DAYS_IN_GREGORIAN_CYCLE: i32 = DAYS_IN_A_400Y_CYCLE as i32;

const SHIFTS: i32 = 680;

// ==== Gregorian date -> Rata Die ====

/// Returns the computational rata die for a Gregorian date.
pub const fn rata_die_from_gregorian_date(year: i32, month: i32, day: i32) -> i32 {
    let (comp_year, comp_month, comp_day, century) = rata_die_first_equations(year, month, day);
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day
}

/// Returns the number of days since 1970-01-01 for a Gregorian date.
pub const fn epoch_days_from_gregorian_date(year: i32, month: i32, day: i32) -> i32 {
    rata_die_from_gregorian_date(year, month, day) - EPOCH_COMPUTATIONAL_RATA_DIE
}

// Returns Y, M, D, C
const fn rata_die_first_equations(year: i32, month: i32, day: i32) -> (i32, i32, i32, i32) {
    let j = (month <= 2) as i32;
    let computational_year = year - j;
    let computation_month = month + 12 * j;
    let computation_day = day - 1;
    (
        computational_year,
        computation_month,
        computation_day,
        computational_year / 100,
    )
}

// ==== Rata Die -> Gregorian date ====

/// Returns the shifted computational rata die for some epoch days.
pub const fn rata_die_for_epoch_days(epoch_days: i32) -> u32 {
    (epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE + DAYS_IN_GREGORIAN_CYCLE * SHIFTS) as u32
}

const fn n_one(rata_die: u32) -> u32 {
    4 * rata_die + 3
}

// Returns C, N_c
const fn first_equations(rata_die: u32) -> (u32, u32) {
    let n_one = n_one(rata_die);
    (
        n_one.div_euclid(DAYS_IN_A_400Y_CYCLE),
        n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE),
    )
}

// Returns Y, N_y
const fn second_equations(rata_die: u32) -> (u32, u32) {
    let (century, rem) = first_equations(rata_die);
    let n_two = rem | 3;
    let year_of_century = (376_287_347 * n_two as u64).div_euclid(TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century).div_euclid(4);
    (100 * century + year_of_century, day_of_year)
}

// Returns Y, M, D, N_y
const fn third_equations(rata_die: u32) -> (u32, u32, u32, u32) {
    let (year, day_of_year) = second_equations(rata_die);
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three.div_euclid(TWO_POWER_SIXTEEN);
    let day = n_three.rem_euclid(TWO_POWER_SIXTEEN).div_euclid(2141);
    (year, month, day, day_of_year)
}

const fn gregorian_ymd(rata_die: u32) -> (i32, u8, u8) {
    let (year, month, day, day_of_year) = third_equations(rata_die);
    let j = (day_of_year >= 306) as u32;
    ((year + j) as i32, (month - 12 * j) as u8, (day + 1) as u8)
}

/// Returns the Gregorian year, month and day for some epoch days.
pub const fn gregorian_ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    let (year, month, day) = gregorian_ymd(rata_die_for_epoch_days(epoch_days));
    // Shift the year back to the proper date
    (year - 400 * SHIFTS, month, day)
}

pub const fn gregorian_year(epoch_days: i32) -> i32 {
    gregorian_ymd_from_epoch_days(epoch_days).0
}

pub const fn gregorian_month(epoch_days: i32) -> u8 {
    gregorian_ymd_from_epoch_days(epoch_days).1
}

pub const fn gregorian_day(epoch_days: i32) -> u8 {
    gregorian_ymd_from_epoch_days(epoch_days).2
}

// ==== Supporting equations ====

/// Returns the ISO day of the week, 1 (Monday) through 7 (Sunday).
///
/// 1970-01-01 was a Thursday.
pub const fn day_of_week(epoch_days: i32) -> u8 {
    ((epoch_days + 3).rem_euclid(7) + 1) as u8
}

pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the days in a month, or 0 for a month outside `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
