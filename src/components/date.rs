//! This module implements `CalendarDate` and any directly related algorithms.

use core::{cmp::Ordering, fmt, hash};

use date_equations::gregorian;

use crate::{
    components::UtcOffset,
    error::{ErrorMessage, IntervalError},
    host::HostClock,
    iso::{IsoDate, IsoDateTime, IsoTime},
    utils, EpochMilliseconds, IntervalResult, MAX_DATE_TIME, MIN_DATE_TIME,
};

/// A day of the week, numbered as in ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Converts an ISO day number, 1 (Monday) through 7 (Sunday).
    #[must_use]
    pub const fn from_iso_number(number: u8) -> Option<Self> {
        Some(match number {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            7 => Self::Sunday,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn iso_number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

/// A single calendar day, together with the wall-clock time and the
/// [`UtcOffset`] it was constructed from.
///
/// `CalendarDate` is immutable; every transformation returns a new value.
///
/// Equality, hashing and [`Ord`] use the exact instant. Two dates built
/// from the same year, month and day under different offsets are therefore
/// not equal. The named comparators ([`CalendarDate::earlier`],
/// [`CalendarDate::same_day`], ...) work at day granularity on the
/// wall-clock date instead.
///
/// ```rust
/// use calendar_intervals::{CalendarDate, UtcOffset, Weekday};
///
/// let date = CalendarDate::try_new(2021, 1, 1, UtcOffset::UTC).unwrap();
/// assert_eq!(date.day_of_week(), Weekday::Friday);
/// // 2021-01-01 belongs to the last ISO week of 2020.
/// assert_eq!(date.iso_8601_week_of_year(), 53);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CalendarDate {
    iso: IsoDateTime,
    offset: UtcOffset,
}

// ==== Private API ====

impl CalendarDate {
    /// Create a new `CalendarDate` from a valid wall-clock record.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDateTime, offset: UtcOffset) -> Self {
        Self { iso, offset }
    }

    /// Returns a new `CalendarDate` on `date` with this date's time and offset.
    #[inline]
    fn with_date(&self, date: IsoDate) -> Self {
        Self::new_unchecked(IsoDateTime::new_unchecked(date, self.iso.time), self.offset)
    }

    /// Returns a new `CalendarDate` at `time` on this date.
    #[inline]
    fn with_time(&self, time: IsoTime) -> Self {
        Self::new_unchecked(IsoDateTime::new_unchecked(self.iso.date, time), self.offset)
    }
}

// ==== Public API ====

impl CalendarDate {
    /// Creates a new `CalendarDate` at midnight.
    pub fn try_new(year: i32, month: u8, day: u8, offset: UtcOffset) -> IntervalResult<Self> {
        Self::try_new_with_time(year, month, day, 0, 0, 0, offset)
    }

    /// Creates a new `CalendarDate` at the given wall-clock time.
    pub fn try_new_with_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        offset: UtcOffset,
    ) -> IntervalResult<Self> {
        let date = IsoDate::try_new(year, month, day)?;
        let time = IsoTime::try_new(hour, minute, second, 0)?;
        Ok(Self::new_unchecked(
            IsoDateTime::new_unchecked(date, time),
            offset,
        ))
    }

    /// Creates a new `CalendarDate` from a wall-clock record.
    pub fn try_from_iso(iso: IsoDateTime, offset: UtcOffset) -> IntervalResult<Self> {
        let date = IsoDate::try_new(iso.date.year, iso.date.month, iso.date.day)?;
        let time = IsoTime::try_new(
            iso.time.hour,
            iso.time.minute,
            iso.time.second,
            iso.time.millisecond,
        )?;
        Ok(Self::new_unchecked(
            IsoDateTime::new_unchecked(date, time),
            offset,
        ))
    }

    /// Creates a `CalendarDate` for an exact instant, as seen from `offset`.
    pub fn from_epoch_milliseconds(
        instant: EpochMilliseconds,
        offset: UtcOffset,
    ) -> IntervalResult<Self> {
        let local = instant
            .as_i64()
            .checked_add(offset.as_milliseconds())
            .ok_or(IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange))?;
        Ok(Self::new_unchecked(
            IsoDateTime::from_local_epoch_ms(local)?,
            offset,
        ))
    }

    /// The lower global bound, `2000-01-01T00:00:00`, under `offset`.
    #[must_use]
    pub const fn min_value(offset: UtcOffset) -> Self {
        Self::new_unchecked(MIN_DATE_TIME, offset)
    }

    /// The upper global bound, `2100-12-31T23:59:59`, under `offset`.
    #[must_use]
    pub const fn max_value(offset: UtcOffset) -> Self {
        Self::new_unchecked(MAX_DATE_TIME, offset)
    }

    /// Returns the current date and time read from `clock`, as seen from `offset`.
    pub fn now_with_clock(clock: &impl HostClock, offset: UtcOffset) -> IntervalResult<Self> {
        Self::from_epoch_milliseconds(clock.get_host_epoch_milliseconds()?, offset)
    }

    /// Returns the start of the current day read from `clock`.
    pub fn today_with_clock(clock: &impl HostClock, offset: UtcOffset) -> IntervalResult<Self> {
        Ok(Self::now_with_clock(clock, offset)?.start_of_day())
    }

    /// Returns the start of the day after the current day read from `clock`.
    pub fn tomorrow_with_clock(clock: &impl HostClock, offset: UtcOffset) -> IntervalResult<Self> {
        Self::today_with_clock(clock, offset)?.add_days(1)
    }

    /// Returns the start of the day before the current day read from `clock`.
    pub fn yesterday_with_clock(
        clock: &impl HostClock,
        offset: UtcOffset,
    ) -> IntervalResult<Self> {
        Self::today_with_clock(clock, offset)?.subtract_days(1)
    }

    /// Returns the current UTC date and time from the system clock.
    #[cfg(feature = "sys")]
    pub fn now() -> IntervalResult<Self> {
        Self::now_with_clock(&crate::sys::SystemClock, UtcOffset::UTC)
    }

    /// Returns the start of the current UTC day.
    #[cfg(feature = "sys")]
    pub fn today() -> IntervalResult<Self> {
        Self::today_with_clock(&crate::sys::SystemClock, UtcOffset::UTC)
    }

    /// Returns the start of the next UTC day.
    #[cfg(feature = "sys")]
    pub fn tomorrow() -> IntervalResult<Self> {
        Self::tomorrow_with_clock(&crate::sys::SystemClock, UtcOffset::UTC)
    }

    /// Returns the start of the previous UTC day.
    #[cfg(feature = "sys")]
    pub fn yesterday() -> IntervalResult<Self> {
        Self::yesterday_with_clock(&crate::sys::SystemClock, UtcOffset::UTC)
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.date.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.date.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.date.day
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.time.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.time.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.time.second
    }

    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> u16 {
        self.iso.time.millisecond
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the wall-clock calendar date.
    #[inline]
    #[must_use]
    pub const fn iso_date(&self) -> IsoDate {
        self.iso.date
    }

    /// Returns the wall-clock date and time.
    #[inline]
    #[must_use]
    pub const fn iso_date_time(&self) -> IsoDateTime {
        self.iso
    }

    /// Returns the exact instant this date represents.
    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> EpochMilliseconds {
        EpochMilliseconds(self.iso.to_local_epoch_ms() - self.offset.as_milliseconds())
    }

    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        let number = self.iso.date.day_of_week();
        debug_assert!((1..=7).contains(&number), "ISO weekday out of range: {number}");
        Weekday::from_iso_number(number).unwrap_or(Weekday::Monday)
    }

    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        self.iso.date.day_of_year()
    }

    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.iso.date.days_in_month()
    }

    // ==== Arithmetic ====

    /// Returns this date shifted by `days` calendar days, keeping the
    /// wall-clock time and offset.
    pub fn add_days(&self, days: i32) -> IntervalResult<Self> {
        Ok(self.with_date(self.iso.date.add_days(i64::from(days))?))
    }

    pub fn subtract_days(&self, days: i32) -> IntervalResult<Self> {
        let days = days.checked_neg().ok_or(
            IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange),
        )?;
        self.add_days(days)
    }

    pub fn add_weeks(&self, weeks: i32) -> IntervalResult<Self> {
        let days = weeks.checked_mul(7).ok_or(
            IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange),
        )?;
        self.add_days(days)
    }

    /// Returns this date shifted by a number of wall-clock milliseconds.
    pub fn add_milliseconds(&self, milliseconds: i64) -> IntervalResult<Self> {
        let local = self
            .iso
            .to_local_epoch_ms()
            .checked_add(milliseconds)
            .ok_or(IntervalError::invalid_argument().with_enum(ErrorMessage::DateOutOfRange))?;
        Ok(Self::new_unchecked(
            IsoDateTime::from_local_epoch_ms(local)?,
            self.offset,
        ))
    }

    /// `00:00:00.000` on this day, in the same offset.
    #[must_use]
    pub fn start_of_day(&self) -> Self {
        self.with_time(IsoTime::start_of_day())
    }

    /// `23:59:59.000` on this day, in the same offset.
    #[must_use]
    pub fn end_of_day(&self) -> Self {
        self.with_time(IsoTime::end_of_day())
    }

    #[must_use]
    pub fn is_first_day_of_month(&self) -> bool {
        self.iso.date.day == 1
    }

    #[must_use]
    pub fn is_last_day_of_month(&self) -> bool {
        self.iso.date.day == self.iso.date.days_in_month()
    }

    #[must_use]
    pub fn is_weekend(&self) -> bool {
        self.day_of_week().is_weekend()
    }

    /// The first day of this date's month, keeping the time and offset.
    #[must_use]
    pub fn first_day_of_month(&self) -> Self {
        self.with_date(IsoDate::new_unchecked(self.year(), self.month(), 1))
    }

    /// The last day of this date's month, keeping the time and offset.
    #[must_use]
    pub fn last_day_of_month(&self) -> Self {
        self.with_date(IsoDate::new_unchecked(
            self.year(),
            self.month(),
            self.days_in_month(),
        ))
    }

    /// Rolls forward to the next Sunday, or returns `self` on a Sunday.
    pub fn end_of_week(&self) -> IntervalResult<Self> {
        let days_to_sunday = Weekday::Sunday.iso_number() - self.day_of_week().iso_number();
        self.add_days(i32::from(days_to_sunday))
    }

    /// The first day of the trailing seven day window ending on this day.
    pub fn previous_week_start_date(&self) -> IntervalResult<Self> {
        self.subtract_days(6)
    }

    /// Relabels this wall-clock time under a UTC offset of `offset_hours`.
    ///
    /// The wall-clock fields are kept as they are, so the represented
    /// instant moves by the difference between the two offsets. This is
    /// not a time zone conversion.
    pub fn with_timezone(&self, offset_hours: i8) -> IntervalResult<Self> {
        Ok(Self::new_unchecked(
            self.iso,
            UtcOffset::from_hours(offset_hours)?,
        ))
    }

    /// Returns the ISO 8601 week number of this date.
    ///
    /// Monday through Wednesday are moved forward to the Thursday through
    /// Saturday of the same week before numbering, which makes late
    /// December days land in week 1 of the next year where appropriate.
    #[must_use]
    pub fn iso_8601_week_of_year(&self) -> u8 {
        let mut epoch_days = self.iso.date.to_epoch_days();
        if matches!(
            self.day_of_week(),
            Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday
        ) {
            epoch_days += 3;
        }
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        utils::first_four_day_week_of_year(year, month, day)
    }

    // ==== Day level comparisons ====

    /// Returns whether this day comes before `other`'s day.
    #[must_use]
    pub fn earlier(&self, other: &Self) -> bool {
        self.iso.date < other.iso.date
    }

    /// Returns whether this day comes after `other`'s day.
    #[must_use]
    pub fn later(&self, other: &Self) -> bool {
        self.iso.date > other.iso.date
    }

    #[must_use]
    pub fn earlier_or_equal(&self, other: &Self) -> bool {
        self.iso.date <= other.iso.date
    }

    #[must_use]
    pub fn later_or_equal(&self, other: &Self) -> bool {
        self.iso.date >= other.iso.date
    }

    #[must_use]
    pub fn same_day(&self, other: &Self) -> bool {
        self.iso.date == other.iso.date
    }

    #[must_use]
    pub fn same_month(&self, other: &Self) -> bool {
        self.iso.date.same_month(other.iso.date)
    }

    /// Returns the number of calendar days from this day to `other`'s day.
    #[must_use]
    pub fn days_until(&self, other: &Self) -> i32 {
        self.iso.date.days_until(other.iso.date)
    }
}

// ==== Trait impls ====

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.epoch_milliseconds() == other.epoch_milliseconds()
    }
}

impl Eq for CalendarDate {}

impl hash::Hash for CalendarDate {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.epoch_milliseconds().hash(state);
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch_milliseconds().cmp(&other.epoch_milliseconds())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let IsoDateTime { date, time } = self.iso;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            date.year, date.month, date.day, time.hour, time.minute, time.second
        )?;
        if time.millisecond != 0 {
            write!(f, ".{:03}", time.millisecond)?;
        }
        self.offset.fmt(f)
    }
}

// ==== Tests ====
