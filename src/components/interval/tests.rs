use alloc::{vec, vec::Vec};

use super::*;
use crate::{error::ErrorKind, iso::IsoDate, DayInterval, MonthInterval};

fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::try_new(year, month, day, UtcOffset::UTC).unwrap()
}

fn interval(start: (i32, u8, u8), end: (i32, u8, u8)) -> Interval {
    Interval::try_new(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
}

fn days_of(intervals: &[Interval]) -> Vec<(IsoDate, IsoDate)> {
    intervals
        .iter()
        .map(|i| (i.start().iso_date(), i.end().iso_date()))
        .collect()
}

fn iso(year: i32, month: u8, day: u8) -> IsoDate {
    IsoDate::new_unchecked(year, month, day)
}

// ==== Construction ====

#[test]
fn rejects_start_after_end() {
    let err = Interval::try_new(date(2020, 6, 2), date(2020, 6, 1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInterval);

    // Same day, later time of day, is still a valid single day.
    let evening = CalendarDate::try_new_with_time(2020, 6, 1, 20, 0, 0, UtcOffset::UTC).unwrap();
    assert!(Interval::try_new(evening, date(2020, 6, 1)).is_ok());
}

#[test]
fn rejects_out_of_bounds() {
    let min = CalendarDate::min_value(UtcOffset::UTC);
    let max = CalendarDate::max_value(UtcOffset::UTC);

    let err = Interval::try_new(min.subtract_days(1).unwrap(), min.add_days(1).unwrap())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInterval);

    let err = Interval::try_new(max, max.add_days(1).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInterval);

    let whole_range = Interval::try_new(min, max).unwrap();
    assert_eq!(whole_range.from_bound().iso_date_time(), crate::MIN_DATE_TIME);
    assert_eq!(whole_range.to_bound().iso_date_time(), crate::MAX_DATE_TIME);
}

#[test]
fn bounds_are_measured_in_the_own_offset() {
    let offset = UtcOffset::from_hours(-10).unwrap();
    let min = CalendarDate::min_value(offset);
    assert!(Interval::try_from_date(min).is_ok());
    assert!(Interval::try_from_date(min.subtract_days(1).unwrap()).is_err());
}

#[test]
fn normalized_bounds_stay_ordered() {
    for (start, end) in [
        ((2000, 1, 1), (2000, 1, 1)),
        ((2020, 2, 28), (2020, 3, 1)),
        ((2099, 12, 1), (2100, 12, 31)),
    ] {
        let i = interval(start, end);
        assert!(i.from_bound() <= i.to_bound());
        assert!(i.from_bound().iso_date_time() >= crate::MIN_DATE_TIME);
        assert!(i.to_bound().iso_date_time() <= crate::MAX_DATE_TIME);
    }
}

#[test]
fn from_instants_defaults_end_to_start() {
    // 2020-06-09T12:00:00Z
    let noon = EpochMilliseconds::from(1_591_704_000_000);
    let single = Interval::from_instants(noon, None, UtcOffset::UTC).unwrap();
    assert_eq!(single, interval((2020, 6, 9), (2020, 6, 9)));

    let two_days_later = EpochMilliseconds::from(1_591_704_000_000 + 2 * crate::MS_PER_DAY);
    let range = Interval::from_instants(noon, Some(two_days_later), UtcOffset::UTC).unwrap();
    assert_eq!(range, interval((2020, 6, 9), (2020, 6, 11)));
    assert_eq!(range.days_count(), 3);
}

#[test]
fn equality_ignores_time_of_day() {
    let morning = CalendarDate::try_new_with_time(2020, 6, 1, 8, 0, 0, UtcOffset::UTC).unwrap();
    let evening = CalendarDate::try_new_with_time(2020, 6, 2, 17, 0, 0, UtcOffset::UTC).unwrap();
    let a = Interval::try_new(morning, date(2020, 6, 2)).unwrap();
    let b = Interval::try_new(date(2020, 6, 1), evening).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, interval((2020, 6, 1), (2020, 6, 3)));
}

#[test]
fn display_string() {
    let i = interval((2020, 6, 1), (2020, 6, 30));
    assert_eq!(
        i.to_display_string(),
        "Interval. [2020-06-01T00:00:00+00:00:2020-06-30T00:00:00+00:00]"
    );
}

// ==== Containment and intersection ====

#[test]
fn contains() {
    let a = interval((2020, 6, 1), (2020, 6, 30));
    let b = interval((2020, 6, 5), (2020, 6, 20));
    assert!(a.contains(&b));
    assert!(!b.contains(&a));
    assert!(a.contains(&a));

    let inside = CalendarDate::try_new_with_time(2020, 6, 30, 23, 0, 0, UtcOffset::UTC).unwrap();
    assert!(a.contains_date(&inside));
    assert!(!a.contains_date(&date(2020, 7, 1)));
    assert!(a.contains_date(&date(2020, 6, 1)));
}

#[test]
fn intersection_with_contained_interval() {
    let a = interval((2020, 6, 1), (2020, 6, 30));
    let b = interval((2020, 6, 5), (2020, 6, 20));
    assert_eq!(a.intersection_or_none(&b), Some(b));
    assert_eq!(b.intersection_or_none(&a), Some(b));
}

#[test]
fn intersection_with_partial_overlap() {
    let a = interval((2020, 6, 1), (2020, 6, 30));

    let before = interval((2020, 5, 15), (2020, 6, 10));
    assert_eq!(
        a.intersection_or_none(&before),
        Some(interval((2020, 6, 1), (2020, 6, 10)))
    );

    let after = interval((2020, 6, 20), (2020, 7, 5));
    assert_eq!(
        a.intersection_or_none(&after),
        Some(interval((2020, 6, 20), (2020, 6, 30)))
    );
}

#[test]
fn intersection_of_disjoint_intervals() {
    let a = interval((2020, 6, 1), (2020, 6, 30));
    let b = interval((2020, 4, 15), (2020, 5, 20));
    assert_eq!(a.intersection_or_none(&b), None);
    assert_eq!(b.intersection_or_none(&a), None);
}

#[test]
fn intersection_across_offsets() {
    let june = interval((2020, 6, 1), (2020, 6, 30));
    let plus_three = UtcOffset::from_hours(3).unwrap();
    let other = Interval::try_new(
        CalendarDate::try_new(2020, 5, 20, plus_three).unwrap(),
        CalendarDate::try_new(2020, 6, 5, plus_three).unwrap(),
    )
    .unwrap();

    let overlap = june.intersection_or_none(&other).unwrap();
    assert_eq!(overlap.start().iso_date(), iso(2020, 6, 1));
    assert_eq!(overlap.start().offset(), UtcOffset::UTC);
    assert_eq!(overlap.end().iso_date(), iso(2020, 6, 5));
    assert_eq!(overlap.end().offset(), plus_three);
}

#[test]
fn overlap_in_time_without_a_day_range() {
    let june = interval((2020, 6, 1), (2020, 6, 30));
    let minus_twelve = UtcOffset::from_hours(-12).unwrap();
    // Ends on 2020-06-01T11:59:59Z, after June starts.
    let late_may = Interval::try_new(
        CalendarDate::try_new(2020, 5, 20, minus_twelve).unwrap(),
        CalendarDate::try_new(2020, 5, 31, minus_twelve).unwrap(),
    )
    .unwrap();
    assert!(late_may.to_bound() >= june.from_bound());

    let err = june.try_intersection(&late_may).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInterval);
    assert_eq!(june.intersection_or_none(&late_may), None);
}

// ==== Splitting ====

#[test]
fn split_by_days_partition() {
    let days = interval((2020, 6, 9), (2020, 6, 11)).split_by_days().unwrap();
    let dates: Vec<IsoDate> = days.iter().map(|d| d.as_date().iso_date()).collect();
    assert_eq!(dates, vec![iso(2020, 6, 9), iso(2020, 6, 10), iso(2020, 6, 11)]);
    assert!(days.iter().all(|d| d.days_count() == 1));
}

#[test]
fn split_by_days_single_day() {
    let day = date(2020, 6, 9);
    let days = Interval::try_from_date(day).unwrap().split_by_days().unwrap();
    assert_eq!(days, vec![DayInterval::try_new(day).unwrap()]);
}

#[test]
fn split_by_months_same_month() {
    let months = interval((2020, 5, 1), (2020, 5, 15)).split_by_months().unwrap();
    assert_eq!(
        months,
        vec![MonthInterval::try_new(date(2020, 5, 1), date(2020, 5, 15)).unwrap()]
    );
}

#[test]
fn split_by_months_boundary_crossing() {
    let months = interval((2020, 4, 1), (2020, 5, 31)).split_by_months().unwrap();
    let intervals: Vec<Interval> = months.into_iter().map(Interval::from).collect();
    assert_eq!(
        days_of(&intervals),
        vec![
            (iso(2020, 4, 1), iso(2020, 4, 30)),
            (iso(2020, 5, 1), iso(2020, 5, 31)),
        ]
    );
}

#[test]
fn wrappers_convert_into_intervals() {
    let month = MonthInterval::try_new(date(2020, 6, 1), date(2020, 6, 15)).unwrap();
    assert_eq!(Interval::from(month), interval((2020, 6, 1), (2020, 6, 15)));

    let day = DayInterval::try_new(date(2020, 6, 9)).unwrap();
    assert_eq!(Interval::from(day), interval((2020, 6, 9), (2020, 6, 9)));
}

#[test]
fn split_by_months_three_months() {
    let months = interval((2020, 3, 15), (2020, 5, 15)).split_by_months().unwrap();
    let intervals: Vec<Interval> = months.iter().map(|m| *m.as_interval()).collect();
    assert_eq!(
        days_of(&intervals),
        vec![
            (iso(2020, 3, 15), iso(2020, 3, 31)),
            (iso(2020, 4, 1), iso(2020, 4, 30)),
            (iso(2020, 5, 1), iso(2020, 5, 15)),
        ]
    );
    assert_eq!(
        months.iter().map(|m| m.month()).collect::<Vec<_>>(),
        vec![3, 4, 5]
    );
}

#[test]
fn split_by_months_across_years() {
    let months = interval((2019, 11, 20), (2020, 2, 10)).split_by_months().unwrap();
    let intervals: Vec<Interval> = months.into_iter().map(Interval::from).collect();
    assert_eq!(
        days_of(&intervals),
        vec![
            (iso(2019, 11, 20), iso(2019, 11, 30)),
            (iso(2019, 12, 1), iso(2019, 12, 31)),
            (iso(2020, 1, 1), iso(2020, 1, 31)),
            (iso(2020, 2, 1), iso(2020, 2, 10)),
        ]
    );
}

#[test]
fn split_by_weeks_from_monday() {
    // 2020-06-01 is a Monday.
    let weeks = interval((2020, 6, 1), (2020, 6, 14)).split_by_weeks().unwrap();
    assert_eq!(
        days_of(&weeks),
        vec![
            (iso(2020, 6, 1), iso(2020, 6, 7)),
            (iso(2020, 6, 8), iso(2020, 6, 14)),
        ]
    );
}

#[test]
fn split_by_weeks_from_midweek() {
    // 2020-06-10 is a Wednesday.
    let weeks = interval((2020, 6, 10), (2020, 6, 30)).split_by_weeks().unwrap();
    assert_eq!(
        days_of(&weeks),
        vec![
            (iso(2020, 6, 10), iso(2020, 6, 14)),
            (iso(2020, 6, 15), iso(2020, 6, 21)),
            (iso(2020, 6, 22), iso(2020, 6, 28)),
            (iso(2020, 6, 29), iso(2020, 6, 30)),
        ]
    );
}

#[test]
fn split_by_weeks_from_sunday() {
    // 2020-06-14 is a Sunday.
    let weeks = interval((2020, 6, 14), (2020, 6, 30)).split_by_weeks().unwrap();
    assert_eq!(
        days_of(&weeks),
        vec![
            (iso(2020, 6, 14), iso(2020, 6, 14)),
            (iso(2020, 6, 15), iso(2020, 6, 21)),
            (iso(2020, 6, 22), iso(2020, 6, 28)),
            (iso(2020, 6, 29), iso(2020, 6, 30)),
        ]
    );
}

#[test]
fn split_by_weeks_within_first_week() {
    let weeks = interval((2020, 6, 10), (2020, 6, 12)).split_by_weeks().unwrap();
    assert_eq!(days_of(&weeks), vec![(iso(2020, 6, 10), iso(2020, 6, 12))]);

    let weeks = interval((2020, 6, 10), (2020, 6, 14)).split_by_weeks().unwrap();
    assert_eq!(days_of(&weeks), vec![(iso(2020, 6, 10), iso(2020, 6, 14))]);
}

#[test]
fn split_by_chunks_shares_boundary_days() {
    let chunks = interval((2020, 6, 1), (2020, 6, 10)).split_by_chunks(3).unwrap();
    assert_eq!(
        days_of(&chunks),
        vec![
            (iso(2020, 6, 1), iso(2020, 6, 4)),
            (iso(2020, 6, 4), iso(2020, 6, 7)),
            (iso(2020, 6, 7), iso(2020, 6, 10)),
        ]
    );
}

#[test]
fn split_by_chunks_wider_than_interval() {
    let i = interval((2020, 6, 1), (2020, 6, 10));
    assert_eq!(i.split_by_chunks(30).unwrap(), vec![i]);
    assert_eq!(i.split_by_chunks(u32::MAX).unwrap(), vec![i]);
}

#[test]
fn split_by_chunks_rejects_zero() {
    let err = interval((2020, 6, 1), (2020, 6, 10))
        .split_by_chunks(0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn work_days_skip_weekends() {
    // 2020-06-05 is a Friday.
    let days = interval((2020, 6, 5), (2020, 6, 9)).work_days().unwrap();
    let dates: Vec<IsoDate> = days.iter().map(|d| d.as_date().iso_date()).collect();
    assert_eq!(dates, vec![iso(2020, 6, 5), iso(2020, 6, 8), iso(2020, 6, 9)]);
}

// ==== Gap removal ====

#[test]
fn remove_ranges_single_cut() {
    let month = interval((2020, 6, 1), (2020, 6, 30));
    let result = month
        .remove_ranges(&[interval((2020, 6, 1), (2020, 6, 10))])
        .unwrap();
    assert_eq!(result, vec![interval((2020, 6, 11), (2020, 6, 30))]);
}

#[test]
fn remove_ranges_multiple_cuts() {
    let month = interval((2020, 6, 1), (2020, 6, 30));
    let result = month
        .remove_ranges(&[
            interval((2020, 6, 1), (2020, 6, 1)),
            interval((2020, 6, 10), (2020, 6, 20)),
            interval((2020, 6, 28), (2020, 6, 30)),
        ])
        .unwrap();
    assert_eq!(
        result,
        vec![
            interval((2020, 6, 2), (2020, 6, 9)),
            interval((2020, 6, 21), (2020, 6, 27)),
        ]
    );
}

#[test]
fn remove_ranges_everything() {
    let month = interval((2020, 6, 1), (2020, 6, 30));
    let result = month
        .remove_ranges(&[interval((2020, 5, 1), (2020, 7, 31))])
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn remove_ranges_outside_keeps_interval() {
    let month = interval((2020, 6, 1), (2020, 6, 30));
    let result = month
        .remove_ranges(&[interval((2020, 8, 1), (2020, 8, 5))])
        .unwrap();
    assert_eq!(result, vec![month]);
}

#[test]
fn remove_ranges_overlapping_removals() {
    let month = interval((2020, 6, 1), (2020, 6, 30));
    let result = month
        .remove_ranges(&[
            interval((2020, 6, 5), (2020, 6, 15)),
            interval((2020, 6, 10), (2020, 6, 25)),
        ])
        .unwrap();
    assert_eq!(
        result,
        vec![
            interval((2020, 6, 1), (2020, 6, 4)),
            interval((2020, 6, 26), (2020, 6, 30)),
        ]
    );
}

#[test]
fn remove_ranges_rejects_empty_input() {
    let err = interval((2020, 6, 1), (2020, 6, 30))
        .remove_ranges(&[])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
