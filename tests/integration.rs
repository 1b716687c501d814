use chrono::{DateTime, FixedOffset, Month, NaiveDate, TimeDelta, Utc, Weekday};
use chronext::{
    max_of, min_of, Error, FromEpochSecond, MonthDay, OffsetTime, TemporalEq, TemporalOrder,
    TemporalOrderExt, Year, YearMonth,
};
use std::cmp::Ordering;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn extrema_over_six_dates_both_call_forms() {
    let dates = [
        date(2021, 10, 5),
        date(2020, 1, 10),
        date(2020, 9, 30),
        date(2021, 3, 2),
        date(2022, 1, 1),
        date(2017, 11, 17),
    ];

    assert_eq!(max_of(dates).unwrap(), date(2022, 1, 1));
    assert_eq!(min_of(dates).unwrap(), date(2017, 11, 17));

    let as_vec: Vec<NaiveDate> = dates.to_vec();
    assert_eq!(max_of(as_vec.clone()).unwrap(), date(2022, 1, 1));
    assert_eq!(min_of(as_vec).unwrap(), date(2017, 11, 17));
}

#[test]
fn extrema_reject_empty_input() {
    assert_eq!(min_of(Vec::<NaiveDate>::new()), Err(Error::EmptySelection));
    assert_eq!(max_of(Vec::<NaiveDate>::new()), Err(Error::EmptySelection));
}

#[test]
fn tied_offset_datetimes_resolve_to_the_first() {
    // One instant rendered in three offsets: equal rank, distinguishable
    // representation.  The scan must hand back the first rendering.
    let instant = DateTime::from_timestamp(1_633_424_400, 0).unwrap();
    let utc = instant.with_timezone(&FixedOffset::east_opt(0).unwrap());
    let berlin = instant.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
    let tokyo = instant.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());

    let max = max_of([berlin, utc, tokyo]).unwrap();
    assert_eq!(max.offset(), berlin.offset());

    let min = min_of([tokyo, utc, berlin]).unwrap();
    assert_eq!(min.offset(), tokyo.offset());
}

#[test]
fn derived_predicates_follow_compare_to_across_covered_types() {
    let d1 = date(2020, 1, 10);
    let d2 = date(2021, 10, 5);
    for (a, b) in [(d1, d2), (d2, d1), (d1, d1)] {
        assert_eq!(a.is_equal(&b), a.compare_to(&b) == Ordering::Equal);
        assert_eq!(a.is_equal_or_after(&b), a.compare_to(&b) != Ordering::Less);
        assert_eq!(
            a.is_equal_or_before(&b),
            a.compare_to(&b) != Ordering::Greater
        );
    }

    let y1 = Year::new(2017);
    let y2 = Year::new(2022);
    assert_eq!(y1.is_equal(&y2), y1.compare_to(&y2) == Ordering::Equal);
    assert!(y2.is_equal_or_after(&y1));

    let ym1 = YearMonth::new(2021, Month::March);
    let ym2 = YearMonth::new(2021, Month::October);
    assert!(ym1.is_equal_or_before(&ym2));
    assert!(!ym1.is_equal(&ym2));

    let md1 = MonthDay::new(Month::November, 17).unwrap();
    let md2 = MonthDay::new(Month::December, 25).unwrap();
    assert!(md2.is_equal_or_after(&md1));

    assert!(TimeDelta::seconds(60).is_equal(&TimeDelta::minutes(1)));
    assert!(Weekday::Mon.is_equal(&Weekday::Mon));
    assert!(Month::June.is_equal(&Month::June));
}

#[test]
fn offset_time_keeps_richer_equality() {
    let ten_berlin = OffsetTime::new(
        chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        FixedOffset::east_opt(2 * 3600).unwrap(),
    );
    let nine_london = ten_berlin.with_offset_same_instant(FixedOffset::east_opt(3600).unwrap());

    // Same instant, different representation: bounds agree both ways,
    // value equality does not.
    assert_ne!(ten_berlin, nine_london);
    assert!(ten_berlin.is_equal_or_after(&nine_london));
    assert!(nine_london.is_equal_or_before(&ten_berlin));
}

#[test]
fn epoch_second_matches_instant_construction() {
    // 2021-10-05T23:30:00Z
    let epoch = 1_633_476_600;
    let instant = DateTime::from_timestamp(epoch, 0).unwrap();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

    assert_eq!(
        NaiveDate::from_epoch_second(epoch, &tokyo).unwrap(),
        NaiveDate::from_instant(instant, &tokyo)
    );
    assert_eq!(
        NaiveDate::from_epoch_second(epoch, &tokyo).unwrap(),
        date(2021, 10, 6)
    );

    let zoned = DateTime::from_epoch_second(epoch, &tokyo).unwrap();
    assert_eq!(zoned, instant.with_timezone(&tokyo));
    assert_eq!(zoned.timestamp(), epoch);
}

#[test]
fn naive_datetime_epoch_path_is_untouched() {
    // The date-with-time type keeps chrono's own epoch relationship; this
    // crate adds nothing on top of it.
    let epoch = 1_633_476_600;
    let naive = DateTime::from_timestamp(epoch, 0).unwrap().naive_utc();
    assert_eq!(naive.and_utc().timestamp(), epoch);
    assert_eq!(naive.date(), date(2021, 10, 5));
}

#[test]
fn partials_round_trip_through_dates() {
    let d = date(2021, 10, 5);

    let ym = YearMonth::from(d);
    assert_eq!(ym.at_day(5), Some(d));

    let md = MonthDay::from(d);
    assert_eq!(md.at_year(2021), Some(d));

    assert_eq!(Year::from(d).at_month(Month::October), ym);
}

#[test]
fn extrema_work_on_every_covered_type() {
    let years = [Year::new(2020), Year::new(2017), Year::new(2022)];
    assert_eq!(max_of(years).unwrap(), Year::new(2022));
    assert_eq!(min_of(years).unwrap(), Year::new(2017));

    let offsets = [
        FixedOffset::east_opt(3600).unwrap(),
        FixedOffset::west_opt(5 * 3600).unwrap(),
    ];
    assert_eq!(min_of(offsets).unwrap(), offsets[1]);
    assert_eq!(max_of(offsets).unwrap(), offsets[0]);

    let weekdays = [Weekday::Fri, Weekday::Mon, Weekday::Sun];
    assert_eq!(min_of(weekdays).unwrap(), Weekday::Mon);
    assert_eq!(max_of(weekdays).unwrap(), Weekday::Sun);

    let instants: Vec<DateTime<Utc>> = vec![
        DateTime::from_timestamp(2_000_000, 0).unwrap(),
        DateTime::from_timestamp(1_000_000, 0).unwrap(),
    ];
    assert_eq!(
        min_of(instants).unwrap(),
        DateTime::from_timestamp(1_000_000, 0).unwrap()
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_preserve_values() {
    let year = Year::new(2021);
    let json = serde_json::to_string(&year).unwrap();
    assert_eq!(json, "2021");
    assert_eq!(serde_json::from_str::<Year>(&json).unwrap(), year);

    let ym = YearMonth::new(2021, Month::October);
    let json = serde_json::to_string(&ym).unwrap();
    assert!(json.contains("\"year\":2021"));
    assert!(json.contains("\"month\":10"));
    assert_eq!(serde_json::from_str::<YearMonth>(&json).unwrap(), ym);

    let md = MonthDay::new(Month::February, 29).unwrap();
    let json = serde_json::to_string(&md).unwrap();
    assert_eq!(serde_json::from_str::<MonthDay>(&json).unwrap(), md);
    assert!(serde_json::from_str::<MonthDay>("{\"month\":4,\"day\":31}").is_err());

    let ot = OffsetTime::new(
        chrono::NaiveTime::from_hms_opt(10, 15, 30).unwrap(),
        FixedOffset::east_opt(3600).unwrap(),
    );
    let json = serde_json::to_string(&ot).unwrap();
    assert!(json.contains("\"offset_seconds\":3600"));
    assert_eq!(serde_json::from_str::<OffsetTime>(&json).unwrap(), ot);
}
