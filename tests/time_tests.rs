use chrono::{FixedOffset, TimeZone, Utc};
use transit_lens::{
    hsl::Config,
    shared::{SERVICE_TIME_ZONE, Time, service_day_start},
};

#[test]
fn service_day_start_utc_test() {
    let at = Utc.with_ymd_and_hms(2025, 10, 18, 15, 42, 7).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 10, 18, 0, 0, 0).unwrap();
    assert_eq!(service_day_start(&at), Some(start.timestamp()));
}

#[test]
fn service_day_start_offset_test() {
    let helsinki = FixedOffset::east_opt(3 * 3600).unwrap();
    // 01:30 local is still the previous day in UTC
    let at = helsinki.with_ymd_and_hms(2025, 10, 18, 1, 30, 0).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 10, 17, 21, 0, 0).unwrap();
    assert_eq!(service_day_start(&at), Some(start.timestamp()));
}

#[test]
fn helsinki_service_day_from_utc_test() {
    // 22:30 UTC is already 01:30 the next morning in Helsinki (EEST)
    let at = Utc.with_ymd_and_hms(2025, 10, 18, 22, 30, 0).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 10, 18, 21, 0, 0).unwrap();
    assert_eq!(
        service_day_start(&at.with_timezone(&SERVICE_TIME_ZONE)),
        Some(start.timestamp())
    );
    assert_ne!(service_day_start(&at), Some(start.timestamp()));

    // Afternoon UTC stays on the same Helsinki day
    let at = Utc.with_ymd_and_hms(2025, 10, 18, 15, 0, 0).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 10, 17, 21, 0, 0).unwrap();
    assert_eq!(
        service_day_start(&at.with_timezone(&SERVICE_TIME_ZONE)),
        Some(start.timestamp())
    );
}

#[test]
fn helsinki_service_day_winter_test() {
    // EET is UTC+2 in winter
    let at = Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 11, 30, 22, 0, 0).unwrap();
    let zone = Config::default().time_zone;
    assert_eq!(
        service_day_start(&at.with_timezone(&zone)),
        Some(start.timestamp())
    );
}

#[test]
fn hour_of_day_test() {
    assert_eq!(Time::from_seconds(3599).hour_of_day(), 0);
    assert_eq!(Time::from_seconds(23 * 3600).hour_of_day(), 23);
    assert_eq!(Time::from_seconds(24 * 3600).hour_of_day(), 0);
    assert!(Time::from_seconds(24 * 3600).is_next_day());
    assert!(!Time::from_seconds(24 * 3600 - 1).is_next_day());
}

#[test]
fn out_of_range_time_test() {
    assert!(Time::try_from(-1i64).is_err());
    assert!(Time::try_from(u32::MAX as i64 + 1).is_err());
    assert_eq!(Time::try_from(90_000i64).unwrap().as_seconds(), 90_000);
}
