use chrono::NaiveDate;
use farebox::prelude::*;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn weekday_daytime_test() {
    let calendar = ServiceCalendar::default();
    // 2026-10-19 is a Monday.
    assert_eq!(calendar.fare_type_at(at(2026, 10, 19, 6, 0)), FareType::Weekday);
    assert_eq!(calendar.fare_type_at(at(2026, 10, 19, 12, 30)), FareType::Weekday);
    assert_eq!(calendar.fare_type_at(at(2026, 10, 23, 17, 59)), FareType::Weekday);
}

#[test]
fn weekday_evening_test() {
    let calendar = ServiceCalendar::default();
    assert_eq!(
        calendar.fare_type_at(at(2026, 10, 19, 18, 0)),
        FareType::EveningWeekend
    );
    assert_eq!(
        calendar.fare_type_at(at(2026, 10, 20, 5, 59)),
        FareType::EveningWeekend
    );
}

#[test]
fn weekend_test() {
    let calendar = ServiceCalendar::default();
    assert_eq!(
        calendar.fare_type_at(at(2026, 10, 24, 12, 0)),
        FareType::EveningWeekend
    );
    assert_eq!(
        calendar.fare_type_at(at(2026, 10, 25, 9, 0)),
        FareType::EveningWeekend
    );
}

#[test]
fn custom_window_test() {
    let calendar = ServiceCalendar::new(20, 5);
    assert_eq!(calendar.fare_type_at(at(2026, 10, 19, 19, 0)), FareType::Weekday);
    assert_eq!(
        calendar.fare_type_at(at(2026, 10, 19, 20, 0)),
        FareType::EveningWeekend
    );
}

#[test]
fn current_fare_type_is_never_anytime_test() {
    assert_ne!(
        ServiceCalendar::default().current_fare_type(),
        FareType::Anytime
    );
}

#[test]
fn fare_type_keys_test() {
    for fare_type in FareType::ALL {
        assert_eq!(fare_type.key().parse::<FareType>().unwrap(), fare_type);
    }
    for purchase in PurchaseChannel::ALL {
        assert_eq!(purchase.to_string().parse::<PurchaseChannel>().unwrap(), purchase);
    }
    let err = "peak".parse::<FareType>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown fare type: peak");
}
