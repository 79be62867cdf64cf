use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::table::FareType;

/// Decides which ride-time category applies at a given moment.
///
/// Saturdays and Sundays are evening/weekend all day. On weekdays the
/// evening/weekend fare applies from `evening_start` until `evening_end` the
/// next morning, both given as hours of the day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCalendar {
    pub evening_start: u32,
    pub evening_end: u32,
}

impl Default for ServiceCalendar {
    fn default() -> Self {
        Self {
            evening_start: 18,
            evening_end: 6,
        }
    }
}

impl ServiceCalendar {
    pub fn new(evening_start: u32, evening_end: u32) -> Self {
        Self {
            evening_start,
            evening_end,
        }
    }

    pub fn fare_type_at(&self, at: NaiveDateTime) -> FareType {
        if matches!(at.weekday(), Weekday::Sat | Weekday::Sun) || self.is_evening(at.hour()) {
            FareType::EveningWeekend
        } else {
            FareType::Weekday
        }
    }

    pub fn current_fare_type(&self) -> FareType {
        self.fare_type_at(Local::now().naive_local())
    }

    fn is_evening(&self, hour: u32) -> bool {
        if self.evening_start <= self.evening_end {
            (self.evening_start..self.evening_end).contains(&hour)
        } else {
            hour >= self.evening_start || hour < self.evening_end
        }
    }
}

#[test]
fn evening_wraps_midnight() {
    let calendar = ServiceCalendar::default();
    assert!(calendar.is_evening(18));
    assert!(calendar.is_evening(23));
    assert!(calendar.is_evening(0));
    assert!(calendar.is_evening(5));
    assert!(!calendar.is_evening(6));
    assert!(!calendar.is_evening(17));
}

#[test]
fn evening_within_day() {
    let calendar = ServiceCalendar::new(1, 4);
    assert!(calendar.is_evening(1));
    assert!(calendar.is_evening(3));
    assert!(!calendar.is_evening(4));
    assert!(!calendar.is_evening(0));
}
