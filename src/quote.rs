//! Rental price estimates shown before a reservation is created.
//!
//! The server computes the final amount; these figures only drive the
//! summary boxes of the booking and new-reservation forms.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How a partial day is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRounding {
    /// Whole days elapsed (public booking site)
    Floor,
    /// Any started day counts (panel reservation form)
    Ceil,
}

/// Number of rental days, never below one
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>, rounding: DayRounding) -> i64 {
    let seconds = (end - start).num_seconds();
    let days = match rounding {
        DayRounding::Floor => seconds.div_euclid(86_400),
        DayRounding::Ceil => {
            let whole = seconds.div_euclid(86_400);
            if seconds.rem_euclid(86_400) > 0 {
                whole + 1
            } else {
                whole
            }
        }
    };
    days.max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub days: i64,
    pub daily_rate: f64,
    pub total: f64,
}

impl Quote {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        daily_rate: f64,
        rounding: DayRounding,
    ) -> Self {
        let days = rental_days(start, end, rounding);
        Self {
            days,
            daily_rate,
            total: days as f64 * daily_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_floor_counts_whole_days() {
        assert_eq!(rental_days(at(1, 10), at(4, 10), DayRounding::Floor), 3);
        assert_eq!(rental_days(at(1, 10), at(4, 9), DayRounding::Floor), 2);
    }

    #[test]
    fn test_minimum_one_day() {
        assert_eq!(rental_days(at(1, 10), at(1, 12), DayRounding::Floor), 1);
        assert_eq!(rental_days(at(3, 10), at(1, 10), DayRounding::Floor), 1);
        assert_eq!(rental_days(at(1, 10), at(1, 10), DayRounding::Ceil), 1);
    }

    #[test]
    fn test_ceil_bills_started_days() {
        let start = at(1, 10);
        assert_eq!(rental_days(start, start + Duration::hours(25), DayRounding::Ceil), 2);
        assert_eq!(rental_days(start, start + Duration::hours(48), DayRounding::Ceil), 2);
    }

    #[test]
    fn test_quote_total() {
        let quote = Quote::new(at(1, 10), at(4, 10), 950.0, DayRounding::Floor);
        assert_eq!(quote.days, 3);
        assert_eq!(quote.total, 2850.0);
    }
}
