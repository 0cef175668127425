//! Date window arithmetic for upcoming birthdays.

use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate};

/// The next anniversary of `birthday` on or after `today`.
///
/// The anniversary in `today`'s year is used unless it has already passed,
/// in which case the following year's anniversary is returned. This lets a
/// window that starts in late December see birthdays in early January.
pub fn next_anniversary(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    birthday.anniversary_in(today.year() + 1)
}

/// Whether `date` lies in the half-open window `[today, today + days)`.
pub fn in_window(date: NaiveDate, today: NaiveDate, days: u64) -> bool {
    if date < today {
        return false;
    }
    match today.checked_add_days(Days::new(days)) {
        Some(end) => date < end,
        // Window runs past the last representable date.
        None => true,
    }
}

/// Whether `birthday` has an anniversary in `[today, today + days)`.
pub fn is_upcoming(birthday: &Birthday, today: NaiveDate, days: u64) -> bool {
    next_anniversary(birthday, today)
        .map(|date| in_window(date, today, days))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthday(text: &str) -> Birthday {
        Birthday::new(text).unwrap()
    }

    #[test]
    fn test_in_window_is_half_open() {
        let today = date(2026, 8, 1);
        assert!(in_window(today, today, 7));
        assert!(in_window(date(2026, 8, 7), today, 7));
        assert!(!in_window(date(2026, 8, 8), today, 7));
        assert!(!in_window(date(2026, 7, 31), today, 7));
    }

    #[test]
    fn test_zero_day_window_is_empty() {
        let today = date(2026, 8, 1);
        assert!(!in_window(today, today, 0));
    }

    #[test]
    fn test_next_anniversary_this_year() {
        let today = date(2026, 8, 1);
        assert_eq!(
            next_anniversary(&birthday("05.08.1990"), today),
            Some(date(2026, 8, 5))
        );
        assert_eq!(
            next_anniversary(&birthday("01.08.1990"), today),
            Some(today)
        );
    }

    #[test]
    fn test_next_anniversary_rolls_into_next_year() {
        let today = date(2026, 12, 30);
        assert_eq!(
            next_anniversary(&birthday("02.01.1985"), today),
            Some(date(2027, 1, 2))
        );
    }

    #[test]
    fn test_is_upcoming_across_new_year() {
        let today = date(2026, 12, 30);
        assert!(is_upcoming(&birthday("02.01.1985"), today, 7));
        assert!(is_upcoming(&birthday("31.12.1985"), today, 7));
        assert!(!is_upcoming(&birthday("06.01.1985"), today, 7));
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let leap = birthday("29.02.2000");
        assert!(is_upcoming(&leap, date(2027, 2, 28), 1));
        assert!(is_upcoming(&leap, date(2027, 2, 22), 7));
        assert!(!is_upcoming(&leap, date(2027, 3, 1), 7));
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        let leap = birthday("29.02.2000");
        assert!(!is_upcoming(&leap, date(2028, 2, 28), 1));
        assert!(is_upcoming(&leap, date(2028, 2, 28), 2));
    }

    #[test]
    fn test_passed_birthday_not_upcoming() {
        assert!(!is_upcoming(&birthday("01.08.1990"), date(2026, 8, 10), 7));
    }
}
