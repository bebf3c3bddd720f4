//! Calendar arithmetic over integer day counts
//!
//! All dates in this crate are integer day counts (days since 1970-01-01).
//! Conversions here are pure integer arithmetic with no timezone, locale, or
//! wall-clock state, so month classification is deterministic and testable.

/// Number of days in a Gregorian calendar month.
///
/// February is 29 in leap years (divisible by 400, or by 4 and not by 100).
///
/// # Example
/// ```
/// use roll_stats::calendar::days_in_month;
/// assert_eq!(days_in_month(2, 2000), 29);
/// assert_eq!(days_in_month(2, 1900), 28);
/// assert_eq!(days_in_month(9, 2024), 30);
/// ```
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if year % 400 == 0 || (year % 4 == 0 && year % 100 != 0) {
                29
            } else {
                28
            }
        }
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 30,
    }
}

/// Decompose a day count into a civil (year, month, day) triple.
///
/// Month is 1-12, day is 1-31. Valid over the full i32 day range.
pub fn civil_from_days(days: i32) -> (i32, u32, u32) {
    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + (month <= 2) as i64;
    (year as i32, month, day)
}

/// Compose a civil (year, month, day) triple back into a day count.
///
/// Inverse of [`civil_from_days`] for valid civil dates.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
    let y = year as i64 - (month <= 2) as i64;
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (if month > 2 { month - 3 } else { month + 9 }) as i64;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as i32
}

/// Monotonic month index of a day count: `year * 12 + month0`.
///
/// Month distance between two dates is a plain integer subtraction of their
/// indices.
pub fn month_index(date: i32) -> i32 {
    let (year, month, _) = civil_from_days(date);
    year * 12 + (month as i32 - 1)
}

/// Month index of the calendar month after `date`'s month.
pub fn next_month_index(date: i32) -> i32 {
    month_index(date) + 1
}

/// Day count of the 1st of the month following `date`'s month.
///
/// This is the interval date stamped on a monthly snapshot.
pub fn first_day_of_month_following(date: i32) -> i32 {
    let (year, month, _) = civil_from_days(date);
    if month == 12 {
        days_from_civil(year + 1, 1, 1)
    } else {
        days_from_civil(year, month + 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_leap_rules() {
        assert_eq!(days_in_month(2, 2024), 29); // divisible by 4
        assert_eq!(days_in_month(2, 2100), 28); // divisible by 100, not 400
        assert_eq!(days_in_month(2, 2400), 29); // divisible by 400
        assert_eq!(days_in_month(2, 2023), 28);
    }

    #[test]
    fn test_days_in_month_lengths() {
        let lengths: Vec<u32> = (1..=12).map(|m| days_in_month(m, 2023)).collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn test_epoch_decomposition() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(31), (1970, 2, 1));
        // 2000-02-29 is day 11016
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
    }

    #[test]
    fn test_civil_round_trip() {
        // every day across several leap/non-leap years
        for days in days_from_civil(1999, 1, 1)..=days_from_civil(2005, 12, 31) {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days);
            assert!(d >= 1 && d <= days_in_month(m, y));
        }
    }

    #[test]
    fn test_month_index_distance() {
        let jan_15_1990 = days_from_civil(1990, 1, 15);
        let mar_1_1990 = days_from_civil(1990, 3, 1);
        let jan_2_1991 = days_from_civil(1991, 1, 2);
        assert_eq!(month_index(mar_1_1990) - month_index(jan_15_1990), 2);
        assert_eq!(month_index(jan_2_1991) - month_index(jan_15_1990), 12);
        assert_eq!(next_month_index(jan_15_1990), month_index(jan_15_1990) + 1);
    }

    #[test]
    fn test_month_index_constant_within_month() {
        let first = days_from_civil(2016, 2, 1);
        let idx = month_index(first);
        for offset in 0..29 {
            assert_eq!(month_index(first + offset), idx);
        }
        assert_eq!(month_index(first + 29), idx + 1);
    }

    #[test]
    fn test_first_day_of_month_following() {
        assert_eq!(
            first_day_of_month_following(days_from_civil(1990, 1, 15)),
            days_from_civil(1990, 2, 1)
        );
        assert_eq!(
            first_day_of_month_following(days_from_civil(1990, 12, 31)),
            days_from_civil(1991, 1, 1)
        );
        // the 1st of a month still maps to the *following* month's 1st
        assert_eq!(
            first_day_of_month_following(days_from_civil(1990, 1, 1)),
            days_from_civil(1990, 2, 1)
        );
    }
}
