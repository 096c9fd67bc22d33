use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::domain::model::CalendarDiff;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Computes the field-wise calendar difference of `to` minus `from`.
///
/// Whole calendar months are counted first, clamping the day-of-month to
/// the target month's length (Jan 31 plus one month lands on the last day
/// of February); the remainder is split into days, hours, minutes and
/// seconds. Sub-second remainders are truncated, so instants less than a
/// second apart produce an all-zero diff.
pub fn calendar_diff(from: NaiveDateTime, to: NaiveDateTime) -> CalendarDiff {
    let invert = from > to;
    let (earlier, later) = if invert { (to, from) } else { (from, to) };

    let months = whole_months(earlier, later);
    let anchor = shift_months(earlier, months);
    let remainder = (later - anchor).num_seconds();

    CalendarDiff {
        years: months / 12,
        months: months % 12,
        days: (remainder / SECS_PER_DAY) as u32,
        hours: (remainder % SECS_PER_DAY / SECS_PER_HOUR) as u32,
        minutes: (remainder % SECS_PER_HOUR / SECS_PER_MINUTE) as u32,
        seconds: (remainder % SECS_PER_MINUTE) as u32,
        invert,
    }
}

/// Largest count of whole calendar months that fits between `earlier` and
/// `later`. Requires `earlier <= later`.
fn whole_months(earlier: NaiveDateTime, later: NaiveDateTime) -> u32 {
    let spanned =
        (later.year() - earlier.year()) * 12 + later.month() as i32 - earlier.month() as i32;
    // spanned >= 0 because earlier <= later, and overshoots by at most one
    // month when later's day/time has not yet caught up.
    let mut months = spanned as u32;
    if months > 0 && shift_months(earlier, months) > later {
        months -= 1;
    }
    months
}

/// Advances an instant by whole months, clamping the day-of-month the way
/// calendar month addition does.
fn shift_months(value: NaiveDateTime, months: u32) -> NaiveDateTime {
    let total = value.month0() + months;
    let year = value.year() + (total / 12) as i32;
    let month = total % 12 + 1;
    let day = value.day().min(days_in_month(year, month));
    // The clamped day always exists, so the fallback is never taken.
    NaiveDate::from_ymd_opt(year, month, day).map_or(value, |date| date.and_time(value.time()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
