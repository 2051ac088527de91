/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! An extremely simple calendar for annual, hourly building-performance data.
//!
//! **It does not consider years at all** (and hence no leap days): every year
//! has 365 days and 8760 hours. Days and months are counted from 1
//! (e.g. January is 1, not 0).
//!
//! The main structure is the [`Calendar`], which maps a linear hour index
//! (`0..8760`) into the month, day-of-month, hour-of-day and day-of-year
//! it belongs to.
//!
//! ```
//! use calendar::Calendar;
//!
//! let calendar = Calendar::new();
//! let stamp = calendar[744]; // first hour of February
//! assert_eq!(stamp.month, 2);
//! assert_eq!(stamp.day, 1);
//! assert_eq!(stamp.hour, 1);
//! assert_eq!(stamp.day_of_year, 32);
//! ```
//!
//! # Interaction with Serde
//!
//! You can enable the `serde` feature and do stuff like this:
//!
//! ```ignore
//! use calendar::Date;
//! use serde_json; // import "serde_json" and enable feature "serde"
//!
//! let v = r#"{"month": 9,"day": 4, "hour": 21}"#;
//! let d : Date = serde_json::from_str(&v).unwrap();
//! assert_eq!(d.month, 9);
//! assert_eq!(d.day, 4);
//! assert!((d.hour - 21.).abs() < 1e-5);
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
type Float = f64;

mod date;
pub use crate::date::Date;

mod hour_table;
pub use crate::hour_table::{Calendar, HourStamp};

/// Number of months in a year
pub const N_MONTHS: usize = 12;

/// Number of hours in a (non-leap) year
pub const N_HOURS_PER_YEAR: usize = 8760;

/// Number of days in a (non-leap) year
pub const N_DAYS_PER_YEAR: usize = 365;

/// Days in each month, January first.
pub const N_DAYS_PER_MONTH: [usize; N_MONTHS] = [
    31, // Jan
    28, // Feb
    31, // March
    30, // Apr
    31, // May
    30, // Jun
    31, // Jul
    31, // Aug
    30, // Sept
    31, // Oct
    30, // Nov
    31, // Dec
];

/// Days of the year elapsed before the first day of each month
pub(crate) const CUMULATED_DAYS_BEFORE_MONTH: [usize; N_MONTHS] = [
    0,   // Jan
    31,  // Feb
    59,  // Mar
    90,  // Apr
    120, // May
    151, // Jun
    181, // Jul
    212, // Aug
    243, // Sept
    273, // Oct
    304, // Nov
    334, // Dec
];

/// Returns the number of days in `month` (counted from 1).
///
/// # Panics
///
/// Panics if `month` is not within `1..=12`.
pub fn month_length(month: usize) -> usize {
    assert!(
        (1..=N_MONTHS).contains(&month),
        "Impossible month '{}'",
        month
    );
    N_DAYS_PER_MONTH[month - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths_sum_to_a_year() {
        let total: usize = (1..=12).map(month_length).sum();
        assert_eq!(total, N_DAYS_PER_YEAR);
        assert_eq!(total * 24, N_HOURS_PER_YEAR);
    }

    #[test]
    fn test_month_length() {
        assert_eq!(month_length(1), 31);
        assert_eq!(month_length(2), 28);
        assert_eq!(month_length(4), 30);
        assert_eq!(month_length(12), 31);
    }

    #[test]
    fn test_cumulated_days() {
        let mut acc = 0;
        for (i, n) in N_DAYS_PER_MONTH.iter().enumerate() {
            assert_eq!(CUMULATED_DAYS_BEFORE_MONTH[i], acc);
            acc += n;
        }
    }

    #[test]
    #[should_panic]
    fn test_month_zero() {
        month_length(0);
    }
}
