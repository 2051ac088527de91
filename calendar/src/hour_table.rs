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

use crate::{Date, Float, N_DAYS_PER_MONTH, N_HOURS_PER_YEAR};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The calendar position of one hour of the year.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HourStamp {
    /// Month of the year, from 1 to 12
    pub month: u8,

    /// Day of the month, from 1 to 31
    pub day: u8,

    /// Hour of the day, from 1 to 24. Hour `h` covers the
    /// interval between `h-1` and `h` o'clock, as in EPW files.
    pub hour: u8,

    /// Day of the year, from 1 to 365
    pub day_of_year: u16,
}

impl HourStamp {
    /// The [`Date`] in the middle of the hour this stamp covers
    pub fn midpoint(&self) -> Date {
        Date {
            month: self.month,
            day: self.day,
            hour: self.hour as Float - 0.5,
        }
    }

    /// Zero-based month index, handy for indexing monthly arrays
    pub fn month_index(&self) -> usize {
        self.month as usize - 1
    }

    /// Zero-based hour-of-day index, handy for indexing diurnal profiles
    pub fn hour_index(&self) -> usize {
        self.hour as usize - 1
    }
}

/// A lookup table from a linear hour index (`0..8760`) into
/// its [`HourStamp`].
///
/// The table is built once and then only read.
#[derive(Clone, Debug)]
pub struct Calendar {
    stamps: Vec<HourStamp>,
}

impl std::default::Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Builds the table for a 365-day year
    pub fn new() -> Self {
        let mut stamps = Vec::with_capacity(N_HOURS_PER_YEAR);
        let mut day_of_year: u16 = 0;
        for (month_index, n_days) in N_DAYS_PER_MONTH.iter().enumerate() {
            for day in 1..=*n_days {
                day_of_year += 1;
                for hour in 1..=24 {
                    stamps.push(HourStamp {
                        month: month_index as u8 + 1,
                        day: day as u8,
                        hour,
                        day_of_year,
                    })
                }
            }
        }
        debug_assert_eq!(stamps.len(), N_HOURS_PER_YEAR);
        Self { stamps }
    }

    /// Gets the stamp of hour `index`, if it is within the year
    pub fn get(&self, index: usize) -> Option<&HourStamp> {
        self.stamps.get(index)
    }

    /// Number of hours in the table (always 8760)
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Is the table empty? (it never is)
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Iterates over the stamps of the year, in order
    pub fn iter(&self) -> std::slice::Iter<'_, HourStamp> {
        self.stamps.iter()
    }
}

impl Index<usize> for Calendar {
    type Output = HourStamp;

    fn index(&self, index: usize) -> &Self::Output {
        &self.stamps[index]
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a HourStamp;
    type IntoIter = std::slice::Iter<'a, HourStamp>;

    fn into_iter(self) -> Self::IntoIter {
        self.stamps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_year() {
        let calendar = Calendar::new();
        assert_eq!(calendar.len(), N_HOURS_PER_YEAR);
        assert!(!calendar.is_empty());

        let first = calendar[0];
        assert_eq!(
            first,
            HourStamp {
                month: 1,
                day: 1,
                hour: 1,
                day_of_year: 1
            }
        );

        let last = calendar[N_HOURS_PER_YEAR - 1];
        assert_eq!(
            last,
            HourStamp {
                month: 12,
                day: 31,
                hour: 24,
                day_of_year: 365
            }
        );
        assert!(calendar.get(N_HOURS_PER_YEAR).is_none());
    }

    #[test]
    fn test_day_of_year_is_monotonic() {
        let calendar = Calendar::new();
        let mut last = 0;
        for stamp in &calendar {
            assert!(stamp.day_of_year >= last);
            assert!(stamp.day_of_year - last <= 1);
            last = stamp.day_of_year;
        }
        assert_eq!(last, 365);
    }

    #[test]
    fn test_month_boundaries() {
        let calendar = Calendar::new();

        // 31 days of January
        let feb = calendar[31 * 24];
        assert_eq!(feb.month, 2);
        assert_eq!(feb.day, 1);
        assert_eq!(feb.hour, 1);
        assert_eq!(feb.day_of_year, 32);
        assert_eq!(feb.month_index(), 1);

        let end_of_feb = calendar[59 * 24 - 1];
        assert_eq!(end_of_feb.month, 2);
        assert_eq!(end_of_feb.day, 28);
        assert_eq!(end_of_feb.hour, 24);
        assert_eq!(end_of_feb.hour_index(), 23);

        // Hours per month match the month lengths
        let mut hours = [0; 12];
        for stamp in calendar.iter() {
            hours[stamp.month_index()] += 1;
        }
        for (i, h) in hours.iter().enumerate() {
            assert_eq!(*h, N_DAYS_PER_MONTH[i] * 24);
        }
    }

    #[test]
    fn test_midpoint() {
        let calendar = Calendar::new();
        let date = calendar[13].midpoint();
        assert_eq!(date.month, 1);
        assert_eq!(date.day, 1);
        assert!((date.hour - 13.5).abs() < 1e-9);
        assert!((date.day_of_year() - 13.5 / 24.).abs() < 1e-9);
    }
}
