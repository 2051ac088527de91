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

//! Month tables and the small vector helpers shared by every stage.

use crate::Float;
use calendar::{N_DAYS_PER_MONTH, N_DAYS_PER_YEAR, N_HOURS_PER_YEAR, N_MONTHS};

/// One value per month, January first
pub(crate) type Monthly = [Float; N_MONTHS];

/// Megaseconds in each month
pub(crate) const MEGASECONDS: Monthly = [
    2.6784, // Jan
    2.4192, // Feb
    2.6784, // March
    2.592,  // Apr
    2.6784, // May
    2.592,  // Jun
    2.6784, // Jul
    2.6784, // Aug
    2.592,  // Sept
    2.6784, // Oct
    2.592,  // Nov
    2.6784, // Dec
];

/// Hours in a week
pub(crate) const HOURS_IN_WEEK: Float = 168.;

/// Hours in a year
pub(crate) const HOURS_IN_YEAR: Float = N_HOURS_PER_YEAR as Float;

/// Clock hour at which the occupied period of the day begins
pub(crate) const OCCUPIED_DAY_START: usize = 7;

/// kWh to MJ. Kept at single precision so results match the
/// reference tables.
pub(crate) const KWH_TO_MJ: Float = 3.6f32 as Float;

/// Added to denominators that may be exactly zero
pub(crate) const EPS: Float = Float::MIN_POSITIVE;

/// Hours in each month
pub(crate) fn hours_in_month() -> Monthly {
    std::array::from_fn(|m| 24. * N_DAYS_PER_MONTH[m] as Float)
}

/// Fraction of the year covered by each month
pub(crate) fn month_fraction() -> Monthly {
    std::array::from_fn(|m| N_DAYS_PER_MONTH[m] as Float / N_DAYS_PER_YEAR as Float)
}

/// Divides, saturating at `Float::MAX` when `b` is exactly zero
pub(crate) fn div(a: Float, b: Float) -> Float {
    if b == 0.0 {
        Float::MAX
    } else {
        a / b
    }
}

/// Divides, returning zero when `b` is exactly zero
pub(crate) fn share(a: Float, b: Float) -> Float {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Builds a [`Monthly`] by evaluating `f` for each month index
pub(crate) fn monthly<F: FnMut(usize) -> Float>(f: F) -> Monthly {
    std::array::from_fn(f)
}

/// Adds all the values of a [`Monthly`]
pub(crate) fn sum(v: &Monthly) -> Float {
    v.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validate::assert_close;

    #[test]
    fn test_megaseconds_match_month_lengths() {
        for (m, days) in N_DAYS_PER_MONTH.iter().enumerate() {
            assert_close!(MEGASECONDS[m], 0.0864 * *days as Float, 1e-9);
        }
        assert_close!(sum(&MEGASECONDS), 31.536, 1e-9);
    }

    #[test]
    fn test_tables() {
        let hours = hours_in_month();
        assert_close!(hours[1], 672., 1e-9);
        assert_close!(sum(&hours), HOURS_IN_YEAR, 1e-9);
        assert_close!(sum(&month_fraction()), 1., 1e-9);
    }

    #[test]
    fn test_div() {
        assert_eq!(div(1., 0.), Float::MAX);
        assert_eq!(div(0., 0.), Float::MAX);
        assert_close!(div(1., 4.), 0.25, 1e-12);
        assert_eq!(share(1., 0.), 0.0);
        assert_close!(share(3., 4.), 0.75, 1e-12);
    }
}
