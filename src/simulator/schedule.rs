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

use crate::simulator::monthly::{monthly, Monthly, HOURS_IN_WEEK, MEGASECONDS, OCCUPIED_DAY_START};
use crate::Float;
use model::Population;

/// How a typical week splits into occupied and unoccupied periods.
///
/// The week is made of weekdays (occupied during the day, unoccupied
/// at night) and a weekend that is never occupied. The weekend "day"
/// covers the same clock hours as an occupied weekday.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Schedule {
    /// Occupied hours in an occupied day
    pub hours_occupied: Float,

    /// Unoccupied hours in an occupied day
    pub hours_unoccupied: Float,

    /// Occupied days per week
    pub days_occupied: Float,

    /// Fraction of the week spent in weekday occupied hours
    pub frac_wk_day: Float,

    /// Fraction of the week spent in weekday nights
    pub frac_wk_nt: Float,

    /// Fraction of the week spent in the weekend
    pub frac_wke_tot: Float,

    /// Fraction of the week spent in weekend daytime
    pub frac_wke_day: Float,

    /// Fraction of the week spent in weekend nights
    pub frac_wke_nt: Float,

    /// Megaseconds of weekday occupied hours in each month
    pub msec_wk_day: Monthly,

    /// Megaseconds of weekday nights in each month
    pub msec_wk_nt: Monthly,

    /// Megaseconds of weekend daytime in each month
    pub msec_wke_day: Monthly,

    /// Megaseconds of weekend nights in each month
    pub msec_wke_nt: Monthly,

    /// `1` for the clock hours of the day that are occupied
    pub clock_occupied: [Float; 24],

    /// `1` for the clock hours of the day that are not occupied
    pub clock_unoccupied: [Float; 24],
}

impl Schedule {
    pub fn new(population: &Population) -> Self {
        let mut hours_occupied = population.hours_end - population.hours_start;
        if hours_occupied < 0. {
            hours_occupied += 24.;
        }
        let mut days_occupied = population.days_end - population.days_start + 1.;
        if days_occupied < 0. {
            days_occupied += 7.;
        }

        let occupied_during_week = hours_occupied * days_occupied;
        let hours_unoccupied = 24. - hours_occupied;
        let unoccupied_during_week = (days_occupied - 1.) * hours_unoccupied;
        let weekend = HOURS_IN_WEEK - occupied_during_week - unoccupied_during_week;
        let weekend_day = (7. - days_occupied) * hours_occupied;

        let frac_wk_day = occupied_during_week / HOURS_IN_WEEK;
        let frac_wk_nt = unoccupied_during_week / HOURS_IN_WEEK;
        let frac_wke_tot = weekend / HOURS_IN_WEEK;
        let frac_wke_day = weekend_day / HOURS_IN_WEEK;
        let frac_wke_nt = (weekend - weekend_day) / HOURS_IN_WEEK;

        let mut clock_occupied = [0.0; 24];
        let mut clock_unoccupied = [0.0; 24];
        for h in 0..24 {
            let since_start = h as Float - OCCUPIED_DAY_START as Float;
            if since_start >= 0. && since_start < hours_occupied {
                clock_occupied[h] = 1.;
            } else {
                clock_unoccupied[h] = 1.;
            }
        }

        Self {
            hours_occupied,
            hours_unoccupied,
            days_occupied,
            frac_wk_day,
            frac_wk_nt,
            frac_wke_tot,
            frac_wke_day,
            frac_wke_nt,
            msec_wk_day: monthly(|m| MEGASECONDS[m] * frac_wk_day),
            msec_wk_nt: monthly(|m| MEGASECONDS[m] * frac_wk_nt),
            msec_wke_day: monthly(|m| MEGASECONDS[m] * frac_wke_day),
            msec_wke_nt: monthly(|m| MEGASECONDS[m] * frac_wke_nt),
            clock_occupied,
            clock_unoccupied,
        }
    }
}
