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

use crate::simulator::monthly::{hours_in_month, share, Monthly};
use crate::simulator::schedule::Schedule;
use crate::Float;
use solar::SolarSummary;

/// Weighted mean of a diurnal profile, using `clock` as weights.
/// An empty clock has a mean of zero.
fn clock_mean(profile: &[Float; 24], clock: &[Float; 24]) -> Float {
    let weight: Float = clock.iter().sum();
    let total: Float = profile.iter().zip(clock.iter()).map(|(p, c)| p * c).sum();
    share(total, weight)
}

/// How the solar resource of each month falls into the
/// periods of the [`Schedule`], and how long the nights are.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolarBreakdown {
    /// Mean dry bulb temperature during the occupied clock hours
    pub dry_bulb_day: Monthly,

    /// Mean dry bulb temperature during the unoccupied clock hours
    pub dry_bulb_night: Monthly,

    /// Fraction of the month's horizontal radiation received on weekday nights
    pub frac_wk_nt: Monthly,

    /// Fraction of the month's horizontal radiation received on weekend days
    pub frac_wke_day: Monthly,

    /// Fraction of the month's horizontal radiation received on weekend nights
    pub frac_wke_nt: Monthly,

    /// Hours in the month with the sun below the horizon
    pub hours_sun_down: Monthly,
}

impl SolarBreakdown {
    pub fn new(schedule: &Schedule, solar: &SolarSummary) -> Self {
        let hours = hours_in_month();
        let mut ret = Self {
            dry_bulb_day: [0.; 12],
            dry_bulb_night: [0.; 12],
            frac_wk_nt: [0.; 12],
            frac_wke_day: [0.; 12],
            frac_wke_nt: [0.; 12],
            hours_sun_down: [0.; 12],
        };

        for m in 0..12 {
            let dry_bulb = &solar.hourly_dry_bulb[m];
            let global = &solar.hourly_global_horizontal[m];

            ret.dry_bulb_day[m] = clock_mean(dry_bulb, &schedule.clock_occupied);
            ret.dry_bulb_night[m] = clock_mean(dry_bulb, &schedule.clock_unoccupied);

            let global_day = clock_mean(global, &schedule.clock_occupied);
            let global_night = clock_mean(global, &schedule.clock_unoccupied);

            // MJ/m2 received in each period
            let wk_day = global_day * schedule.msec_wk_day[m];
            let wk_nt = global_night * schedule.msec_wk_nt[m];
            let wke_day = global_day * schedule.msec_wke_day[m];
            let wke_nt = global_night * schedule.msec_wke_nt[m];
            let total = wk_day + wk_nt + wke_day + wke_nt;

            ret.frac_wk_nt[m] = share(wk_nt, total);
            ret.frac_wke_day[m] = share(wke_day, total);
            ret.frac_wke_nt[m] = share(wke_nt, total);

            // The sun is up from the first to the last hour with radiation
            let sunrise = global.iter().position(|v| *v != 0.).unwrap_or(0);
            let sunset = global.iter().rposition(|v| *v != 0.).unwrap_or(0);
            let frac_up = (sunset - sunrise + 1) as Float / 24.;
            ret.hours_sun_down[m] = (1. - frac_up) * hours[m];
        }

        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Population;
    use validate::assert_close;

    fn office() -> Schedule {
        Schedule::new(&Population {
            days_start: 1.,
            days_end: 5.,
            hours_start: 8.,
            hours_end: 18.,
            ..Population::default()
        })
    }

    fn summary() -> SolarSummary {
        let mut s = SolarSummary::default();
        for m in 0..12 {
            for h in 0..24 {
                s.hourly_dry_bulb[m][h] = h as Float;
                // Sun up from 6 to 17, inclusive
                if (6..18).contains(&h) {
                    s.hourly_global_horizontal[m][h] = 100.;
                }
            }
        }
        s
    }

    #[test]
    fn test_clock_mean() {
        let mut clock = [0.; 24];
        clock[2] = 1.;
        clock[4] = 1.;
        let profile: [Float; 24] = std::array::from_fn(|h| h as Float);
        assert_close!(clock_mean(&profile, &clock), 3., 1e-12);
        assert_eq!(clock_mean(&profile, &[0.; 24]), 0.);
    }

    #[test]
    fn test_breakdown() {
        let b = SolarBreakdown::new(&office(), &summary());

        // Occupied hours are 7..17
        assert_close!(b.dry_bulb_day[0], 11.5, 1e-9);
        // The rest: (0+..+6 + 17+..+23) / 14
        let night: Float = (0..7).chain(17..24).map(|h| h as Float).sum::<Float>() / 14.;
        assert_close!(b.dry_bulb_night[5], night, 1e-9);

        // 12 hours of sun
        assert_close!(b.hours_sun_down[0], 0.5 * 744., 1e-9);
        assert_close!(b.hours_sun_down[1], 0.5 * 672., 1e-9);

        for m in 0..12 {
            let unocc = b.frac_wk_nt[m] + b.frac_wke_day[m] + b.frac_wke_nt[m];
            assert!(unocc > 0. && unocc < 1.);
        }
    }

    #[test]
    fn test_dark_month() {
        let b = SolarBreakdown::new(&office(), &SolarSummary::default());
        for m in 0..12 {
            assert_eq!(b.frac_wk_nt[m], 0.);
            assert_eq!(b.frac_wke_day[m], 0.);
            assert_eq!(b.frac_wke_nt[m], 0.);
            assert!(b.hours_sun_down[m] > 0.);
        }
    }
}
