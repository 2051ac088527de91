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

//! Average interior temperatures.
//!
//! The week is modelled as a sequence of five periods in which the
//! thermostat is set back: a week night, then a weekend of two
//! (day, night) pairs. Within each period the interior temperature
//! relaxes exponentially, with the building's time constant, towards
//! the exterior temperature raised by the period's heat gains.

use crate::simulator::gains::InternalGains;
use crate::simulator::monthly::{share, Monthly};
use crate::simulator::schedule::Schedule;
use crate::simulator::solar_breakdown::SolarBreakdown;
use crate::Float;
use model::BuildingParameters;

const N_PERIODS: usize = 5;

/// Temperature (C) reached after `ti` hours, starting at `start` and
/// relaxing towards `target`
fn relax(start: Float, target: Float, ti: Float, tau: Float) -> Float {
    if ti == 0. {
        return start;
    }
    (start - target) * (-ti / tau).exp() + target
}

/// Mean temperature (C) over `ti` hours, starting at `start` and
/// relaxing towards `target`
fn period_mean(start: Float, target: Float, ti: Float, tau: Float) -> Float {
    if ti == 0. || !tau.is_finite() {
        return start;
    }
    if tau == 0. {
        return target;
    }
    tau / ti * (start - target) * (1. - (-ti / tau).exp()) + target
}

/// Thermostat offset granted by the building energy management level
fn management_offset(level: Float) -> Float {
    match level as i32 {
        2 => 0.5,
        3 => 1.0,
        _ => 0.0,
    }
}

/// Average interior temperatures used for the heating and
/// cooling balances.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InteriorTemperature {
    /// Heat capacity of the building (J/K)
    pub heat_capacity: Float,

    /// Time constant of the building (h). Infinite when the
    /// building exchanges no heat with the exterior.
    pub tau: Float,

    /// Average interior temperature in heating mode (C)
    pub heating: Monthly,

    /// Average interior temperature in cooling mode (C)
    pub cooling: Monthly,
}

impl InteriorTemperature {
    pub fn new(
        parameters: &BuildingParameters,
        h_tr: Float,
        schedule: &Schedule,
        breakdown: &SolarBreakdown,
        gains: &InternalGains,
    ) -> Self {
        let structure = &parameters.structure;
        let offset = management_offset(parameters.building.building_energy_management);
        let heating_control = parameters.heating.temperature_set_point_occupied - offset;
        let cooling_control = parameters.cooling.temperature_set_point_occupied + offset;
        let heating_setback = parameters.heating.temperature_set_point_unoccupied;
        let cooling_setback = parameters.cooling.temperature_set_point_unoccupied;

        let heat_capacity = structure.interior_heat_capacity * structure.floor_area
            + structure.wall_heat_capacity * structure.total_wall_area();
        // Ventilation is left out of the time constant
        let h_tot = h_tr;
        let tau = if h_tot > 0. {
            heat_capacity / h_tot / 3600.
        } else {
            Float::INFINITY
        };

        let unocc = schedule.hours_unoccupied;
        let occ = schedule.hours_occupied;
        let ti: [Float; N_PERIODS] = [unocc, occ, unocc, occ, unocc];

        let mut heating = [0.; 12];
        let mut cooling = [0.; 12];
        for m in 0..12 {
            let night = breakdown.dry_bulb_night[m];
            let day = breakdown.dry_bulb_day[m];
            let exterior = [night, day, night, day, night];
            let power = [
                gains.power_wk_nt[m],
                gains.power_wke_day[m],
                gains.power_wke_nt[m],
                gains.power_wke_day[m],
                gains.power_wke_nt[m],
            ];
            let target: [Float; N_PERIODS] =
                std::array::from_fn(|i| exterior[i] + share(power[i], h_tot));

            let heating_weekend =
                weekend_average(heating_control, &target, &ti, tau, |t| t.max(heating_setback));
            let cooling_weekend =
                weekend_average(cooling_control, &target, &ti, tau, |t| t.min(cooling_setback));

            let heating_week = heating_control * schedule.frac_wk_day
                + heating_weekend.week_night * schedule.frac_wk_nt
                + heating_weekend.average * schedule.frac_wke_tot;
            let cooling_week = cooling_control * schedule.frac_wk_day
                + cooling_weekend.week_night * schedule.frac_wk_nt
                + cooling_weekend.average * schedule.frac_wke_tot;

            heating[m] = heating_week.min(heating_control);
            cooling[m] = cooling_week.max(cooling_control);
        }

        Self {
            heat_capacity,
            tau,
            heating,
            cooling,
        }
    }
}

struct WeekendAverage {
    /// Mean over the week night, the first period
    week_night: Float,

    /// Mean over the five periods
    average: Float,
}

/// Follows the temperature through the five set-back periods,
/// starting at `control`. The thermostat holds the set-back
/// temperature, which `setback` applies.
fn weekend_average<F: Fn(Float) -> Float>(
    control: Float,
    target: &[Float; N_PERIODS],
    ti: &[Float; N_PERIODS],
    tau: Float,
    setback: F,
) -> WeekendAverage {
    // Temperature at the end of each period
    let mut end = [0.; N_PERIODS - 1];
    let mut t = control;
    for i in 0..N_PERIODS - 1 {
        t = relax(t, target[i], ti[i], tau);
        end[i] = t;
    }

    // Temperature at the start of each period
    let mut start = [setback(control); N_PERIODS];
    for i in 1..N_PERIODS {
        start[i] = setback(end[i - 1]);
    }

    let mean: [Float; N_PERIODS] =
        std::array::from_fn(|i| setback(period_mean(start[i], target[i], ti[i], tau)));

    WeekendAverage {
        week_night: mean[0],
        average: mean.iter().sum::<Float>() / N_PERIODS as Float,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::envelope::Transmission;
    use crate::simulator::lighting::LightingEnergy;
    use model::{Cooling, Heating, Population, Structure};
    use solar::SolarSummary;
    use validate::assert_close;

    #[test]
    fn test_relax() {
        assert_close!(relax(20., 10., 1e9, 1.), 10., 1e-9);
        assert_eq!(relax(20., 10., 0., 1.), 20.);
        assert_close!(relax(20., 10., 2., 2.), 10. + 10. * (-1.0 as Float).exp(), 1e-9);
        assert_eq!(relax(20., 10., 5., Float::INFINITY), 20.);
    }

    #[test]
    fn test_period_mean() {
        assert_eq!(period_mean(20., 10., 0., 5.), 20.);
        assert_eq!(period_mean(20., 10., 3., Float::INFINITY), 20.);
        assert_eq!(period_mean(20., 10., 3., 0.), 10.);
        // Starting at the target, it stays there
        assert_close!(period_mean(10., 10., 3., 5.), 10., 1e-12);
        // Mean lies between start and end
        let mean = period_mean(20., 10., 4., 4.);
        let end = relax(20., 10., 4., 4.);
        assert!(mean < 20. && mean > end);
    }

    #[test]
    fn test_management_offset() {
        assert_eq!(management_offset(0.), 0.);
        assert_eq!(management_offset(1.), 0.);
        assert_eq!(management_offset(2.), 0.5);
        assert_eq!(management_offset(3.), 1.0);
    }

    fn parameters() -> BuildingParameters {
        let mut structure = Structure {
            floor_area: 100.,
            interior_heat_capacity: 200000.,
            wall_heat_capacity: 100000.,
            ..Structure::default()
        };
        for i in 0..9 {
            structure.wall_area[i] = 20.;
            structure.wall_u_value[i] = 0.5;
        }
        BuildingParameters {
            structure,
            population: Population {
                days_start: 1.,
                days_end: 5.,
                hours_start: 8.,
                hours_end: 18.,
                ..Population::default()
            },
            heating: Heating {
                temperature_set_point_occupied: 20.,
                temperature_set_point_unoccupied: 15.,
                ..Heating::default()
            },
            cooling: Cooling {
                temperature_set_point_occupied: 25.,
                temperature_set_point_unoccupied: 28.,
                ..Cooling::default()
            },
            ..BuildingParameters::default()
        }
    }

    fn temperatures(p: &BuildingParameters, dry_bulb: Float) -> InteriorTemperature {
        let schedule = Schedule::new(&p.population);
        let mut solar = SolarSummary::default();
        for m in 0..12 {
            solar.hourly_dry_bulb[m] = [dry_bulb; 24];
        }
        let breakdown = SolarBreakdown::new(&schedule, &solar);
        let lights = LightingEnergy::new(p, &[0.; 12]);
        let gains = InternalGains::new(p, &schedule, &lights, &breakdown, &[0.; 12]);
        let h_tr = Transmission::new(&p.structure).total();
        InteriorTemperature::new(p, h_tr, &schedule, &breakdown, &gains)
    }

    #[test]
    fn test_time_constant() {
        let t = temperatures(&parameters(), 0.);
        let cm = 200000. * 100. + 100000. * 180.;
        assert_close!(t.heat_capacity, cm, 1e-6);
        assert_close!(t.tau, cm / 90. / 3600., 1e-9);
    }

    #[test]
    fn test_cold_outside() {
        let t = temperatures(&parameters(), -10.);
        for m in 0..12 {
            // Set back at night, so below the occupied set point...
            assert!(t.heating[m] < 20.);
            // ... but never below the set back.
            assert!(t.heating[m] >= 15.);
            assert!(t.cooling[m] >= 25.);
            assert!(t.cooling[m] > t.heating[m]);
        }
    }

    #[test]
    fn test_warm_outside() {
        // The building floats above the heating set point when
        // unoccupied, so the average is capped at the set point
        let t = temperatures(&parameters(), 22.);
        for m in 0..12 {
            assert_close!(t.heating[m], 20., 1e-9);
            assert!(t.cooling[m] >= 25.);
            assert!(t.cooling[m] <= 28.);
        }
    }

    #[test]
    fn test_no_envelope() {
        let mut p = parameters();
        p.structure.wall_area = [0.; 9];
        let t = temperatures(&p, -10.);
        assert!(t.tau.is_infinite());
        for m in 0..12 {
            // Nothing leaves the building: the temperature holds
            assert_close!(t.heating[m], 20., 1e-9);
            assert_close!(t.cooling[m], 25., 1e-9);
        }
    }

    #[test]
    fn test_leaky_shell_without_envelope() {
        let mut p = parameters();
        p.structure.wall_area = [0.; 9];
        p.structure.infiltration_rate = 2.;
        let t = temperatures(&p, -10.);

        let h_tr = Transmission::new(&p.structure).total();
        assert!(h_tr > 0.);
        assert!(t.tau.is_finite());
        assert_close!(t.tau, 200000. * 100. / h_tr / 3600., 1e-9);
        for m in 0..12 {
            assert!(t.heating[m] < 20.);
            assert!(t.heating[m] >= 15.);
        }
    }
}
