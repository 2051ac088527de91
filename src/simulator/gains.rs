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

use crate::simulator::lighting::LightingEnergy;
use crate::simulator::monthly::{monthly, share, Monthly, HOURS_IN_YEAR};
use crate::simulator::schedule::Schedule;
use crate::simulator::solar_breakdown::SolarBreakdown;
use crate::Float;
use model::BuildingParameters;

/// Internal heat gains: people, appliances and lights.
///
/// Densities are in W/m2 of floor. Unoccupied periods (week nights,
/// weekend days and weekend nights) all share the same internal gain;
/// they differ in the solar gain they receive.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InternalGains {
    /// Average gain from people
    pub people: Float,

    /// Average gain from electric and gas appliances
    pub appliances: Float,

    /// Average gain from the lights
    pub lights: Float,

    /// Internal gain density during any unoccupied period
    pub unoccupied: Float,

    /// Mean internal heat flow of the whole building (W)
    pub total: Float,

    /// Mean heat flow (W) during week nights, internal plus solar
    pub power_wk_nt: Monthly,

    /// Mean heat flow (W) during weekend days, internal plus solar
    pub power_wke_day: Monthly,

    /// Mean heat flow (W) during weekend nights, internal plus solar
    pub power_wke_nt: Monthly,
}

impl InternalGains {
    pub fn new(
        parameters: &BuildingParameters,
        schedule: &Schedule,
        lights: &LightingEnergy,
        breakdown: &SolarBreakdown,
        solar_gain: &Monthly,
    ) -> Self {
        let population = &parameters.population;
        let building = &parameters.building;
        let floor_area = parameters.structure.floor_area;
        let f = schedule.frac_wk_day;

        let people_occ = share(population.heat_gain_per_person, population.density_occupied);
        let people_unocc = share(population.heat_gain_per_person, population.density_unoccupied);
        let people = f * people_occ + (1. - f) * people_unocc;

        let appliances_occ = building.electric_appliance_heat_gain_occupied
            + building.gas_appliance_heat_gain_occupied;
        let appliances_unocc = building.electric_appliance_heat_gain_unoccupied
            + building.gas_appliance_heat_gain_unoccupied;
        let appliances = f * appliances_occ + (1. - f) * appliances_unocc;

        // kWh per year into W/m2
        let lights_unocc = share(
            lights.unoccupied * 1000.,
            floor_area * HOURS_IN_YEAR * (1. - f),
        );
        let lights_avg = share(lights.total() * 1000., floor_area * HOURS_IN_YEAR);

        let unoccupied = people_unocc + appliances_unocc + lights_unocc;
        let total = (people + appliances + lights_avg) * floor_area;

        // MJ over the period, divided by the length of the period
        let power = |msec: &Monthly, solar_fraction: &Monthly| -> Monthly {
            monthly(|m| {
                let energy = floor_area * unoccupied * msec[m] + solar_gain[m] * solar_fraction[m];
                share(energy, msec[m])
            })
        };

        Self {
            people,
            appliances,
            lights: lights_avg,
            unoccupied,
            total,
            power_wk_nt: power(&schedule.msec_wk_nt, &breakdown.frac_wk_nt),
            power_wke_day: power(&schedule.msec_wke_day, &breakdown.frac_wke_day),
            power_wke_nt: power(&schedule.msec_wke_nt, &breakdown.frac_wke_nt),
        }
    }
}
