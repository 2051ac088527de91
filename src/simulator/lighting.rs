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

use crate::simulator::monthly::{month_fraction, monthly, Monthly, HOURS_IN_YEAR};
use crate::Float;
use model::BuildingParameters;

/// Daylight hours assumed by the lighting calculation
const DAYLIGHT_START: Float = 7.;
const DAYLIGHT_END: Float = 19.;

/// Weeks per year the lights run on the occupied schedule
const LIGHTING_WEEKS: Float = 50.;

/// Interior and exterior lighting energy, following prEN 15193.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LightingEnergy {
    /// Yearly energy for lighting occupied hours (kWh)
    pub occupied: Float,

    /// Yearly energy for lighting the rest of the year (kWh)
    pub unoccupied: Float,

    /// Interior lighting energy in each month (kWh)
    pub interior: Monthly,

    /// Exterior lighting energy in each month (kWh)
    pub exterior: Monthly,
}

impl LightingEnergy {
    /// Yearly interior lighting energy (kWh)
    pub fn total(&self) -> Float {
        self.occupied + self.unoccupied
    }

    pub fn new(parameters: &BuildingParameters, hours_sun_down: &Monthly) -> Self {
        let population = &parameters.population;
        let lighting = &parameters.lighting;
        let floor_area = parameters.structure.floor_area;

        let dimming = lighting.dimming_fraction;
        let occupancy_sensor = parameters.building.lighting_occupancy_sensor;
        let constant_illumination = parameters.building.constant_illumination;

        // Days are counted inclusively, plus one
        let days = population.days_end + 1. - population.days_start + 1.;
        let hours_day = DAYLIGHT_END.min(population.hours_end)
            - population.hours_start.max(DAYLIGHT_START);
        let hours_night = (DAYLIGHT_START - population.hours_start).max(0.)
            + (population.hours_end - DAYLIGHT_END).max(0.);
        let t_day = hours_day * days * LIGHTING_WEEKS;
        let t_night = hours_night * days * LIGHTING_WEEKS;

        let occupied = floor_area
            * lighting.power_density_occupied
            * constant_illumination
            * occupancy_sensor
            * (t_day * dimming + t_night)
            / 1000.;
        let t_unoccupied = HOURS_IN_YEAR - t_day - t_night;
        let unoccupied = floor_area * lighting.power_density_unoccupied * t_unoccupied / 1000.;

        let fraction = month_fraction();
        let total = occupied + unoccupied;
        Self {
            occupied,
            unoccupied,
            interior: monthly(|m| fraction[m] * total),
            exterior: monthly(|m| hours_sun_down[m] * lighting.exterior_energy / 1000.),
        }
    }
}
