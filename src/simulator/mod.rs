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

//! The monthly quasi-steady-state method of ISO 13790.
//!
//! Each stage lives in its own module and is a pure function of the
//! building parameters, the [`SolarSummary`] and the outputs of the
//! stages before it. Energies are kept in MJ until the results are
//! assembled, when they become kWh per m2 of floor.

mod envelope;
mod gains;
mod hot_water;
mod hvac;
mod lighting;
mod monthly;
mod need;
mod schedule;
mod solar_breakdown;
mod solar_gain;
mod temperature;
mod ventilation;

use crate::end_uses::{EndUseCategory, SimulationResult};
use crate::error::SimulationError;
use crate::Float;
use model::{BuildingParameters, EnergyCarrier};
use solar::SolarSummary;
use tracing::{debug, instrument};

use envelope::{SolarApertures, Transmission};
use gains::InternalGains;
use hot_water::HotWater;
use hvac::{pump_energy, SystemEnergy};
use lighting::LightingEnergy;
use monthly::{hours_in_month, share, KWH_TO_MJ};
use need::EnergyNeed;
use schedule::Schedule;
use solar_breakdown::SolarBreakdown;
use solar_gain::solar_heat_gain;
use temperature::InteriorTemperature;
use ventilation::VentilationCoefficients;

/// Runs the monthly method for one building.
///
/// The simulator borrows its inputs and keeps no state between
/// calls, so [`MonthlySimulator::simulate`] always returns the
/// same results.
///
/// ```
/// use isomodel::{BuildingParameters, MonthlySimulator, SimulationError};
///
/// let parameters = BuildingParameters::default();
/// let simulator = MonthlySimulator::new(&parameters);
/// assert!(matches!(simulator.simulate(), Err(SimulationError::MissingWeather)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MonthlySimulator<'a> {
    parameters: &'a BuildingParameters,
    solar: Option<&'a SolarSummary>,
}

impl<'a> MonthlySimulator<'a> {
    /// Creates a simulator without weather. It will not
    /// simulate until some is bound with [`Self::with_weather`].
    pub fn new(parameters: &'a BuildingParameters) -> Self {
        Self {
            parameters,
            solar: None,
        }
    }

    /// Binds the weather, summarized by a [`solar::SolarEngine`]
    pub fn with_weather(mut self, solar: &'a SolarSummary) -> Self {
        self.solar = Some(solar);
        self
    }

    /// Calculates the energy used each month.
    #[instrument(skip_all)]
    pub fn simulate(&self) -> Result<SimulationResult, SimulationError> {
        let solar = self.solar.ok_or(SimulationError::MissingWeather)?;
        let p = self.parameters;
        let structure = &p.structure;

        // Stages 1 to 3
        let schedule = Schedule::new(&p.population);
        let breakdown = SolarBreakdown::new(&schedule, solar);
        let lights = LightingEnergy::new(p, &breakdown.hours_sun_down);

        // Stages 4 to 6
        let transmission = Transmission::new(structure);
        let h_tr = transmission.total();
        let apertures = SolarApertures::new(structure);
        let solar_gain = solar_heat_gain(structure, &apertures, solar);

        // Stages 7 to 9
        let gains = InternalGains::new(p, &schedule, &lights, &breakdown, &solar_gain);
        let temperature = InteriorTemperature::new(p, h_tr, &schedule, &breakdown, &gains);
        let ventilation = VentilationCoefficients::new(
            p,
            solar,
            &temperature.heating,
            &temperature.cooling,
            schedule.frac_wk_day,
        );
        debug!(
            "H_tr = {:.3} W/K | tau = {:.3} h | internal gains = {:.3} W",
            h_tr, temperature.tau, gains.total
        );

        // Stages 10 to 12
        let need = EnergyNeed::new(
            p,
            solar,
            transmission.envelope,
            gains.total,
            &solar_gain,
            &temperature,
            &ventilation,
            schedule.frac_wk_day,
        );
        debug!(
            "Yearly need: heating = {:.3} MJ | cooling = {:.3} MJ",
            need.heating_year(),
            need.cooling_year()
        );
        let systems = SystemEnergy::new(p, &need);
        let pumps = pump_energy(p, &need);
        let water = HotWater::new(&p.heating);

        // Plug loads (W/m2)
        let f = schedule.frac_wk_day;
        let building = &p.building;
        let plug_electricity = building.electric_appliance_heat_gain_occupied * f
            + building.electric_appliance_heat_gain_unoccupied * (1. - f);
        let plug_gas = building.gas_appliance_heat_gain_occupied * f
            + building.gas_appliance_heat_gain_unoccupied * (1. - f);

        let floor_area = structure.floor_area;
        let per_area = |mj: Float| share(mj, floor_area) / KWH_TO_MJ;
        let hours = hours_in_month();

        let mut result = SimulationResult::default();
        for (m, snapshot) in result.monthly.iter_mut().enumerate() {
            use EndUseCategory::*;
            use EnergyCarrier::*;
            let mut add = |carrier, category, value| snapshot.add(carrier, category, value);

            add(Electricity, Heating, per_area(systems.heating_electricity[m]));
            add(Electricity, Cooling, per_area(systems.cooling_electricity[m]));
            add(Electricity, InteriorLights, share(lights.interior[m], floor_area));
            add(Electricity, ExteriorLights, share(lights.exterior[m], floor_area));
            add(Electricity, Fans, need.fans[m]);
            add(Electricity, Pumps, per_area(pumps[m]));
            add(Electricity, InteriorEquipment, hours[m] * plug_electricity / 1000.);
            add(Electricity, WaterSystems, share(water.electricity[m], floor_area));

            add(Gas, Heating, per_area(systems.heating_gas[m]));
            add(Gas, Cooling, per_area(systems.cooling_gas[m]));
            add(Gas, InteriorEquipment, hours[m] * plug_gas / 1000.);
            add(Gas, WaterSystems, share(water.gas[m], floor_area));
        }
        Ok(result)
    }
}
