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

//! Delivered heating and cooling energy (EN 15243, Annex E) and the
//! energy of the circulation pumps.

use crate::simulator::monthly::{monthly, share, sum, Monthly, EPS, MEGASECONDS};
use crate::simulator::need::EnergyNeed;
use crate::Float;
use model::{BuildingParameters, EnergyCarrier};

/// Minimum share of the yearly demand assigned to heating or cooling
const MIN_DEMAND_FRACTION: Float = 0.1;

/// Specific power of pumps and controls running all year (W/m2)
const PUMP_POWER: Float = 0.25;

/// Energy (MJ) the heating and cooling systems draw from each carrier
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SystemEnergy {
    /// Electricity used for heating
    pub heating_electricity: Monthly,

    /// Gas used for heating
    pub heating_gas: Monthly,

    /// Electricity used for cooling
    pub cooling_electricity: Monthly,

    /// Gas used for cooling
    pub cooling_gas: Monthly,
}

impl SystemEnergy {
    pub fn new(parameters: &BuildingParameters, need: &EnergyNeed) -> Self {
        let heating = &parameters.heating;
        let cooling = &parameters.cooling;

        let ieer = cooling.cop * cooling.partial_load_value;
        let waste = heating.hot_cold_waste_factor;

        let heating_year = need.heating_year();
        let cooling_year = need.cooling_year();

        // `max` drops the NaN of a year without any need
        let heating_fraction =
            (heating_year / (cooling_year + heating_year)).max(MIN_DEMAND_FRACTION);
        let cooling_fraction = (1. - heating_fraction).max(MIN_DEMAND_FRACTION);

        let heating_distribution =
            1. / (1. + heating.hvac_loss_factor + waste / heating_fraction);
        let cooling_distribution =
            1. / (1. + cooling.hvac_loss_factor + waste / cooling_fraction);

        let heating_system = monthly(|m| {
            let loss = need.heating[m] * (1. - heating_distribution) / heating_distribution;
            (loss + need.heating[m]) / (heating.efficiency + EPS)
        });
        let cooling_system = monthly(|m| {
            let loss = need.cooling[m] * (1. - cooling_distribution) / cooling_distribution;
            (loss + need.cooling[m]) / (ieer + EPS)
        });

        let (heating_electricity, heating_gas) = match heating.energy_type {
            EnergyCarrier::Electricity => (heating_system, [0.; 12]),
            EnergyCarrier::Gas => ([0.; 12], heating_system),
        };

        Self {
            heating_electricity,
            heating_gas,
            cooling_electricity: cooling_system,
            cooling_gas: [0.; 12],
        }
    }
}

/// Spreads `total` over the months in proportion to `fraction`
fn spread(fraction: &Monthly, total: Float) -> Monthly {
    let fraction_sum = sum(fraction);
    monthly(|m| share(fraction[m] * total, fraction_sum))
}

/// Energy (MJ) used by the pumps of the heating and cooling
/// circuits, following EN 15232.
pub(crate) fn pump_energy(parameters: &BuildingParameters, need: &EnergyNeed) -> Monthly {
    let floor_area = parameters.structure.floor_area;
    let yearly = PUMP_POWER * sum(&MEGASECONDS);

    let heating_total = yearly * parameters.heating.pump_control_reduction * floor_area;
    let cooling_total = yearly * parameters.cooling.pump_control_reduction * floor_area;

    let heating_mode = monthly(|m| share(need.heating[m], need.heating[m] + need.cooling[m]));
    let cooling_mode = monthly(|m| share(need.cooling[m], need.heating[m] + need.cooling[m]));

    let heating_pumps = spread(&heating_mode, heating_total);
    let cooling_pumps = spread(&cooling_mode, cooling_total);

    if heating_total == 0. || cooling_total == 0. {
        return monthly(|m| heating_pumps[m] + cooling_pumps[m]);
    }
    let year = need.heating_year() + need.cooling_year();
    let operation = monthly(|m| share(need.heating[m] + need.cooling[m], year));
    spread(&operation, heating_total + cooling_total)
}
