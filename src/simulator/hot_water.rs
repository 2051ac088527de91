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

use crate::simulator::monthly::{monthly, month_fraction, share, Monthly, KWH_TO_MJ};
use crate::Float;
use model::{EnergyCarrier, Heating};

/// Temperature of the delivered hot water (C)
const HOT_WATER_SET_POINT: Float = 60.;

/// Temperature of the mains water (C)
const MAINS_TEMPERATURE: Float = 20.;

/// Volumetric heat capacity of water (MJ/m3K)
const WATER_HEAT_CAPACITY: Float = 4.18;

/// Energy (kWh) used to heat domestic water, by carrier (NEN 2916, 12.2)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HotWater {
    pub electricity: Monthly,
    pub gas: Monthly,
}

impl HotWater {
    /// Spreads the yearly demand (m3 of water) over the months.
    /// Zero efficiencies yield no energy use.
    pub fn new(heating: &Heating) -> Self {
        let yearly = heating.hot_water_demand
            * (HOT_WATER_SET_POINT - MAINS_TEMPERATURE)
            * WATER_HEAT_CAPACITY;
        let fraction = month_fraction();
        let need = monthly(|m| {
            let demand = share(
                yearly * fraction[m],
                heating.hot_water_distribution_efficiency,
            ) / KWH_TO_MJ;
            share(demand, heating.hot_water_system_efficiency).max(0.)
        });

        match heating.hot_water_energy_type {
            EnergyCarrier::Electricity => Self {
                electricity: need,
                gas: [0.; 12],
            },
            EnergyCarrier::Gas => Self {
                electricity: [0.; 12],
                gas: need,
            },
        }
    }
}
