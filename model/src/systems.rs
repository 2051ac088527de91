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

use crate::Float;
use serde::{Deserialize, Serialize};

/// The form in which energy is delivered to a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnergyCarrier {
    /// Electricity
    #[default]
    Electricity,
    /// Natural gas (or any other fuel)
    Gas,
}

impl EnergyCarrier {
    /// Reads the numeric code used in configuration files: `1` is
    /// electricity and anything else is gas.
    pub fn from_code(code: Float) -> Self {
        if code.round() as i64 == 1 {
            EnergyCarrier::Electricity
        } else {
            EnergyCarrier::Gas
        }
    }

    /// The numeric code used in configuration files
    pub fn code(&self) -> Float {
        match self {
            EnergyCarrier::Electricity => 1.,
            EnergyCarrier::Gas => 2.,
        }
    }
}

/// How outdoor air is supplied to the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VentilationType {
    /// Mechanical supply and exhaust
    #[default]
    Mechanical,
    /// Mechanical exhaust, natural supply
    MechanicalExhaust,
    /// Natural ventilation only. There is no mechanical ventilation load.
    Natural,
}

impl VentilationType {
    /// Reads the numeric code used in configuration files (`1`, `2` or `3`).
    /// Unknown codes are considered mechanical.
    pub fn from_code(code: Float) -> Self {
        match code.round() as i64 {
            2 => VentilationType::MechanicalExhaust,
            3 => VentilationType::Natural,
            _ => VentilationType::Mechanical,
        }
    }

    /// The numeric code used in configuration files
    pub fn code(&self) -> Float {
        match self {
            VentilationType::Mechanical => 1.,
            VentilationType::MechanicalExhaust => 2.,
            VentilationType::Natural => 3.,
        }
    }
}

/// The heating system, which also provides domestic hot water
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Heating {
    /// Heating set point while the building is occupied (C)
    pub temperature_set_point_occupied: Float,

    /// Heating set point while the building is unoccupied (C)
    pub temperature_set_point_unoccupied: Float,

    /// Efficiency of the heating system (0-1)
    pub efficiency: Float,

    /// What the heating system consumes
    pub energy_type: EnergyCarrier,

    /// Distribution losses of the heating system, as a fraction of the load
    pub hvac_loss_factor: Float,

    /// Losses caused by simultaneous heating and cooling
    pub hot_cold_waste_factor: Float,

    /// Pump energy reduction due to control (0-1)
    pub pump_control_reduction: Float,

    /// Domestic hot water demand (m3/yr)
    pub hot_water_demand: Float,

    /// Efficiency of the hot water distribution (0-1)
    pub hot_water_distribution_efficiency: Float,

    /// Efficiency of the hot water system (0-1)
    pub hot_water_system_efficiency: Float,

    /// What the hot water system consumes
    pub hot_water_energy_type: EnergyCarrier,
}

/// The cooling system
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cooling {
    /// Cooling set point while the building is occupied (C)
    pub temperature_set_point_occupied: Float,

    /// Cooling set point while the building is unoccupied (C)
    pub temperature_set_point_unoccupied: Float,

    /// Rated coefficient of performance
    pub cop: Float,

    /// Ratio between the integrated part load value and the rated COP
    pub partial_load_value: Float,

    /// Distribution losses of the cooling system, as a fraction of the load
    pub hvac_loss_factor: Float,

    /// Pump energy reduction due to control (0-1)
    pub pump_control_reduction: Float,
}

/// The ventilation system and its fans
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ventilation {
    /// Kind of ventilation
    pub ventilation_type: VentilationType,

    /// Fresh air supply rate (m3/h)
    pub supply_rate: Float,

    /// Difference between supply and exhaust air flows (m3/h)
    pub supply_difference: Float,

    /// Efficiency of the heat recovery (0-1)
    pub heat_recovery_efficiency: Float,

    /// Fraction of the exhaust air that is recirculated (0-1)
    pub exhaust_air_recirculated: Float,

    /// Specific fan power (W per L/s)
    pub fan_power: Float,

    /// Fan flow control factor
    pub fan_control_factor: Float,

    /// Losses caused by simultaneous heating and cooling
    pub waste_factor: Float,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_carrier_codes() {
        assert_eq!(EnergyCarrier::from_code(1.), EnergyCarrier::Electricity);
        assert_eq!(EnergyCarrier::from_code(2.), EnergyCarrier::Gas);
        assert_eq!(EnergyCarrier::from_code(0.), EnergyCarrier::Gas);
        for c in [EnergyCarrier::Electricity, EnergyCarrier::Gas] {
            assert_eq!(EnergyCarrier::from_code(c.code()), c);
        }
    }

    #[test]
    fn test_ventilation_codes() {
        assert_eq!(VentilationType::from_code(3.), VentilationType::Natural);
        assert_eq!(VentilationType::from_code(7.), VentilationType::Mechanical);
        for v in [
            VentilationType::Mechanical,
            VentilationType::MechanicalExhaust,
            VentilationType::Natural,
        ] {
            assert_eq!(VentilationType::from_code(v.code()), v);
        }
    }
}
