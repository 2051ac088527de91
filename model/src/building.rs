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

/// Building-wide controls and plug loads
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingSystems {
    /// Building energy management level: `1` (none), `2` (simple)
    /// or `3` (advanced). Drives how the unoccupied temperature
    /// is allowed to drift.
    pub building_energy_management: Float,

    /// Constant illumination control factor for lighting (0-1)
    pub constant_illumination: Float,

    /// Electric appliance power density while occupied (W/m2)
    pub electric_appliance_heat_gain_occupied: Float,

    /// Electric appliance power density while unoccupied (W/m2)
    pub electric_appliance_heat_gain_unoccupied: Float,

    /// Gas appliance power density while occupied (W/m2)
    pub gas_appliance_heat_gain_occupied: Float,

    /// Gas appliance power density while unoccupied (W/m2)
    pub gas_appliance_heat_gain_unoccupied: Float,

    /// Lighting occupancy sensor factor (0-1, where 1 means no sensor)
    pub lighting_occupancy_sensor: Float,
}
