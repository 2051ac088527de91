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

use crate::{Float, OrientationValues};
use serde::{Deserialize, Serialize};

/// The envelope and mass of the building.
///
/// Per-orientation values are ordered S, SE, E, NE, N, NW, W, SW, roof.
/// In the window vectors, the roof slot describes skylights.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Structure {
    /// Conditioned floor area (m2)
    pub floor_area: Float,

    /// Height of the building (m)
    pub building_height: Float,

    /// Air leakage of the envelope at 75 Pa (m3/h per m2 of envelope)
    pub infiltration_rate: Float,

    /// Heat capacity of the interior, per unit of floor area (J/K/m2)
    pub interior_heat_capacity: Float,

    /// Heat capacity of the exterior walls and roof, per unit
    /// of their area (J/K/m2)
    pub wall_heat_capacity: Float,

    /// Opaque area of the walls and roof (m2)
    pub wall_area: OrientationValues,

    /// U-value of the walls and roof (W/m2K)
    pub wall_u_value: OrientationValues,

    /// Solar absorptance of the walls and roof (0-1)
    pub wall_solar_absorption: OrientationValues,

    /// Thermal emissivity of the walls and roof (0-1)
    pub wall_thermal_emissivity: OrientationValues,

    /// Area of windows and skylights (m2)
    pub window_area: OrientationValues,

    /// U-value of windows and skylights (W/m2K)
    pub window_u_value: OrientationValues,

    /// Solar heat gain coefficient of windows and skylights
    /// at normal incidence (0-1)
    pub window_shgc: OrientationValues,

    /// Shading correction factor of windows and skylights (0-1)
    pub window_shading_correction: OrientationValues,

    /// Kind of shading device used in the windows: 1, 2 or 3
    /// (see the window solar gain calculation)
    pub window_shading_device: Float,
}

impl Structure {
    /// Total opaque area of the envelope (m2)
    pub fn total_wall_area(&self) -> Float {
        self.wall_area.iter().sum()
    }

    /// Total glazed area of the envelope (m2)
    pub fn total_window_area(&self) -> Float {
        self.window_area.iter().sum()
    }
}
