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

use crate::simulator::ventilation::{AIR_HEAT_CAPACITY, PRESSURE_EXPONENT};
use crate::Float;
use model::{OrientationValues, Structure, N_ORIENTATIONS};

/// Shading device factors, by device code (1, 2 or 3)
const SHADING_DEVICE_FACTORS: [Float; 3] = [0.5, 0.35, 1.0];

/// Correction for non-scattering glazing (ISO 13790, 11.4.2)
const NON_SCATTERING_FACTOR: Float = 0.9;

/// Frame area fraction of the windows
const FRAME_FRACTION: Float = 0.25;

/// External surface heat resistance (m2K/W), after ISO 6946
pub(crate) const EXTERNAL_SURFACE_RESISTANCE: Float = 0.04;

/// Heat transfer coefficients (W/K) of the building shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Transmission {
    /// Sum of U·A over the walls and windows of every orientation.
    /// Ground, unconditioned spaces and adjacent buildings are not
    /// considered.
    pub envelope: Float,

    /// Air leaking through the shell at 4 Pa, spread over the floor
    pub infiltration: Float,
}

impl Transmission {
    pub fn new(structure: &Structure) -> Self {
        let envelope = (0..N_ORIENTATIONS)
            .map(|i| {
                structure.wall_area[i] * structure.wall_u_value[i]
                    + structure.window_area[i] * structure.window_u_value[i]
            })
            .sum();

        // m3/h
        let leakage = structure.infiltration_rate
            * (4.0 as Float / 75.).powf(PRESSURE_EXPONENT)
            * structure.floor_area;
        let infiltration = leakage * AIR_HEAT_CAPACITY / 3600.;

        Self {
            envelope,
            infiltration,
        }
    }

    /// The transmission coefficient `H_tr`
    pub fn total(&self) -> Float {
        self.envelope + self.infiltration
    }
}

/// Effective solar collecting areas of the envelope (ISO 13790, 11.3)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolarApertures {
    /// Collecting area of the glazing in each orientation (m2)
    pub window: OrientationValues,

    /// Collecting area of the opaque elements in each orientation (m2)
    pub wall: OrientationValues,

    /// External radiative heat transfer coefficient of each orientation (W/m2K)
    pub radiative_coefficient: OrientationValues,
}

impl SolarApertures {
    pub fn new(structure: &Structure) -> Self {
        let device = (structure.window_shading_device as i32 - 1).clamp(0, 2) as usize;
        let shading = SHADING_DEVICE_FACTORS[device];

        let mut ret = Self {
            window: [0.; N_ORIENTATIONS],
            wall: [0.; N_ORIENTATIONS],
            radiative_coefficient: [0.; N_ORIENTATIONS],
        };
        for i in 0..N_ORIENTATIONS {
            let g_gl = structure.window_shgc[i] * NON_SCATTERING_FACTOR;
            ret.window[i] = shading * g_gl * (1. - FRAME_FRACTION) * structure.window_area[i];
            ret.radiative_coefficient[i] = 5. * structure.wall_thermal_emissivity[i];
            ret.wall[i] = structure.wall_solar_absorption[i]
                * EXTERNAL_SURFACE_RESISTANCE
                * structure.wall_u_value[i]
                * structure.wall_area[i];
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Orientation;
    use validate::assert_close;

    fn structure() -> Structure {
        let mut s = Structure::default();
        for i in 0..N_ORIENTATIONS {
            s.wall_area[i] = 10.;
            s.wall_u_value[i] = 0.5;
            s.window_area[i] = 2.;
            s.window_u_value[i] = 3.;
            s.window_shgc[i] = 0.6;
            s.wall_solar_absorption[i] = 0.7;
            s.wall_thermal_emissivity[i] = 0.9;
        }
        s
    }

    #[test]
    fn test_transmission() {
        let s = structure();
        let t = Transmission::new(&s);
        assert_close!(t.envelope, 9. * (5. + 6.), 1e-9);
        assert_eq!(t.infiltration, 0.);
        assert_close!(t.total(), t.envelope, 1e-9);

        let empty = Structure::default();
        assert_eq!(Transmission::new(&empty).total(), 0.);
    }

    #[test]
    fn test_infiltration_only() {
        let s = Structure {
            floor_area: 100.,
            infiltration_rate: 3.,
            ..Structure::default()
        };
        let t = Transmission::new(&s);
        assert_eq!(t.envelope, 0.);
        let leakage = 3. * (4.0 as Float / 75.).powf(0.65) * 100.;
        assert_close!(t.infiltration, leakage / 3., 1e-9);
        assert_close!(t.total(), t.infiltration, 1e-12);
        assert!(t.total() > 0.);
    }

    #[test]
    fn test_apertures() {
        let mut s = structure();
        s.window_shading_device = 2.;
        let a = SolarApertures::new(&s);
        let south = Orientation::South.index();
        assert_close!(a.window[south], 0.35 * 0.6 * 0.9 * 0.75 * 2., 1e-9);
        assert_close!(a.wall[south], 0.7 * 0.04 * 0.5 * 10., 1e-9);
        assert_close!(a.radiative_coefficient[south], 4.5, 1e-9);
    }

    #[test]
    fn test_shading_device_is_clamped() {
        let mut s = structure();
        s.window_shading_device = 0.;
        let low = SolarApertures::new(&s);
        s.window_shading_device = 1.;
        let first = SolarApertures::new(&s);
        assert_eq!(low, first);

        s.window_shading_device = 7.;
        let high = SolarApertures::new(&s);
        s.window_shading_device = 3.;
        let last = SolarApertures::new(&s);
        assert_eq!(high, last);
        assert_close!(last.window[0], 1.0 * 0.6 * 0.9 * 0.75 * 2., 1e-9);
    }
}
