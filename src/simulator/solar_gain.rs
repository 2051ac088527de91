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

use crate::simulator::envelope::{SolarApertures, EXTERNAL_SURFACE_RESISTANCE};
use crate::simulator::monthly::{monthly, Monthly, MEGASECONDS};
use crate::Float;
use model::{Orientation, OrientationValues, Structure, N_ORIENTATIONS};
use solar::{SolarSummary, N_WALLS};

/// Mean difference between the air and the sky temperatures (K),
/// for intermediate climates (ISO 13790, 11.4.6)
const SKY_TEMPERATURE_DIFFERENCE: Float = 11.;

/// Form factor between an element and the sky
fn sky_form_factor(orientation: Orientation) -> Float {
    if orientation.is_roof() {
        1.
    } else {
        0.5
    }
}

/// Irradiance on each orientation during month `m`. The roof
/// takes the global horizontal value.
fn irradiance(solar: &SolarSummary, m: usize) -> OrientationValues {
    let mut ret = [0.; N_ORIENTATIONS];
    ret[..N_WALLS].copy_from_slice(&solar.monthly_surface_radiation[m]);
    ret[Orientation::Roof.index()] = solar.monthly_global_horizontal[m];
    ret
}

/// Net solar heat gain of each month (MJ), windows plus opaque
/// elements minus the radiation of the opaque elements to the sky.
///
/// It can be negative in dark months.
pub(crate) fn solar_heat_gain(
    structure: &Structure,
    apertures: &SolarApertures,
    solar: &SolarSummary,
) -> Monthly {
    let sky_loss: OrientationValues = std::array::from_fn(|i| {
        EXTERNAL_SURFACE_RESISTANCE
            * structure.wall_u_value[i]
            * structure.wall_area[i]
            * apertures.radiative_coefficient[i]
            * SKY_TEMPERATURE_DIFFERENCE
    });

    monthly(|m| {
        let i_sol = irradiance(solar, m);
        let mut phi = 0.0;
        for orientation in Orientation::ALL {
            let i = orientation.index();
            phi += structure.window_shading_correction[i] * apertures.window[i] * i_sol[i];
            phi += apertures.wall[i] * i_sol[i] - sky_loss[i] * sky_form_factor(orientation);
        }
        phi * MEGASECONDS[m]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use validate::assert_close;

    #[test]
    fn test_window_only() {
        let mut structure = Structure::default();
        let south = Orientation::South.index();
        structure.window_area[south] = 10.;
        structure.window_shgc[south] = 0.5;
        structure.window_shading_correction[south] = 1.;
        structure.window_shading_device = 3.;

        let mut solar = SolarSummary::default();
        for m in 0..12 {
            solar.monthly_surface_radiation[m][south] = 100.;
        }

        let apertures = SolarApertures::new(&structure);
        let gains = solar_heat_gain(&structure, &apertures, &solar);
        let area = 0.5 * 0.9 * 0.75 * 10.;
        for m in 0..12 {
            assert_close!(gains[m], area * 100. * MEGASECONDS[m], 1e-9);
        }
    }

    #[test]
    fn test_roof_sees_the_horizontal() {
        let mut structure = Structure::default();
        let roof = Orientation::Roof.index();
        structure.window_area[roof] = 4.;
        structure.window_shgc[roof] = 1.;
        structure.window_shading_correction[roof] = 1.;
        structure.window_shading_device = 3.;

        let mut solar = SolarSummary::default();
        solar.monthly_global_horizontal[6] = 200.;
        solar.monthly_roof_radiation[6] = 1000.;

        let apertures = SolarApertures::new(&structure);
        let gains = solar_heat_gain(&structure, &apertures, &solar);
        assert_close!(gains[6], 0.9 * 0.75 * 4. * 200. * MEGASECONDS[6], 1e-9);
        assert_eq!(gains[0], 0.);
    }

    #[test]
    fn test_dark_walls_lose_heat() {
        let mut structure = Structure::default();
        for i in 0..N_ORIENTATIONS {
            structure.wall_area[i] = 10.;
            structure.wall_u_value[i] = 1.;
            structure.wall_thermal_emissivity[i] = 0.9;
        }
        let apertures = SolarApertures::new(&structure);
        let gains = solar_heat_gain(&structure, &apertures, &SolarSummary::default());

        // 8 walls at 0.5 plus a roof at 1.0
        let loss = 0.04 * 10. * 4.5 * 11. * (8. * 0.5 + 1.);
        for m in 0..12 {
            assert_close!(gains[m], -loss * MEGASECONDS[m], 1e-9);
        }
    }
}
