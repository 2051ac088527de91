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

use crate::simulator::monthly::{monthly, share, Monthly};
use crate::Float;
use model::{BuildingParameters, VentilationType};
use solar::SolarSummary;

/// Flow exponent used to bring the infiltration rate from 75 Pa to 4 Pa
pub(crate) const PRESSURE_EXPONENT: Float = 0.65;

/// Ratio between the stack height and the zone height (EN 15242)
const STACK_HEIGHT_FRACTION: Float = 0.7;

const STACK_EXPONENT: Float = 0.667;
const STACK_COEFFICIENT: Float = 0.0146;
const WIND_EXPONENT: Float = 0.667;
const WIND_COEFFICIENT: Float = 0.0769;

/// Pressure coefficient difference between windward and leeward
/// sides of low rise buildings (EN 15242)
const WIND_PRESSURE_DIFFERENCE: Float = 0.75;

const STACK_WIND_COEFFICIENT: Float = 0.14;

/// Minimum stack driven flow (m3/h/m2)
const MIN_STACK_FLOW: Float = 0.001;

/// Volumetric heat capacity of air (J/m3K)
pub(crate) const AIR_HEAT_CAPACITY: Float = 1200.;

/// Stands in for an infiltration rate of zero
const MIN_INFILTRATION: Float = 1e-11;

/// Ventilation heat transfer coefficients (W/K per m2 of floor)
/// for the heating and the cooling balances, after EN 15242.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VentilationCoefficients {
    /// Infiltration at 4 Pa (m3/h per m2 of floor)
    pub infiltration_4pa: Float,

    /// Coefficient while heating
    pub heating: Monthly,

    /// Coefficient while cooling
    pub cooling: Monthly,
}

impl VentilationCoefficients {
    pub fn new(
        parameters: &BuildingParameters,
        solar: &SolarSummary,
        heating_temperature: &Monthly,
        cooling_temperature: &Monthly,
        frac_wk_day: Float,
    ) -> Self {
        let structure = &parameters.structure;
        let ventilation = &parameters.ventilation;
        let floor_area = structure.floor_area;

        let zone_height = structure.building_height.max(0.1);
        let stack_height = STACK_HEIGHT_FRACTION * zone_height;

        // L/s into m3/h per m2 of floor
        let supply = share(ventilation.supply_rate, floor_area) / 3.6;
        let supply_exhaust_difference = share(ventilation.supply_difference, floor_area) / 3.6;

        let mut q75 = structure.infiltration_rate;
        if q75 == 0. {
            q75 = MIN_INFILTRATION;
        }
        let envelope_area = structure.total_wall_area() + structure.total_window_area();
        let q4 = share(q75 * envelope_area, floor_area) * (4.0 as Float / 75.).powf(PRESSURE_EXPONENT);

        let mechanical = match ventilation.ventilation_type {
            VentilationType::Natural => 0.,
            _ => {
                frac_wk_day
                    * supply
                    * (1. - ventilation.exhaust_air_recirculated)
                    * (1. - ventilation.heat_recovery_efficiency)
            }
        };

        let coefficient = |m: usize, interior: Float| -> Float {
            let dt = (solar.monthly_dry_bulb[m] - interior).abs();
            let stack = (STACK_COEFFICIENT * q4 * (stack_height * dt).powf(STACK_EXPONENT))
                .max(MIN_STACK_FLOW);
            let wind_speed = solar.monthly_wind[m];
            let wind = WIND_COEFFICIENT
                * q4
                * (WIND_PRESSURE_DIFFERENCE * parameters.location.terrain * wind_speed * wind_speed)
                    .powf(WIND_EXPONENT);
            let stack_and_wind =
                stack.max(wind) + share(STACK_WIND_COEFFICIENT * stack * wind, q4);
            let infiltration = stack_and_wind + (-supply_exhaust_difference).max(0.);
            (infiltration + mechanical) * AIR_HEAT_CAPACITY / 3600.
        };

        Self {
            infiltration_4pa: q4,
            heating: monthly(|m| coefficient(m, heating_temperature[m])),
            cooling: monthly(|m| coefficient(m, cooling_temperature[m])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Location, Structure, Ventilation};
    use validate::assert_close;

    fn parameters() -> BuildingParameters {
        let mut structure = Structure {
            floor_area: 100.,
            building_height: 3.,
            infiltration_rate: 2.,
            ..Structure::default()
        };
        structure.wall_area[0] = 75.;
        structure.window_area[0] = 25.;
        BuildingParameters {
            structure,
            ventilation: Ventilation {
                ventilation_type: VentilationType::Mechanical,
                supply_rate: 360.,
                heat_recovery_efficiency: 0.5,
                ..Ventilation::default()
            },
            location: Location { terrain: 1. },
            ..BuildingParameters::default()
        }
    }

    #[test]
    fn test_still_air() {
        let p = parameters();
        let mut solar = SolarSummary::default();
        solar.monthly_dry_bulb = [20.; 12];
        let v = VentilationCoefficients::new(&p, &solar, &[20.; 12], &[20.; 12], 0.5);

        let q4 = 2. * (4.0 as Float / 75.).powf(0.65);
        assert_close!(v.infiltration_4pa, q4, 1e-12);

        // No wind and no temperature difference: minimum stack flow
        // plus the mechanical supply (1 m3/h/m2, half the time, half recovered)
        let expected = (0.001 + 0.25) * 1200. / 3600.;
        for m in 0..12 {
            assert_close!(v.heating[m], expected, 1e-12);
            assert_close!(v.cooling[m], expected, 1e-12);
        }
    }

    #[test]
    fn test_natural_and_windy() {
        let mut p = parameters();
        p.ventilation.ventilation_type = VentilationType::Natural;
        let mut solar = SolarSummary::default();
        solar.monthly_dry_bulb = [0.; 12];
        solar.monthly_wind = [5.; 12];

        let v = VentilationCoefficients::new(&p, &solar, &[20.; 12], &[24.; 12], 0.5);
        let calm = VentilationCoefficients::new(
            &p,
            &SolarSummary::default(),
            &[0.; 12],
            &[0.; 12],
            0.5,
        );
        for m in 0..12 {
            assert!(v.heating[m] > calm.heating[m]);
            // Larger temperature difference when cooling
            assert!(v.cooling[m] >= v.heating[m]);
            assert_close!(calm.heating[m], 0.001 * 1200. / 3600., 1e-12);
        }
    }

    #[test]
    fn test_exhaust_driven_infiltration() {
        let mut p = parameters();
        p.ventilation.supply_difference = -360.;
        let solar = SolarSummary::default();
        let v = VentilationCoefficients::new(&p, &solar, &[0.; 12], &[0.; 12], 0.5);
        // One extra m3/h/m2 leaks in
        let expected = (0.001 + 1. + 0.25) * 1200. / 3600.;
        assert_close!(v.heating[0], expected, 1e-12);
    }

    #[test]
    fn test_no_envelope() {
        let mut p = parameters();
        p.structure.wall_area = [0.; 9];
        p.structure.window_area = [0.; 9];
        let v = VentilationCoefficients::new(&p, &SolarSummary::default(), &[0.; 12], &[0.; 12], 0.5);
        assert_eq!(v.infiltration_4pa, 0.);
        assert!(v.heating.iter().all(|h| h.is_finite()));
    }
}
