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

//! Heating and cooling need (ISO 13790, 12.2.1) and fan energy.

use crate::simulator::monthly::{div, monthly, share, sum, Monthly, EPS, MEGASECONDS};
use crate::simulator::temperature::InteriorTemperature;
use crate::simulator::ventilation::VentilationCoefficients;
use crate::Float;
use model::BuildingParameters;
use solar::SolarSummary;

/// Reference numerical parameter of the utilization factor
const A_0: Float = 1.;

/// Reference time constant (h) of the utilization factor
const TAU_0: Float = 15.;

/// Difference between supply air and room air (K)
const SUPPLY_AIR_DIFFERENCE: Float = 7.;

/// Density times specific heat of air (MJ/m3K)
const AIR_RHO_C: Float = 1.22521 * 0.001012;

/// Dimensionless parameter of the utilization factor for a
/// building with time constant `tau` (h)
pub(crate) fn utilization_parameter(tau: Float) -> Float {
    A_0 + tau / TAU_0
}

/// Utilization factor `(1 - γ^a)/(1 - γ^(a+1))` of a positive
/// ratio `gamma`.
///
/// It tends to 1 as `gamma` goes to 0, and to `1/gamma` for large
/// ratios. At `gamma == 1` it is `a/(a+1)`.
pub(crate) fn utilization(gamma: Float, a: Float) -> Float {
    debug_assert!(gamma > 0.);
    if a.is_infinite() {
        return if gamma <= 1. { 1. } else { 1. / gamma };
    }
    if gamma == 1. {
        a / (a + 1.)
    } else if gamma < 1. {
        (1. - gamma.powf(a)) / (1. - gamma.powf(a + 1.))
    } else {
        // Same expression, divided through by γ^(a+1) so it
        // does not overflow
        let inv = gamma.powf(-(a + 1.));
        (inv - 1. / gamma) / (inv - 1.)
    }
}

/// Monthly energy need (MJ) and fan energy (kWh/m2)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EnergyNeed {
    /// Internal plus solar gains (MJ)
    pub gains: Monthly,

    /// Heating need
    pub heating: Monthly,

    /// Cooling need
    pub cooling: Monthly,

    /// Fan energy per m2 of floor (kWh/m2)
    pub fans: Monthly,
}

impl EnergyNeed {
    /// Heating need of the year (MJ)
    pub fn heating_year(&self) -> Float {
        sum(&self.heating)
    }

    /// Cooling need of the year (MJ)
    pub fn cooling_year(&self) -> Float {
        sum(&self.cooling)
    }

    /// `h_envelope` is the U·A of the envelope (W/K). Air leaking
    /// through the shell is part of `ventilation`.
    pub fn new(
        parameters: &BuildingParameters,
        solar: &SolarSummary,
        h_envelope: Float,
        internal_gains: Float,
        solar_gains: &Monthly,
        temperature: &InteriorTemperature,
        ventilation: &VentilationCoefficients,
        frac_wk_day: Float,
    ) -> Self {
        let floor_area = parameters.structure.floor_area;
        let a = utilization_parameter(temperature.tau);

        let gains = monthly(|m| MEGASECONDS[m] * internal_gains + solar_gains[m]);

        // Transmission plus ventilation losses (MJ)
        let losses = |m: usize, interior: Float, h_ve: Float| -> Float {
            let dt = interior - solar.monthly_dry_bulb[m];
            dt * MEGASECONDS[m] * h_envelope + h_ve * floor_area * dt * MEGASECONDS[m]
        };

        let heating = monthly(|m| {
            let loss = losses(m, temperature.heating[m], ventilation.heating[m]);
            let gamma = div(gains[m], loss + EPS);
            let eta = if gamma > 0. {
                utilization(gamma, a)
            } else {
                1. / (gamma + EPS)
            };
            (loss - eta * gains[m]).max(0.)
        });

        let cooling = monthly(|m| {
            let loss = losses(m, temperature.cooling[m], ventilation.cooling[m]);
            let gamma = div(loss, gains[m] + EPS);
            let eta = if gamma > 0. { utilization(gamma, a) } else { 1. };
            (gains[m] - eta * loss).max(0.)
        });

        // Air moved by the fans (m3)
        let heating_supply = parameters.heating.temperature_set_point_occupied + SUPPLY_AIR_DIFFERENCE;
        let cooling_supply = parameters.cooling.temperature_set_point_occupied - SUPPLY_AIR_DIFFERENCE;
        let ventilation_params = &parameters.ventilation;
        let fans = monthly(|m| {
            let heating_air = div(
                heating[m],
                (heating_supply - temperature.heating[m]) * AIR_RHO_C + EPS,
            );
            let cooling_air = div(
                cooling[m],
                (temperature.cooling[m] - cooling_supply) * AIR_RHO_C + EPS,
            );
            let fresh_air = MEGASECONDS[m] * ventilation_params.supply_rate * frac_wk_day / 1000.;
            let air = (heating_air + cooling_air).max(fresh_air);
            share(
                air * ventilation_params.fan_power * ventilation_params.fan_control_factor,
                floor_area,
            ) / 3600.
        });

        Self {
            gains,
            heating,
            cooling,
            fans,
        }
    }
}
