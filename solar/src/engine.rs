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

use crate::{Direction, Float, Solar, Time};
use calendar::{Calendar, N_DAYS_PER_MONTH, N_MONTHS};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use weather::{Channel, Weather};

/// Number of vertical walls considered
pub const N_WALLS: usize = 8;

/// Azimuth (degrees from South, West positive) of the eight walls, in
/// the order S, SE, E, NE, N, NW, W, SW.
pub const WALL_AZIMUTHS: [Float; N_WALLS] = [0., -45., -90., -135., 180., 135., 90., 45.];

/// Monthly and diurnal summary of a year of weather, as needed by
/// a monthly energy balance.
///
/// All the radiation values are mean irradiances (W/m2), averaged over
/// every hour of the month (night included).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SolarSummary {
    /// Mean irradiance on each of the eight walls (see [`WALL_AZIMUTHS`])
    pub monthly_surface_radiation: [[Float; N_WALLS]; N_MONTHS],

    /// Mean irradiance on a horizontal roof
    pub monthly_roof_radiation: [Float; N_MONTHS],

    /// Mean dry bulb temperature (C) of each hour of the day
    pub hourly_dry_bulb: [[Float; 24]; N_MONTHS],

    /// Mean global horizontal irradiance of each hour of the day
    pub hourly_global_horizontal: [[Float; 24]; N_MONTHS],

    /// Mean dry bulb temperature (C)
    pub monthly_dry_bulb: [Float; N_MONTHS],

    /// Mean wind speed (m/s)
    pub monthly_wind: [Float; N_MONTHS],

    /// Mean global horizontal irradiance
    pub monthly_global_horizontal: [Float; N_MONTHS],
}

/// Projects hourly weather onto the building surfaces.
///
/// Beam radiation is projected through the cosine of the angle of
/// incidence (zero when the sun is behind the surface). Sky diffuse and
/// ground reflected radiation follow an isotropic sky. Nothing is
/// received while the sun is below the horizon.
#[derive(Debug, Clone, Copy)]
pub struct SolarEngine {
    /// Reflectance of the ground (albedo) seen by the walls
    pub ground_reflectance: Float,

    /// Tilt of the walls, in degrees from the horizontal
    pub wall_tilt: Float,
}

impl std::default::Default for SolarEngine {
    fn default() -> Self {
        Self {
            ground_reflectance: 0.2,
            wall_tilt: 90.,
        }
    }
}

impl SolarEngine {
    /// Creates an engine with the default ground reflectance (0.2)
    /// and vertical walls
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ground reflectance
    pub fn with_ground_reflectance(mut self, ground_reflectance: Float) -> Self {
        self.ground_reflectance = ground_reflectance;
        self
    }

    /// Sets the tilt of the walls (degrees). `90` is vertical and
    /// `0` makes every wall face the sky like the roof.
    pub fn with_wall_tilt(mut self, wall_tilt: Float) -> Self {
        self.wall_tilt = wall_tilt;
        self
    }

    /// Total irradiance on a surface with `normal`
    fn incident(
        &self,
        sun: &Direction,
        normal: &Direction,
        direct_normal: Float,
        diffuse_horizontal: Float,
        global_horizontal: Float,
    ) -> Float {
        let cos_theta = sun.dot(normal).max(0.0);
        let cos_tilt = normal.z;
        let beam = direct_normal * cos_theta;
        let sky = diffuse_horizontal * (1. + cos_tilt) / 2.;
        let ground = global_horizontal * self.ground_reflectance * (1. - cos_tilt) / 2.;
        (beam + sky + ground).max(0.0)
    }

    /// Summarizes a year of weather
    #[instrument(skip_all)]
    pub fn summarize(&self, weather: &Weather) -> SolarSummary {
        let solar = Solar::from(&weather.location);
        let calendar = Calendar::new();

        let tilt = self.wall_tilt.to_radians();
        let walls: [Direction; N_WALLS] = std::array::from_fn(|i| {
            Direction::surface_normal(WALL_AZIMUTHS[i].to_radians(), tilt)
        });
        let roof = Direction::new(0., 0., 1.);

        let dry_bulb = weather.channel(Channel::DryBulbTemperature);
        let global = weather.channel(Channel::GlobalHorizontalRadiation);
        let direct = weather.channel(Channel::DirectNormalRadiation);
        let diffuse = weather.channel(Channel::DiffuseHorizontalRadiation);
        let wind = weather.channel(Channel::WindSpeed);

        let mut ret = SolarSummary::default();
        for (i, stamp) in calendar.iter().enumerate() {
            let m = stamp.month_index();
            let h = stamp.hour_index();

            ret.hourly_dry_bulb[m][h] += dry_bulb[i];
            ret.hourly_global_horizontal[m][h] += global[i];
            ret.monthly_dry_bulb[m] += dry_bulb[i];
            ret.monthly_wind[m] += wind[i];
            ret.monthly_global_horizontal[m] += global[i];

            let n = Time::Standard(stamp.midpoint().day_of_year());
            if let Some(sun) = solar.sun_position(n) {
                for (s, normal) in walls.iter().enumerate() {
                    ret.monthly_surface_radiation[m][s] +=
                        self.incident(&sun, normal, direct[i], diffuse[i], global[i]);
                }
                ret.monthly_roof_radiation[m] +=
                    self.incident(&sun, &roof, direct[i], diffuse[i], global[i]);
            }
        }

        for (m, n_days) in N_DAYS_PER_MONTH.iter().enumerate() {
            let days = *n_days as Float;
            let hours = days * 24.;
            for h in 0..24 {
                ret.hourly_dry_bulb[m][h] /= days;
                ret.hourly_global_horizontal[m][h] /= days;
            }
            for s in 0..N_WALLS {
                ret.monthly_surface_radiation[m][s] /= hours;
            }
            ret.monthly_roof_radiation[m] /= hours;
            ret.monthly_dry_bulb[m] /= hours;
            ret.monthly_wind[m] /= hours;
            ret.monthly_global_horizontal[m] /= hours;
        }

        debug!(
            "Summarized weather of '{}': monthly dry bulb = {:?}",
            weather.location.city, ret.monthly_dry_bulb
        );
        ret
    }
}

/// Something that can be summarized into a [`SolarSummary`]
pub trait ToIsoData {
    /// Produces the monthly and diurnal summary
    fn to_iso_data(&self) -> SolarSummary;
}

impl ToIsoData for Weather {
    fn to_iso_data(&self) -> SolarSummary {
        SolarEngine::default().summarize(self)
    }
}
