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

#![deny(missing_docs)]

//! Buildings and climates for testing the monthly model

use calendar::Calendar;
use model::{
    BuildingParameters, BuildingSystems, Cooling, EnergyCarrier, Heating, Lighting, Location,
    Orientation, Population, Structure, Ventilation, VentilationType,
};
use weather::{Channel, Float, Weather, WeatherChannelSet};

/// Characteristics of the reference building: a single storey
/// office with four facades
pub struct ReferenceBuildingOptions {
    /// Conditioned floor area, in m2
    pub floor_area: Float,

    /// Opaque area of each of the South, East, North and West
    /// facades, in m2
    pub facade_wall_area: Float,

    /// Window area of each facade, in m2
    pub facade_window_area: Float,

    /// U-value of the walls and the roof, in W/m2K
    pub wall_u_value: Float,

    /// U-value of the windows, in W/m2K
    pub window_u_value: Float,

    /// The carrier feeding the heating system
    pub heating_carrier: EnergyCarrier,

    /// Exterior lighting power, in W
    pub exterior_lighting: Float,

    /// Domestic hot water used in a year, in m3
    pub hot_water_demand: Float,
}

impl Default for ReferenceBuildingOptions {
    fn default() -> Self {
        Self {
            floor_area: 1000.,
            facade_wall_area: 90.,
            facade_window_area: 30.,
            wall_u_value: 0.4,
            window_u_value: 2.5,
            heating_carrier: EnergyCarrier::Gas,
            exterior_lighting: 0.,
            hot_water_demand: 0.,
        }
    }
}

/// Builds the parameters of the reference building
pub fn reference_building(options: &ReferenceBuildingOptions) -> BuildingParameters {
    let mut structure = Structure {
        floor_area: options.floor_area,
        building_height: 4.,
        infiltration_rate: 2.,
        interior_heat_capacity: 370000.,
        wall_heat_capacity: 180000.,
        window_shading_device: 1.,
        ..Structure::default()
    };
    for orientation in [
        Orientation::South,
        Orientation::East,
        Orientation::North,
        Orientation::West,
    ] {
        let i = orientation.index();
        structure.wall_area[i] = options.facade_wall_area;
        structure.window_area[i] = options.facade_window_area;
    }
    structure.wall_area[Orientation::Roof.index()] = options.floor_area;
    for orientation in Orientation::ALL {
        let i = orientation.index();
        structure.wall_u_value[i] = options.wall_u_value;
        structure.wall_solar_absorption[i] = 0.6;
        structure.wall_thermal_emissivity[i] = 0.9;
        structure.window_u_value[i] = options.window_u_value;
        structure.window_shgc[i] = 0.5;
        structure.window_shading_correction[i] = 1.;
    }

    BuildingParameters {
        structure,
        heating: Heating {
            temperature_set_point_occupied: 20.,
            temperature_set_point_unoccupied: 15.,
            efficiency: 0.85,
            energy_type: options.heating_carrier,
            hvac_loss_factor: 0.1,
            hot_cold_waste_factor: 0.05,
            pump_control_reduction: 0.5,
            hot_water_demand: options.hot_water_demand,
            hot_water_distribution_efficiency: 0.8,
            hot_water_system_efficiency: 0.9,
            hot_water_energy_type: EnergyCarrier::Electricity,
        },
        cooling: Cooling {
            temperature_set_point_occupied: 24.,
            temperature_set_point_unoccupied: 28.,
            cop: 3.,
            partial_load_value: 1.,
            hvac_loss_factor: 0.1,
            pump_control_reduction: 0.5,
        },
        lighting: Lighting {
            power_density_occupied: 10.,
            power_density_unoccupied: 1.,
            dimming_fraction: 1.,
            exterior_energy: options.exterior_lighting,
        },
        ventilation: Ventilation {
            ventilation_type: VentilationType::Mechanical,
            supply_rate: 1000.,
            supply_difference: 0.,
            heat_recovery_efficiency: 0.,
            exhaust_air_recirculated: 0.,
            fan_power: 1.,
            fan_control_factor: 1.,
            waste_factor: 0.,
        },
        population: Population {
            days_start: 1.,
            days_end: 5.,
            hours_start: 8.,
            hours_end: 18.,
            density_occupied: 10.,
            density_unoccupied: 1000.,
            heat_gain_per_person: 120.,
        },
        building: BuildingSystems {
            building_energy_management: 1.,
            constant_illumination: 1.,
            lighting_occupancy_sensor: 1.,
            electric_appliance_heat_gain_occupied: 10.,
            electric_appliance_heat_gain_unoccupied: 2.,
            gas_appliance_heat_gain_occupied: 0.,
            gas_appliance_heat_gain_unoccupied: 0.,
        },
        location: Location { terrain: 0.9 },
    }
}

/// Characteristics of a synthetic, northern hemisphere climate
pub struct ClimateOptions {
    /// Latitude, in degrees
    pub latitude: Float,

    /// Yearly mean dry bulb temperature, in C
    pub mean_temperature: Float,

    /// Difference between the mean temperatures of July and the
    /// yearly mean, in C
    pub seasonal_amplitude: Float,

    /// Difference between the warmest and coldest hours of a day, in C
    pub daily_swing: Float,

    /// Direct normal radiation with the sun at the zenith, in W/m2
    pub peak_direct_normal: Float,

    /// Wind speed, in m/s
    pub wind_speed: Float,
}

impl Default for ClimateOptions {
    fn default() -> Self {
        Self {
            latitude: 45.,
            mean_temperature: 9.,
            seasonal_amplitude: 13.,
            daily_swing: 8.,
            peak_direct_normal: 850.,
            wind_speed: 3.,
        }
    }
}

/// Sine of the solar altitude at the middle of hour `hour` of the year,
/// with solar time taken as clock time
fn sin_altitude(latitude: Float, hour: usize) -> Float {
    let day = (hour / 24) as Float + 1.;
    let clock = (hour % 24) as Float + 0.5;
    let declination = (23.45 as Float).to_radians()
        * (2. * std::f64::consts::PI as Float * (284. + day) / 365.).sin();
    let hour_angle = (15. * (clock - 12.)).to_radians();
    let latitude = latitude.to_radians();
    latitude.sin() * declination.sin() + latitude.cos() * declination.cos() * hour_angle.cos()
}

/// A year of weather with a cold winter, a warm summer and clear skies
pub fn synthetic_weather(options: &ClimateOptions) -> Weather {
    let two_pi = 2. * std::f64::consts::PI as Float;
    let channels = WeatherChannelSet::from_fn(|channel, hour| {
        let day = (hour / 24) as Float;
        let clock = (hour % 24) as Float;
        // Coldest by mid January, warmest by mid July
        let seasonal = -options.seasonal_amplitude * (two_pi * (day - 15.) / 365.).cos();
        // Warmest by 3pm
        let daily = 0.5 * options.daily_swing * (two_pi * (clock - 14.5) / 24.).cos();
        let dry_bulb = options.mean_temperature + seasonal + daily;

        let sin_alt = sin_altitude(options.latitude, hour).max(0.);
        let direct = if sin_alt > 0. {
            options.peak_direct_normal * sin_alt.powf(0.3)
        } else {
            0.
        };
        let diffuse = 120. * sin_alt;
        match channel {
            Channel::DryBulbTemperature => dry_bulb,
            Channel::DewPointTemperature => dry_bulb - 5.,
            Channel::RelativeHumidity => 70.,
            Channel::GlobalHorizontalRadiation => direct * sin_alt + diffuse,
            Channel::DirectNormalRadiation => direct,
            Channel::DiffuseHorizontalRadiation => diffuse,
            Channel::WindSpeed => options.wind_speed,
        }
    });
    Weather {
        location: weather::Location {
            city: "SYNTHETIC".to_string(),
            country: "XXX".to_string(),
            source: "test_models".to_string(),
            latitude: options.latitude,
            ..weather::Location::default()
        },
        channels,
        n_rows: calendar::N_HOURS_PER_YEAR,
    }
}

/// The same climate as [`synthetic_weather`], with the sun switched off
pub fn dark_weather(options: &ClimateOptions) -> Weather {
    let mut weather = synthetic_weather(options);
    let channels = weather.channels.clone();
    weather.channels = WeatherChannelSet::from_fn(|channel, hour| match channel {
        Channel::GlobalHorizontalRadiation
        | Channel::DirectNormalRadiation
        | Channel::DiffuseHorizontalRadiation => 0.,
        _ => channels.get(channel, hour),
    });
    weather
}

/// Writes a [`Weather`] as the text of an EPW file
pub fn to_epw_string(weather: &Weather) -> String {
    let l = &weather.location;
    let mut ret = format!(
        "LOCATION,{},{},{},{},{},{},{},{},{}\n",
        l.city, l.state, l.country, l.source, l.wmo, l.latitude, l.longitude, l.timezone, l.elevation
    );
    for line in [
        "DESIGN CONDITIONS,0",
        "TYPICAL/EXTREME PERIODS,0",
        "GROUND TEMPERATURES,0",
        "HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0",
        "COMMENTS 1,Synthetic weather",
        "COMMENTS 2,",
        "DATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31",
    ] {
        ret.push_str(line);
        ret.push('\n');
    }

    let calendar = Calendar::new();
    for (hour, stamp) in calendar.iter().enumerate() {
        let mut fields: Vec<String> = vec!["0".to_string(); 35];
        fields[0] = "2001".to_string();
        fields[1] = stamp.month.to_string();
        fields[2] = stamp.day.to_string();
        fields[3] = stamp.hour.to_string();
        fields[4] = "60".to_string();
        fields[5] = "*".to_string();
        for channel in Channel::ALL {
            fields[channel.epw_field()] = format!("{}", weather.channels.get(channel, hour));
        }
        ret.push_str(&fields.join(","));
        ret.push('\n');
    }
    ret
}
