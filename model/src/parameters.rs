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

use crate::{
    BuildingSystems, Cooling, EnergyCarrier, Float, Heating, Lighting, Location, Orientation,
    Population, Structure, Ventilation, VentilationType,
};
use serde::{Deserialize, Serialize};

/// Every group of values describing a building
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingParameters {
    /// Envelope and thermal mass
    pub structure: Structure,

    /// Heating and domestic hot water
    pub heating: Heating,

    /// Cooling
    pub cooling: Cooling,

    /// Lighting
    pub lighting: Lighting,

    /// Ventilation and fans
    pub ventilation: Ventilation,

    /// Occupancy schedule and people
    pub population: Population,

    /// Controls and plug loads
    pub building: BuildingSystems,

    /// Site
    pub location: Location,
}

/// Declares the numeric configuration keys and where
/// each of them is stored.
macro_rules! numeric_keys {
    ($( $key:literal => $($field:ident).+ $([$index:expr])? ),* $(,)?) => {
        /// The numeric keys accepted in `key = value` configuration files,
        /// in the order in which they are written out.
        pub const PARAMETER_KEYS: &[&str] = &[$($key),*];

        impl BuildingParameters {
            fn numeric_slot_mut(&mut self, key: &str) -> Option<&mut Float> {
                $(
                    if key.eq_ignore_ascii_case($key) {
                        return Some(&mut self.$($field).+ $([$index])?);
                    }
                )*
                None
            }

            fn numeric_slot(&self, key: &str) -> Option<Float> {
                $(
                    if key.eq_ignore_ascii_case($key) {
                        return Some(self.$($field).+ $([$index])?);
                    }
                )*
                None
            }
        }
    };
}

const S: usize = 0;
const SE: usize = 1;
const E: usize = 2;
const NE: usize = 3;
const N: usize = 4;
const NW: usize = 5;
const W: usize = 6;
const SW: usize = 7;
const ROOF: usize = 8;

numeric_keys! {
    "terrainClass" => location.terrain,
    "floorArea" => structure.floor_area,
    "buildingHeight" => structure.building_height,
    "buildingOccupancyFrom" => population.days_start,
    "buildingOccupancyTo" => population.days_end,
    "equivFullLoadOccupancyFrom" => population.hours_start,
    "equivFullLoadOccupancyTo" => population.hours_end,
    "peopleDensityOccupied" => population.density_occupied,
    "peopleDensityUnoccupied" => population.density_unoccupied,
    "heatGainPerPerson" => population.heat_gain_per_person,
    "heatingOccupiedSetpoint" => heating.temperature_set_point_occupied,
    "heatingUnoccupiedSetpoint" => heating.temperature_set_point_unoccupied,
    "coolingOccupiedSetpoint" => cooling.temperature_set_point_occupied,
    "coolingUnoccupiedSetpoint" => cooling.temperature_set_point_unoccupied,
    "elecPowerAppliancesOccupied" => building.electric_appliance_heat_gain_occupied,
    "elecPowerAppliancesUnoccupied" => building.electric_appliance_heat_gain_unoccupied,
    "gasPowerAppliancesOccupied" => building.gas_appliance_heat_gain_occupied,
    "gasPowerAppliancesUnoccupied" => building.gas_appliance_heat_gain_unoccupied,
    "lightingPowerIntensityOccupied" => lighting.power_density_occupied,
    "lightingPowerIntensityUnoccupied" => lighting.power_density_unoccupied,
    "exteriorLightingPower" => lighting.exterior_energy,
    "daylightSensorSystem" => lighting.dimming_fraction,
    "lightingOccupancySensorSystem" => building.lighting_occupancy_sensor,
    "constantIlluminationControl" => building.constant_illumination,
    "coolingSystemCOP" => cooling.cop,
    "coolingSystemIPLVToCOPRatio" => cooling.partial_load_value,
    "heatingSystemEfficiency" => heating.efficiency,
    "freshAirFlowRate" => ventilation.supply_rate,
    "supplyExhaustRate" => ventilation.supply_difference,
    "heatRecovery" => ventilation.heat_recovery_efficiency,
    "exhaustAirRecirculation" => ventilation.exhaust_air_recirculated,
    "infiltration" => structure.infiltration_rate,
    "dhwDemand" => heating.hot_water_demand,
    "dhwSystemEfficiency" => heating.hot_water_system_efficiency,
    "dhwDistributionEfficiency" => heating.hot_water_distribution_efficiency,
    "bemType" => building.building_energy_management,
    "interiorHeatCapacity" => structure.interior_heat_capacity,
    "exteriorHeatCapacity" => structure.wall_heat_capacity,
    "specificFanPower" => ventilation.fan_power,
    "fanFlowControlFactor" => ventilation.fan_control_factor,
    "hvacWasteFactor" => heating.hot_cold_waste_factor,
    "hvacHeatingLossFactor" => heating.hvac_loss_factor,
    "hvacCoolingLossFactor" => cooling.hvac_loss_factor,
    "heatingPumpControl" => heating.pump_control_reduction,
    "coolingPumpControl" => cooling.pump_control_reduction,

    "wallAreaS" => structure.wall_area[S],
    "wallAreaSE" => structure.wall_area[SE],
    "wallAreaE" => structure.wall_area[E],
    "wallAreaNE" => structure.wall_area[NE],
    "wallAreaN" => structure.wall_area[N],
    "wallAreaNW" => structure.wall_area[NW],
    "wallAreaW" => structure.wall_area[W],
    "wallAreaSW" => structure.wall_area[SW],
    "roofArea" => structure.wall_area[ROOF],

    "wallUvalueS" => structure.wall_u_value[S],
    "wallUvalueSE" => structure.wall_u_value[SE],
    "wallUvalueE" => structure.wall_u_value[E],
    "wallUvalueNE" => structure.wall_u_value[NE],
    "wallUvalueN" => structure.wall_u_value[N],
    "wallUvalueNW" => structure.wall_u_value[NW],
    "wallUvalueW" => structure.wall_u_value[W],
    "wallUvalueSW" => structure.wall_u_value[SW],
    "roofUValue" => structure.wall_u_value[ROOF],

    "wallSolarAbsorptionS" => structure.wall_solar_absorption[S],
    "wallSolarAbsorptionSE" => structure.wall_solar_absorption[SE],
    "wallSolarAbsorptionE" => structure.wall_solar_absorption[E],
    "wallSolarAbsorptionNE" => structure.wall_solar_absorption[NE],
    "wallSolarAbsorptionN" => structure.wall_solar_absorption[N],
    "wallSolarAbsorptionNW" => structure.wall_solar_absorption[NW],
    "wallSolarAbsorptionW" => structure.wall_solar_absorption[W],
    "wallSolarAbsorptionSW" => structure.wall_solar_absorption[SW],
    "roofSolarAbsorption" => structure.wall_solar_absorption[ROOF],

    "wallThermalEmissivityS" => structure.wall_thermal_emissivity[S],
    "wallThermalEmissivitySE" => structure.wall_thermal_emissivity[SE],
    "wallThermalEmissivityE" => structure.wall_thermal_emissivity[E],
    "wallThermalEmissivityNE" => structure.wall_thermal_emissivity[NE],
    "wallThermalEmissivityN" => structure.wall_thermal_emissivity[N],
    "wallThermalEmissivityNW" => structure.wall_thermal_emissivity[NW],
    "wallThermalEmissivityW" => structure.wall_thermal_emissivity[W],
    "wallThermalEmissivitySW" => structure.wall_thermal_emissivity[SW],
    "roofThermalEmissivity" => structure.wall_thermal_emissivity[ROOF],

    "windowAreaS" => structure.window_area[S],
    "windowAreaSE" => structure.window_area[SE],
    "windowAreaE" => structure.window_area[E],
    "windowAreaNE" => structure.window_area[NE],
    "windowAreaN" => structure.window_area[N],
    "windowAreaNW" => structure.window_area[NW],
    "windowAreaW" => structure.window_area[W],
    "windowAreaSW" => structure.window_area[SW],
    "skylightArea" => structure.window_area[ROOF],

    "windowUvalueS" => structure.window_u_value[S],
    "windowUvalueSE" => structure.window_u_value[SE],
    "windowUvalueE" => structure.window_u_value[E],
    "windowUvalueNE" => structure.window_u_value[NE],
    "windowUvalueN" => structure.window_u_value[N],
    "windowUvalueNW" => structure.window_u_value[NW],
    "windowUvalueW" => structure.window_u_value[W],
    "windowUvalueSW" => structure.window_u_value[SW],
    "skylightUvalue" => structure.window_u_value[ROOF],

    "windowSHGCS" => structure.window_shgc[S],
    "windowSHGCSE" => structure.window_shgc[SE],
    "windowSHGCE" => structure.window_shgc[E],
    "windowSHGCNE" => structure.window_shgc[NE],
    "windowSHGCN" => structure.window_shgc[N],
    "windowSHGCNW" => structure.window_shgc[NW],
    "windowSHGCW" => structure.window_shgc[W],
    "windowSHGCSW" => structure.window_shgc[SW],
    "skylightSHGC" => structure.window_shgc[ROOF],

    "windowSCFS" => structure.window_shading_correction[S],
    "windowSCFSE" => structure.window_shading_correction[SE],
    "windowSCFE" => structure.window_shading_correction[E],
    "windowSCFNE" => structure.window_shading_correction[NE],
    "windowSCFN" => structure.window_shading_correction[N],
    "windowSCFNW" => structure.window_shading_correction[NW],
    "windowSCFW" => structure.window_shading_correction[W],
    "windowSCFSW" => structure.window_shading_correction[SW],

    "windowSDFN" => structure.window_shading_device,
}

/// Keys that are given one of the [`EnergyCarrier`] or
/// [`VentilationType`] numeric codes
pub(crate) const CODED_KEYS: &[&str] =
    &["heatingEnergyCarrier", "dhwEnergyCarrier", "ventilationType"];

/// Keys that are understood but have no effect on the calculation.
/// Only the north shading device factor is used.
pub(crate) const IGNORED_KEYS: &[&str] = &[
    "windowSDFS",
    "windowSDFSE",
    "windowSDFE",
    "windowSDFNE",
    "windowSDFNW",
    "windowSDFW",
    "windowSDFSW",
    "dhwDistributionSystem",
    "roofSHGC",
];

impl BuildingParameters {
    /// Sets the value of a configuration key (case-insensitive).
    ///
    /// Some keys feed more than one value: the north shading correction
    /// factor is also used for skylights, and the HVAC waste factor
    /// applies to both heating and ventilation.
    ///
    /// Returns `false` if the key is not known.
    pub fn set(&mut self, key: &str, value: Float) -> bool {
        if let Some(slot) = self.numeric_slot_mut(key) {
            *slot = value;
            if key.eq_ignore_ascii_case("windowSCFN") {
                self.structure.window_shading_correction[Orientation::Roof.index()] = value;
            } else if key.eq_ignore_ascii_case("hvacWasteFactor") {
                self.ventilation.waste_factor = value;
            }
            return true;
        }

        if key.eq_ignore_ascii_case("heatingEnergyCarrier") {
            self.heating.energy_type = EnergyCarrier::from_code(value);
        } else if key.eq_ignore_ascii_case("dhwEnergyCarrier") {
            self.heating.hot_water_energy_type = EnergyCarrier::from_code(value);
        } else if key.eq_ignore_ascii_case("ventilationType") {
            self.ventilation.ventilation_type = VentilationType::from_code(value);
        } else {
            return IGNORED_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key));
        }
        true
    }

    /// Gets the value stored for a configuration key (case-insensitive).
    /// Coded keys return their numeric code.
    ///
    /// Returns `None` if the key is not known, or if it is ignored.
    pub fn get(&self, key: &str) -> Option<Float> {
        if let Some(v) = self.numeric_slot(key) {
            return Some(v);
        }
        if key.eq_ignore_ascii_case("heatingEnergyCarrier") {
            Some(self.heating.energy_type.code())
        } else if key.eq_ignore_ascii_case("dhwEnergyCarrier") {
            Some(self.heating.hot_water_energy_type.code())
        } else if key.eq_ignore_ascii_case("ventilationType") {
            Some(self.ventilation.ventilation_type.code())
        } else {
            None
        }
    }

    /// Iterates over every `(key, value)` pair that can be written
    /// to a configuration file
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Float)> + '_ {
        PARAMETER_KEYS
            .iter()
            .chain(CODED_KEYS.iter())
            .filter_map(move |key| self.get(key).map(|v| (*key, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut all: Vec<String> = PARAMETER_KEYS
            .iter()
            .chain(CODED_KEYS.iter())
            .chain(IGNORED_KEYS.iter())
            .map(|k| k.to_ascii_lowercase())
            .collect();
        let n = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), n);
    }

    #[test]
    fn test_every_key_is_settable() {
        let mut p = BuildingParameters::default();
        for (i, key) in PARAMETER_KEYS.iter().enumerate() {
            let v = i as Float + 1.;
            assert!(p.set(key, v), "could not set '{}'", key);
            assert_eq!(p.get(key), Some(v), "wrong value in '{}'", key);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let mut p = BuildingParameters::default();
        assert!(p.set("FLOORAREA", 12.));
        assert_eq!(p.structure.floor_area, 12.);
        assert!(p.set("roofuvalue", 0.2));
        assert_eq!(p.structure.wall_u_value[Orientation::Roof.index()], 0.2);
        assert_eq!(p.get("RoofUValue"), Some(0.2));
    }

    #[test]
    fn test_shared_values() {
        let mut p = BuildingParameters::default();
        p.set("windowSCFN", 0.7);
        let scf = &p.structure.window_shading_correction;
        assert_eq!(scf[Orientation::North.index()], 0.7);
        assert_eq!(scf[Orientation::Roof.index()], 0.7);

        p.set("hvacWasteFactor", 0.3);
        assert_eq!(p.heating.hot_cold_waste_factor, 0.3);
        assert_eq!(p.ventilation.waste_factor, 0.3);
    }

    #[test]
    fn test_coded_keys() {
        let mut p = BuildingParameters::default();
        assert!(p.set("heatingEnergyCarrier", 2.));
        assert_eq!(p.heating.energy_type, EnergyCarrier::Gas);
        assert!(p.set("dhwEnergyCarrier", 1.));
        assert_eq!(p.heating.hot_water_energy_type, EnergyCarrier::Electricity);
        assert!(p.set("ventilationType", 3.));
        assert_eq!(p.ventilation.ventilation_type, VentilationType::Natural);
        assert_eq!(p.get("ventilationType"), Some(3.));
    }

    #[test]
    fn test_unknown_and_ignored() {
        let mut p = BuildingParameters::default();
        assert!(!p.set("numberOfUnicorns", 3.));
        assert!(p.get("numberOfUnicorns").is_none());

        assert!(p.set("windowSDFE", 3.));
        assert!(p.get("windowSDFE").is_none());
        assert_eq!(p, BuildingParameters::default());
    }

    #[test]
    fn test_entries() {
        let p = BuildingParameters::default();
        assert_eq!(
            p.entries().count(),
            PARAMETER_KEYS.len() + CODED_KEYS.len()
        );
    }
}
