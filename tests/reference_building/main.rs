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

use isomodel::run_simulation::{run, simulate_file, SimOptions};
use isomodel::{
    BuildingConfig, BuildingParameters, EndUseCategory, EnergyCarrier, Float, MonthlySimulator,
    SimulationError, SimulationResult, SolarEngine, Weather,
};
use std::path::PathBuf;
use test_models::*;
use validate::assert_close;

fn simulate(
    parameters: &BuildingParameters,
    weather: &Weather,
) -> Result<SimulationResult, SimulationError> {
    let solar = SolarEngine::new().summarize(weather);
    MonthlySimulator::new(parameters)
        .with_weather(&solar)
        .simulate()
}

fn reference() -> Result<SimulationResult, SimulationError> {
    let parameters = reference_building(&ReferenceBuildingOptions::default());
    let weather = synthetic_weather(&ClimateOptions::default());
    simulate(&parameters, &weather)
}

fn monthly(result: &SimulationResult, carrier: EnergyCarrier, category: EndUseCategory) -> Vec<Float> {
    result.monthly.iter().map(|s| s.get(carrier, category)).collect()
}

#[test]
fn nonnegative_and_consistent() -> Result<(), SimulationError> {
    let result = reference()?;

    let mut sum = 0.;
    for snapshot in result.monthly.iter() {
        for (carrier, category, value) in snapshot.iter() {
            assert!(
                value >= 0. && value.is_finite(),
                "{:?} {:?} = {}",
                carrier,
                category,
                value
            );
            sum += value;
        }
    }
    assert!(result.total_energy_use() > 0.);
    assert_close!(result.total_energy_use(), sum, 1e-9);

    let by_month: Float = (0..12).map(|m| result.monthly_total(m)).sum();
    assert_close!(result.total_energy_use(), by_month, 1e-9);
    Ok(())
}

#[test]
fn gas_heating_season() -> Result<(), SimulationError> {
    let result = reference()?;

    let electricity = monthly(&result, EnergyCarrier::Electricity, EndUseCategory::Heating);
    assert!(electricity.iter().all(|v| *v == 0.));

    let gas = monthly(&result, EnergyCarrier::Gas, EndUseCategory::Heating);
    assert!(gas[0] > 0.);
    assert!(gas[11] > 0.);
    // Less heating towards the summer...
    assert!(gas[0] > gas[2]);
    assert!(gas[0] > gas[6]);
    // ... and more towards the winter
    assert!(gas[11] > gas[8]);
    assert!(gas[11] > gas[6]);
    Ok(())
}

#[test]
fn cooling_peaks_in_summer() -> Result<(), SimulationError> {
    let result = reference()?;
    let cooling = monthly(&result, EnergyCarrier::Electricity, EndUseCategory::Cooling);

    let summer = cooling[5].max(cooling[6]);
    assert!(summer > 0.);
    assert!(summer > cooling[0]);
    assert!(summer > cooling[11]);
    assert!(cooling[6] > cooling[3]);
    assert!(cooling[6] > cooling[9]);

    let gas = monthly(&result, EnergyCarrier::Gas, EndUseCategory::Cooling);
    assert!(gas.iter().all(|v| *v == 0.));
    Ok(())
}

#[test]
fn interior_lights_follow_month_length() -> Result<(), SimulationError> {
    let result = reference()?;
    let lights = monthly(&result, EnergyCarrier::Electricity, EndUseCategory::InteriorLights);
    let per_day: Vec<Float> = lights
        .iter()
        .enumerate()
        .map(|(m, v)| v / calendar_days(m))
        .collect();
    for v in per_day.iter() {
        assert!(*v > 0.);
        assert_close!(*v, per_day[0], 1e-9);
    }
    Ok(())
}

fn calendar_days(month: usize) -> Float {
    [31., 28., 31., 30., 31., 30., 31., 31., 30., 31., 30., 31.][month]
}

#[test]
fn nothing_configured_uses_nothing() -> Result<(), SimulationError> {
    let result = reference()?;
    for carrier in [EnergyCarrier::Electricity, EnergyCarrier::Gas] {
        for category in [EndUseCategory::ExteriorLights, EndUseCategory::WaterSystems] {
            assert_eq!(result.total_by(carrier, category), 0.);
        }
    }

    let parameters = reference_building(&ReferenceBuildingOptions {
        exterior_lighting: 2000.,
        hot_water_demand: 500.,
        ..ReferenceBuildingOptions::default()
    });
    let result = simulate(&parameters, &synthetic_weather(&ClimateOptions::default()))?;
    let exterior = monthly(&result, EnergyCarrier::Electricity, EndUseCategory::ExteriorLights);
    // Longer nights in winter
    assert!(exterior[11] > exterior[5]);
    assert!(result.total_by(EnergyCarrier::Electricity, EndUseCategory::WaterSystems) > 0.);
    assert_eq!(
        result.total_by(EnergyCarrier::Gas, EndUseCategory::WaterSystems),
        0.
    );
    Ok(())
}

#[test]
fn electric_heating() -> Result<(), SimulationError> {
    let parameters = reference_building(&ReferenceBuildingOptions {
        heating_carrier: EnergyCarrier::Electricity,
        ..ReferenceBuildingOptions::default()
    });
    let result = simulate(&parameters, &synthetic_weather(&ClimateOptions::default()))?;
    let reference = reference()?;

    assert_eq!(result.total_by(EnergyCarrier::Gas, EndUseCategory::Heating), 0.);
    assert_close!(
        result.total_by(EnergyCarrier::Electricity, EndUseCategory::Heating),
        reference.total_by(EnergyCarrier::Gas, EndUseCategory::Heating),
        1e-9
    );
    Ok(())
}

#[test]
fn no_envelope() -> Result<(), SimulationError> {
    let mut parameters = reference_building(&ReferenceBuildingOptions::default());
    parameters.structure.wall_area = [0.; 9];
    parameters.structure.window_area = [0.; 9];
    let result = simulate(&parameters, &synthetic_weather(&ClimateOptions::default()))?;

    // Only the air leaking through the shell is lost
    for snapshot in result.monthly.iter() {
        for (_, _, value) in snapshot.iter() {
            assert!(value >= 0. && value.is_finite());
        }
    }
    assert!(result.total_energy_use() > 0.);
    Ok(())
}

#[test]
fn dark_climate() -> Result<(), SimulationError> {
    let parameters = reference_building(&ReferenceBuildingOptions::default());
    let dark = simulate(&parameters, &dark_weather(&ClimateOptions::default()))?;
    let bright = reference()?;

    // Without sun there is more to heat and less to cool
    assert!(
        dark.total_by(EnergyCarrier::Gas, EndUseCategory::Heating)
            > bright.total_by(EnergyCarrier::Gas, EndUseCategory::Heating)
    );
    assert!(
        dark.total_by(EnergyCarrier::Electricity, EndUseCategory::Cooling)
            < bright.total_by(EnergyCarrier::Electricity, EndUseCategory::Cooling)
    );
    Ok(())
}

#[test]
fn missing_weather() {
    let parameters = reference_building(&ReferenceBuildingOptions::default());
    let result = MonthlySimulator::new(&parameters).simulate();
    assert!(matches!(result, Err(SimulationError::MissingWeather)));
}

#[test]
fn idempotent() -> Result<(), SimulationError> {
    let parameters = reference_building(&ReferenceBuildingOptions::default());
    let solar = SolarEngine::new().summarize(&synthetic_weather(&ClimateOptions::default()));
    let simulator = MonthlySimulator::new(&parameters).with_weather(&solar);
    let first = simulator.simulate()?;
    let second = simulator.simulate()?;
    for (a, b) in first.monthly.iter().zip(second.monthly.iter()) {
        for ((_, _, x), (_, _, y)) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
    Ok(())
}

#[test]
fn from_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let weather = synthetic_weather(&ClimateOptions::default());
    std::fs::write(dir.path().join("weather.epw"), to_epw_string(&weather))?;

    let parameters = reference_building(&ReferenceBuildingOptions::default());
    let config = BuildingConfig::new(parameters.clone(), Some(PathBuf::from("weather.epw")));
    let config_file = dir.path().join("building.ism");
    config.save(&config_file)?;

    let from_files = simulate_file(&config_file, None)?;
    let direct = simulate(&parameters, &weather)?;
    assert_close!(
        from_files.total_energy_use(),
        direct.total_energy_use(),
        1e-6
    );

    // The weather given explicitly wins over the configured one
    let dark_file = dir.path().join("dark.epw");
    std::fs::write(&dark_file, to_epw_string(&dark_weather(&ClimateOptions::default())))?;
    let dark = simulate_file(&config_file, Some(&dark_file))?;
    assert!(
        dark.total_by(EnergyCarrier::Gas, EndUseCategory::Heating)
            > direct.total_by(EnergyCarrier::Gas, EndUseCategory::Heating)
    );
    Ok(())
}

#[test]
fn several_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let weather_file = dir.path().join("weather.epw");
    std::fs::write(
        &weather_file,
        to_epw_string(&synthetic_weather(&ClimateOptions::default())),
    )?;

    let mut input_files = Vec::new();
    for (name, floor_area) in [("small.ism", 200.), ("large.json", 2000.)] {
        let parameters = reference_building(&ReferenceBuildingOptions {
            floor_area,
            ..ReferenceBuildingOptions::default()
        });
        let path = dir.path().join(name);
        BuildingConfig::new(parameters, None).save(&path)?;
        input_files.push(path);
    }

    let options = SimOptions {
        input_files,
        weather_file: Some(weather_file),
        ..SimOptions::default()
    };
    let mut out: Vec<u8> = Vec::new();
    run(&options, &mut out)?;

    let text = String::from_utf8(out)?;
    let titles: Vec<&str> = text.lines().filter(|l| l.starts_with("# ")).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles[0].ends_with("small.ism"));
    assert!(titles[1].ends_with("large.json"));
    assert_eq!(text.lines().filter(|l| l.starts_with("Total,")).count(), 2);
    Ok(())
}
