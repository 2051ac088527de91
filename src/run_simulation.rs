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

use crate::end_uses::SimulationResult;
use crate::error::SimulationError;
use crate::simulator::MonthlySimulator;
use clap::Parser;
use model::BuildingConfig;
use solar::SolarEngine;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use weather::Weather;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The options we can pass to the simulation
#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct SimOptions {
    /// The building configuration files (key = value text, or JSON).
    /// Each one is simulated independently.
    #[clap(short = 'i', required = true)]
    pub input_files: Vec<PathBuf>,

    /// An EPW weather file to use instead of the one named
    /// in the configuration
    #[clap(short = 'w')]
    pub weather_file: Option<PathBuf>,

    /// Specifies the path to which to write the results.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<PathBuf>,

    /// Logs the intermediate values of the calculation
    #[clap(short = 'v')]
    pub verbose: bool,
}

/// Loads a building configuration and its weather, and simulates it.
///
/// When `weather_file` is given it replaces the weather file named in
/// the configuration.
pub fn simulate_file(
    config_file: &Path,
    weather_file: Option<&Path>,
) -> Result<SimulationResult, SimulationError> {
    let config = BuildingConfig::from_file(config_file)?;
    let weather = match weather_file {
        Some(path) => Weather::from_epw_file(path)?,
        None => config.load_weather()?,
    };
    let solar = SolarEngine::new().summarize(&weather);
    let result = MonthlySimulator::new(&config.parameters)
        .with_weather(&solar)
        .simulate()?;
    info!(
        "'{}' uses {:.3} kWh/m2 per year",
        config_file.display(),
        result.total_energy_use()
    );
    Ok(result)
}

/// Simulates every input file of `options`, in parallel when the
/// `parallel` feature is enabled. Results come back in the same order
/// as the inputs.
pub fn simulate_many(
    options: &SimOptions,
) -> Vec<(PathBuf, Result<SimulationResult, SimulationError>)> {
    let weather_file = options.weather_file.as_deref();

    #[cfg(not(feature = "parallel"))]
    let aux_iter = options.input_files.iter();
    #[cfg(feature = "parallel")]
    let aux_iter = options.input_files.par_iter();

    aux_iter
        .map(|input| (input.clone(), simulate_file(input, weather_file)))
        .collect()
}

/// Runs the simulations requested in `options` and writes their results
/// as CSV into `out`. When there is more than one input, each table
/// is preceded by a line naming its configuration file.
///
/// Every input is attempted; the first failure is returned
/// after the successful results have been written.
pub fn run<W: Write>(options: &SimOptions, mut out: W) -> Result<(), SimulationError> {
    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("<stdout>"));
    let io_err = |source: std::io::Error| SimulationError::Io {
        path: output_path.clone(),
        source,
    };

    let several = options.input_files.len() > 1;
    let mut first_error = None;
    for (input, result) in simulate_many(options) {
        match result {
            Ok(result) => {
                if several {
                    writeln!(out, "# {}", input.display()).map_err(io_err)?;
                }
                result.write_csv(&mut out).map_err(io_err)?;
            }
            Err(e) => {
                error!("Could not simulate '{}': {}", input.display(), e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/***********/
/* TESTING */
/***********/
