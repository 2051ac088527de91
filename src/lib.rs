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

//! A monthly building energy model after ISO 13790.
//!
//! A building is described by a [`BuildingParameters`] (usually read
//! through a [`BuildingConfig`]) and its climate by an EPW
//! [`Weather`] file, which a [`SolarEngine`] condenses into a
//! [`SolarSummary`]. The [`MonthlySimulator`] then estimates, for
//! each month, the energy delivered to the building by carrier and
//! end use, in kWh per m2 of floor.
//!
//! ```no_run
//! use isomodel::{BuildingConfig, MonthlySimulator, SolarEngine};
//!
//! # fn main() -> Result<(), isomodel::SimulationError> {
//! let config = BuildingConfig::from_file("building.ism")?;
//! let weather = config.load_weather()?;
//! let solar = SolarEngine::new().summarize(&weather);
//! let result = MonthlySimulator::new(&config.parameters)
//!     .with_weather(&solar)
//!     .simulate()?;
//! println!("{} kWh/m2", result.total_energy_use());
//! # Ok(())
//! # }
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// Energy use by carrier and category
pub mod end_uses;
pub use end_uses::{EndUseCategory, EndUseSnapshot, SimulationResult};

/// Errors that stop a simulation
pub mod error;
pub use error::SimulationError;

mod simulator;
pub use simulator::MonthlySimulator;

/// A module with some useful functions to run a simulation
pub mod run_simulation;

// Re-exports
pub use calendar::Calendar;
pub use model::{BuildingConfig, BuildingParameters, ConfigError, EnergyCarrier};
pub use solar::{SolarEngine, SolarSummary};
pub use weather::{Weather, WeatherError};
