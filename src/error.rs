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

use model::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use weather::WeatherError;

/// Something that prevents a simulation from running or
/// its results from being written
#[derive(Debug, Error)]
pub enum SimulationError {
    /// `simulate()` was called before any weather was bound
    #[error("Cannot simulate: no weather data has been supplied")]
    MissingWeather,

    /// The building configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The weather file could not be loaded
    #[error(transparent)]
    Weather(#[from] WeatherError),

    /// The results could not be written
    #[error("Could not write results to '{}': {}", .path.display(), .source)]
    Io {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },
}
