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

use std::path::PathBuf;
use thiserror::Error;
use weather::WeatherError;

/// Something that went wrong when reading or writing a building
/// configuration (or the weather file it points to)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    #[error("Could not access configuration file '{}': {}", .path.display(), .source)]
    Io {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// A JSON configuration could not be deserialized
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration does not say which weather file to use
    #[error("The configuration does not include a 'weatherFilePath'")]
    MissingWeatherFile,

    /// The weather file does not exist, neither as given nor
    /// relative to the configuration file
    #[error("Weather file '{}' not found", .0.display())]
    WeatherFileNotFound(PathBuf),

    /// The weather file exists but could not be read
    #[error(transparent)]
    Weather(#[from] WeatherError),
}
