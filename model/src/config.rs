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

use crate::scanner::ConfigScanner;
use crate::{BuildingParameters, ConfigError, Float};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use weather::Weather;

/// The key holding the path to the weather file
pub(crate) const WEATHER_FILE_KEY: &str = "weatherFilePath";

/// A building description, as read from a configuration file.
///
/// Configuration files are either `key = value` text (see
/// [`BuildingConfig::from_text`]) or JSON, when the file name
/// ends with `.json`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingConfig {
    /// The values describing the building
    #[serde(flatten)]
    pub parameters: BuildingParameters,

    /// The weather file, as written in the configuration
    #[serde(default)]
    pub weather_file: Option<PathBuf>,

    /// The directory holding the configuration file, used
    /// for resolving relative weather paths
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

/// Reads a number the way `atof` would: the longest prefix that
/// makes sense as a number.
fn parse_number(value: &str) -> Option<Float> {
    if let Ok(v) = value.parse::<Float>() {
        return Some(v);
    }
    let end = value
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    (1..=end)
        .rev()
        .find_map(|i| value[..i].parse::<Float>().ok())
}

fn is_json<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

impl BuildingConfig {
    /// Creates a configuration from parameters and a weather file
    pub fn new(parameters: BuildingParameters, weather_file: Option<PathBuf>) -> Self {
        Self {
            parameters,
            weather_file,
            source_dir: None,
        }
    }

    /// Reads `key = value` text.
    ///
    /// Keys are case-insensitive. Blank lines and lines starting with
    /// `#` are ignored. Unknown keys and values that are not numbers
    /// are reported as warnings; the latter are read as `0`.
    pub fn from_text(text: &str) -> Self {
        let mut ret = Self::default();
        for entry in ConfigScanner::new(text).entries() {
            if entry.key.eq_ignore_ascii_case(WEATHER_FILE_KEY) {
                ret.weather_file = Some(PathBuf::from(entry.value));
                continue;
            }

            let value = match parse_number(entry.value) {
                Some(v) => v,
                None => {
                    warn!(
                        "Line {}: value '{}' of '{}' is not a number... using 0",
                        entry.line, entry.value, entry.key
                    );
                    0.0
                }
            };
            if !ret.parameters.set(entry.key, value) {
                warn!(
                    "Line {}: unknown attribute '{}' = '{}'",
                    entry.line, entry.key, entry.value
                );
            }
        }
        ret
    }

    /// Reads a JSON configuration
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a configuration file, remembering its directory
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut ret = if is_json(path) {
            Self::from_json(&text)?
        } else {
            Self::from_text(&text)
        };
        ret.source_dir = path.parent().map(|p| p.to_path_buf());
        debug!("Read building configuration from '{}'", path.display());
        Ok(ret)
    }

    /// Writes the configuration as `key = value` text, in a way that
    /// [`BuildingConfig::from_text`] reads back into the same values.
    pub fn to_text(&self) -> String {
        let mut ret = String::new();
        for (key, value) in self.parameters.entries() {
            ret.push_str(&format!("{} = {}\n", key, value));
        }
        if let Some(w) = &self.weather_file {
            ret.push_str(&format!("{} = {}\n", WEATHER_FILE_KEY, w.display()));
        }
        ret
    }

    /// Saves the configuration to a file: JSON if the name
    /// ends with `.json`, and `key = value` text otherwise.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_text()
        };
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds the weather file. The path is used as written if it
    /// exists; otherwise, it is considered relative to the directory
    /// of the configuration file.
    pub fn resolve_weather_path(&self) -> Result<PathBuf, ConfigError> {
        let weather_file = self
            .weather_file
            .as_ref()
            .ok_or(ConfigError::MissingWeatherFile)?;
        if weather_file.exists() {
            return Ok(weather_file.clone());
        }
        if let Some(dir) = &self.source_dir {
            let candidate = dir.join(weather_file);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(ConfigError::WeatherFileNotFound(weather_file.clone()))
    }

    /// Reads the weather file this configuration points to
    pub fn load_weather(&self) -> Result<Weather, ConfigError> {
        let path = self.resolve_weather_path()?;
        let weather = Weather::from_epw_file(&path)?;
        if !weather.is_complete() {
            warn!(
                "Weather file '{}' has only {} hourly rows",
                path.display(),
                weather.n_rows
            );
        }
        Ok(weather)
    }
}
