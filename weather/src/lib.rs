/*
MIT License
Copyright (c)  Germán Molina
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

//! This library is an [EPW file parser](https://energyplus.net/weather) that
//! keeps only what a monthly building-energy calculation needs: the station
//! [`Location`] and seven hourly channels (dry bulb, dew point, relative
//! humidity, global horizontal, direct normal and diffuse horizontal
//! radiation, and wind speed), each exactly 8760 values long.
//!
//! Parsing is lenient. Numbers that cannot be read become `0.0`, rows beyond
//! the 8760th are ignored, and a short file leaves the remaining hours at
//! zero. Only failing to read the file is an error.
//!
//! ```
//! use weather::{Channel, Weather};
//!
//! let epw = "LOCATION,SANTIAGO,-,CHL,IWEC Data,855740,-33.38,-70.78,-4.0,476.0\n\
//!            DESIGN CONDITIONS,0\nTYPICAL/EXTREME PERIODS,0\nGROUND TEMPERATURES,0\n\
//!            HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0\nCOMMENTS 1,\nCOMMENTS 2,\n\
//!            DATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31\n\
//!            1987,1,1,1,60,*,16.7,9.6,63,95600,0,1415,326,0,0,0,0,0,0,0,150,1.5,0,0,9.9,77777,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\n";
//! let weather = Weather::from_epw_str(epw);
//! assert_eq!(weather.location.city, "SANTIAGO");
//! assert_eq!(weather.n_rows, 1);
//! assert_eq!(weather.channels.channel(Channel::DryBulbTemperature)[0], 16.7);
//! assert_eq!(weather.channels.channel(Channel::WindSpeed).len(), 8760);
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

/// Data associated to a specific Location
pub mod location;
pub use crate::location::Location;

/// The hourly data series of a weather file
pub mod channels;
pub use crate::channels::{Channel, WeatherChannelSet};

/// Errors raised when reading weather
pub mod error;
pub use crate::error::WeatherError;

/// For handling EPW Files
mod epw;
use epw::scanner::EPWScanner;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use calendar::Date;

/// The number of lines at the top of an EPW file that
/// come before the hourly data
pub const EPW_HEADER_LINES: usize = 8;

/// A structure containing a year of hourly weather data
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Weather {
    /// Information about the location of the weather
    ///
    /// This is based on EPW Files information
    pub location: Location,

    /// The hourly data
    pub channels: WeatherChannelSet,

    /// The number of data rows actually found in the source
    /// (at most 8760).
    pub n_rows: usize,
}

impl Weather {
    /// Parses an in-memory EPW record.
    ///
    /// This never fails: see the crate documentation for
    /// how malformed content is handled.
    pub fn from_epw_str(src: &str) -> Self {
        EPWScanner::build_weather(src.as_bytes())
    }

    /// Reads and parses an EPW file
    pub fn from_epw_file<P: AsRef<Path>>(path: P) -> Result<Self, WeatherError> {
        let path = path.as_ref();
        let src = std::fs::read(path).map_err(|source| WeatherError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Read {} bytes of weather from '{}'", src.len(), path.display());
        Ok(EPWScanner::build_weather(&src))
    }

    /// Borrows the series of a certain [`Channel`]
    pub fn channel(&self, channel: Channel) -> &[Float] {
        self.channels.channel(channel)
    }

    /// Checks whether the source had a complete year of data
    pub fn is_complete(&self) -> bool {
        self.n_rows == calendar::N_HOURS_PER_YEAR
    }
}
