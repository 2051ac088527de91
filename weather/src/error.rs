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

use std::path::PathBuf;
use thiserror::Error;

/// Something that went wrong when reading weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The weather file could not be read
    #[error("Could not read weather file '{}': {}", .path.display(), .source)]
    Io {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// A channel does not hold one value per hour of the year
    #[error("Weather channel {channel} has {len} values, expected {expected}")]
    ChannelLength {
        /// Storage position of the channel
        channel: usize,
        /// Number of values found
        len: usize,
        /// Number of values required
        expected: usize,
    },
}
