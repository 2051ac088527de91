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

use crate::error::WeatherError;
use crate::Float;
use calendar::N_HOURS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// The hourly series kept from a weather file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Dry bulb temperature (C)
    DryBulbTemperature,
    /// Dew point temperature (C)
    DewPointTemperature,
    /// Relative humidity (%)
    RelativeHumidity,
    /// Global horizontal radiation (W/m2)
    GlobalHorizontalRadiation,
    /// Direct normal radiation (W/m2)
    DirectNormalRadiation,
    /// Diffuse horizontal radiation (W/m2)
    DiffuseHorizontalRadiation,
    /// Wind speed (m/s)
    WindSpeed,
}

/// Number of [`Channel`] variants
pub const N_CHANNELS: usize = 7;

impl Channel {
    /// All the channels, in storage order
    pub const ALL: [Channel; N_CHANNELS] = [
        Channel::DryBulbTemperature,
        Channel::DewPointTemperature,
        Channel::RelativeHumidity,
        Channel::GlobalHorizontalRadiation,
        Channel::DirectNormalRadiation,
        Channel::DiffuseHorizontalRadiation,
        Channel::WindSpeed,
    ];

    /// Storage position of this channel
    pub fn index(&self) -> usize {
        match self {
            Channel::DryBulbTemperature => 0,
            Channel::DewPointTemperature => 1,
            Channel::RelativeHumidity => 2,
            Channel::GlobalHorizontalRadiation => 3,
            Channel::DirectNormalRadiation => 4,
            Channel::DiffuseHorizontalRadiation => 5,
            Channel::WindSpeed => 6,
        }
    }

    /// The (zero-based) field of an EPW data line holding this channel
    pub fn epw_field(&self) -> usize {
        match self {
            Channel::DryBulbTemperature => 6,
            Channel::DewPointTemperature => 7,
            Channel::RelativeHumidity => 8,
            Channel::GlobalHorizontalRadiation => 13,
            Channel::DirectNormalRadiation => 14,
            Channel::DiffuseHorizontalRadiation => 15,
            Channel::WindSpeed => 21,
        }
    }
}

/// Seven hourly series, each exactly 8760 values long.
///
/// Hours that were not present in the source are zero. Deserializing
/// a set whose series are not 8760 values long fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawChannelSet")]
pub struct WeatherChannelSet {
    channels: [Vec<Float>; N_CHANNELS],
}

#[derive(Deserialize)]
struct RawChannelSet {
    channels: [Vec<Float>; N_CHANNELS],
}

impl TryFrom<RawChannelSet> for WeatherChannelSet {
    type Error = WeatherError;

    fn try_from(raw: RawChannelSet) -> Result<Self, Self::Error> {
        if let Some((channel, series)) = raw
            .channels
            .iter()
            .enumerate()
            .find(|(_, series)| series.len() != N_HOURS_PER_YEAR)
        {
            return Err(WeatherError::ChannelLength {
                channel,
                len: series.len(),
                expected: N_HOURS_PER_YEAR,
            });
        }
        Ok(Self {
            channels: raw.channels,
        })
    }
}

impl std::default::Default for WeatherChannelSet {
    fn default() -> Self {
        Self {
            channels: std::array::from_fn(|_| vec![0.0; N_HOURS_PER_YEAR]),
        }
    }
}

impl WeatherChannelSet {
    /// Builds a full year of data by evaluating `f(channel, hour)`
    /// for every channel and every hour (`0..8760`).
    ///
    /// ```
    /// use weather::{Channel, Float, WeatherChannelSet};
    ///
    /// let set = WeatherChannelSet::from_fn(|channel, hour| match channel {
    ///     Channel::DryBulbTemperature => (hour % 24) as Float,
    ///     _ => 0.0,
    /// });
    /// assert_eq!(set.get(Channel::DryBulbTemperature, 25), 1.0);
    /// ```
    pub fn from_fn<F: Fn(Channel, usize) -> Float>(f: F) -> Self {
        Self {
            channels: std::array::from_fn(|i| {
                let channel = Channel::ALL[i];
                (0..N_HOURS_PER_YEAR).map(|hour| f(channel, hour)).collect()
            }),
        }
    }

    /// Borrows the series of a [`Channel`]
    pub fn channel(&self, channel: Channel) -> &[Float] {
        &self.channels[channel.index()]
    }

    /// Value of `channel` at hour `hour` (0..8760)
    pub fn get(&self, channel: Channel, hour: usize) -> Float {
        self.channels[channel.index()][hour]
    }

    pub(crate) fn set(&mut self, channel: Channel, hour: usize, value: Float) {
        self.channels[channel.index()][hour] = value;
    }
}
