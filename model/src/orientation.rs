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

use crate::Float;
use serde::{Deserialize, Serialize};

/// Number of orientations considered: eight walls and the roof
pub const N_ORIENTATIONS: usize = 9;

/// One value per [`Orientation`], indexed by [`Orientation::index`]
pub type OrientationValues = [Float; N_ORIENTATIONS];

/// The orientation of an envelope element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Wall facing South
    South,
    /// Wall facing South-East
    SouthEast,
    /// Wall facing East
    East,
    /// Wall facing North-East
    NorthEast,
    /// Wall facing North
    North,
    /// Wall facing North-West
    NorthWest,
    /// Wall facing West
    West,
    /// Wall facing South-West
    SouthWest,
    /// The roof (and skylights)
    Roof,
}

impl Orientation {
    /// All the orientations, in storage order
    pub const ALL: [Orientation; N_ORIENTATIONS] = [
        Orientation::South,
        Orientation::SouthEast,
        Orientation::East,
        Orientation::NorthEast,
        Orientation::North,
        Orientation::NorthWest,
        Orientation::West,
        Orientation::SouthWest,
        Orientation::Roof,
    ];

    /// The position of this orientation in [`OrientationValues`]
    pub fn index(&self) -> usize {
        match self {
            Orientation::South => 0,
            Orientation::SouthEast => 1,
            Orientation::East => 2,
            Orientation::NorthEast => 3,
            Orientation::North => 4,
            Orientation::NorthWest => 5,
            Orientation::West => 6,
            Orientation::SouthWest => 7,
            Orientation::Roof => 8,
        }
    }

    /// Is this the roof?
    pub fn is_roof(&self) -> bool {
        matches!(self, Orientation::Roof)
    }

    /// The suffix used for walls and windows in configuration keys
    /// (e.g., `wallAreaNE`). The roof has none, as it uses its own keys.
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Orientation::South => "S",
            Orientation::SouthEast => "SE",
            Orientation::East => "E",
            Orientation::NorthEast => "NE",
            Orientation::North => "N",
            Orientation::NorthWest => "NW",
            Orientation::West => "W",
            Orientation::SouthWest => "SW",
            Orientation::Roof => "",
        }
    }
}
