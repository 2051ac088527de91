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

/// The occupancy schedule and the people in the building.
///
/// Days are counted within the week, from 0 (Sunday) to 6; a
/// `days_end` smaller than `days_start` wraps around the week. Hours
/// are clock hours; a `hours_end` smaller than `hours_start` wraps
/// around midnight.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Population {
    /// First occupied day of the week
    pub days_start: Float,

    /// Last occupied day of the week
    pub days_end: Float,

    /// Hour at which the occupied period starts
    pub hours_start: Float,

    /// Hour at which the occupied period ends
    pub hours_end: Float,

    /// Floor area per person while occupied (m2/person)
    pub density_occupied: Float,

    /// Floor area per person while unoccupied (m2/person)
    pub density_unoccupied: Float,

    /// Sensible heat gain per person (W/person)
    pub heat_gain_per_person: Float,
}
