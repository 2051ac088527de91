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

//! Solar calculations library. Based on Duffie and Beckman's excellent book.
//!
//! We follow the convention of the book. This means that everything is in
//! international units, and times are solar. Angles (inputs and outputs) are
//! in Radians.
//!
//! Solar azimuth angle is the angular displacement from south of the
//! projection of beam radiation on the horizontal plane (Figure 1.6.1 of the Book).
//! Displacements east of south are negative and west of south are positive.
//!
//! North points in the Y direction. East points in the X direction. Up points in Z.
//!
//! On top of the sun geometry, the [`SolarEngine`] projects a year of hourly
//! weather onto eight vertical walls and a horizontal roof, and summarizes
//! it into the monthly and diurnal averages consumed by monthly
//! energy-balance calculations (see [`SolarSummary`]).

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

#[cfg(feature = "float")]
const PI: Float = std::f32::consts::PI;

#[cfg(not(feature = "float"))]
const PI: Float = std::f64::consts::PI;

mod direction;
pub use crate::direction::Direction;

mod sun;
pub use crate::sun::{Solar, Time};

mod engine;
pub use crate::engine::{SolarEngine, SolarSummary, ToIsoData, N_WALLS, WALL_AZIMUTHS};
