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

//! This crate contains the data structure utilized for describing a
//! building to a monthly (ISO 13790 style) energy calculation.
//!
//! The description is split into independent groups of plain values
//! ([`Structure`], [`Heating`], [`Cooling`], [`Lighting`], [`Ventilation`],
//! [`Population`], [`BuildingSystems`] and [`Location`]), bundled
//! together in [`BuildingParameters`]. None of these groups validate
//! their values: a zero U-value with a non-zero area is legal, just
//! physically odd.
//!
//! Values that vary with the orientation are stored as
//! [`OrientationValues`]: nine numbers, ordered S, SE, E, NE, N, NW, W, SW
//! and roof (see [`Orientation`]).
//!
//! A [`BuildingConfig`] reads and writes these parameters as
//! `key = value` text files (or JSON), together with the path of the
//! weather file to simulate with.
//!
//! ```
//! use model::{BuildingConfig, Orientation};
//!
//! let config = BuildingConfig::from_text(
//!     "# A small office\n\
//!      floorArea = 120\n\
//!      wallAreaS = 30.5\n\
//!      roofUValue = 0.3\n\
//!      weatherFilePath = wellington.epw\n",
//! );
//! let p = &config.parameters;
//! assert_eq!(p.structure.floor_area, 120.);
//! assert_eq!(p.structure.wall_area[Orientation::South.index()], 30.5);
//! assert_eq!(p.structure.wall_u_value[Orientation::Roof.index()], 0.3);
//! assert!(config.weather_file.is_some());
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

mod orientation;
pub use crate::orientation::{Orientation, OrientationValues, N_ORIENTATIONS};

mod structure;
pub use crate::structure::Structure;

mod systems;
pub use crate::systems::{Cooling, EnergyCarrier, Heating, Ventilation, VentilationType};

mod lighting;
pub use crate::lighting::Lighting;

mod population;
pub use crate::population::Population;

mod building;
pub use crate::building::BuildingSystems;

mod site;
pub use crate::site::Location;

mod parameters;
pub use crate::parameters::{BuildingParameters, PARAMETER_KEYS};

mod scanner;

mod config;
pub use crate::config::BuildingConfig;

mod error;
pub use crate::error::ConfigError;
