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

/// A direction in space. X points East, Y points North and Z points Up.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Direction {
    /// East component
    pub x: Float,
    /// North component
    pub y: Float,
    /// Up component
    pub z: Float,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Direction({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Direction {
    /// Builds a new direction
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// The normal of a surface with a certain azimuth (from South,
    /// West positive) and tilt (from horizontal), both in Radians.
    pub fn surface_normal(azimuth: Float, tilt: Float) -> Self {
        Self {
            x: -azimuth.sin() * tilt.sin(),
            y: -azimuth.cos() * tilt.sin(),
            z: tilt.cos(),
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length
    pub fn length(&self) -> Float {
        self.dot(self).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_normal() {
        let up = Direction::surface_normal(0.0, 0.0);
        validate::assert_close!(up.z, 1.0);
        validate::assert_close!(up.length(), 1.0);

        let south = Direction::surface_normal(0.0, (90. as Float).to_radians());
        validate::assert_close!(south.y, -1.0);
        assert!(south.z.abs() < 1e-6);

        let east = Direction::surface_normal((-90. as Float).to_radians(), (90. as Float).to_radians());
        validate::assert_close!(east.x, 1.0);
        assert!(east.y.abs() < 1e-6);

        let west = Direction::surface_normal((90. as Float).to_radians(), (90. as Float).to_radians());
        validate::assert_close!(west.x, -1.0);
        validate::assert_close!(east.dot(&west), -1.0);
    }
}
