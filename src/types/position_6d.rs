use crate::math::Distance;

use super::Position3D;

/// A 6-DOF pose: translation `x, y, z` plus orientation `wx, wy, wz` as a
/// rotation vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position6D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub wx: f32,
    pub wy: f32,
    pub wz: f32,
}

impl Position6D {
    /// Creates a new pose.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, wx: f32, wy: f32, wz: f32) -> Self {
        Self {
            x,
            y,
            z,
            wx,
            wy,
            wz,
        }
    }

    /// Creates a pose with every component set to `value`.
    #[must_use]
    pub fn splat(value: f32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    /// Returns the translation part.
    #[must_use]
    pub fn translation(&self) -> Position3D {
        Position3D::new(self.x, self.y, self.z)
    }
}

impl_component_ops!(Position6D, "Position6D", 6, [x, y, z, wx, wy, wz]);

/// Distances only measure the translation part.
impl Distance for Position6D {
    fn distance_squared(&self, other: &Self) -> f32 {
        self.translation().distance_squared(&other.translation())
    }
}
