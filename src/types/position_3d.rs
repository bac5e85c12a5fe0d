use crate::math::{CrossProduct, Distance, DotProduct, Vector3};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position3D {
    /// Creates a new position.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a position with every component set to `value`.
    #[must_use]
    pub fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }
}

impl_component_ops!(Position3D, "Position3D", 3, [x, y, z]);

impl Distance for Position3D {
    fn distance_squared(&self, other: &Self) -> f32 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2)
    }
}

impl DotProduct for Position3D {
    fn dot_product(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl CrossProduct for Position3D {
    type Output = Self;

    fn cross_product(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl From<Vector3> for Position3D {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position3D> for Vector3 {
    fn from(p: Position3D) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}
