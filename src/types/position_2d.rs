use crate::math::{CrossProduct, Distance, DotProduct, Vector2};

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position2D {
    pub x: f32,
    pub y: f32,
}

impl Position2D {
    /// Creates a new position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a position with every component set to `value`.
    #[must_use]
    pub fn splat(value: f32) -> Self {
        Self::new(value, value)
    }
}

impl_component_ops!(Position2D, "Position2D", 2, [x, y]);

impl Distance for Position2D {
    fn distance_squared(&self, other: &Self) -> f32 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

impl DotProduct for Position2D {
    fn dot_product(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

impl CrossProduct for Position2D {
    type Output = f32;

    fn cross_product(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

impl From<Vector2> for Position2D {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Position2D> for Vector2 {
    fn from(p: Position2D) -> Self {
        Vector2::new(p.x, p.y)
    }
}
