use crate::math::Vector3;

/// A linear velocity in 3D space.
///
/// Same shape as [`Position3D`](super::Position3D) but deliberately a
/// separate type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity3D {
    pub xd: f32,
    pub yd: f32,
    pub zd: f32,
}

impl Velocity3D {
    /// Creates a new velocity.
    #[must_use]
    pub fn new(xd: f32, yd: f32, zd: f32) -> Self {
        Self { xd, yd, zd }
    }

    /// Creates a velocity with every component set to `value`.
    #[must_use]
    pub fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }
}

impl_component_ops!(Velocity3D, "Velocity3D", 3, [xd, yd, zd]);

impl From<Vector3> for Velocity3D {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Velocity3D> for Vector3 {
    fn from(v: Velocity3D) -> Self {
        Vector3::new(v.xd, v.yd, v.zd)
    }
}
