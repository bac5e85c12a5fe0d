use crate::math::{near_all, NearEq};

/// Scalar joint state: position `q` and velocity `dq`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionAndVelocity {
    pub q: f32,
    pub dq: f32,
}

impl PositionAndVelocity {
    /// Creates a new joint state.
    #[must_use]
    pub fn new(q: f32, dq: f32) -> Self {
        Self { q, dq }
    }

    /// Returns `[q, dq]`.
    #[must_use]
    pub fn to_array(&self) -> [f32; 2] {
        [self.q, self.dq]
    }
}

impl NearEq for PositionAndVelocity {
    fn is_near_within(&self, other: &Self, epsilon: f32) -> bool {
        near_all(self.to_array(), other.to_array(), epsilon)
    }
}
