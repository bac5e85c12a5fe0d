//! `approx` comparisons for every value type, component-wise over the
//! flat layout.

use approx::{AbsDiffEq, RelativeEq};

use crate::types::{
    Position2D, Position3D, Position6D, PositionAndVelocity, Rotation, Rotation2D, Velocity3D,
};

macro_rules! impl_approx {
    ($($ty:ty),+ $(,)?) => {$(
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    )+};
}

impl_approx!(
    Position2D,
    Position3D,
    Position6D,
    PositionAndVelocity,
    Rotation,
    Rotation2D,
    Velocity3D,
);
