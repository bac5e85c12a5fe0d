//! Fixed-size kinematic value types: positions, velocities and rotation
//! matrices, with the rotation composition and conversion algebra.

#[cfg(any(test, feature = "approx"))]
mod approx_impls;
pub mod error;
pub mod math;
pub mod types;

pub use error::{KinemathError, LayoutError, NumericError, Result};
pub use math::{CrossProduct, Distance, DotProduct, NearEq, Norm, Normalize};
pub use types::{
    Position2D, Position3D, Position6D, PositionAndVelocity, Rotation, Rotation2D, Velocity3D,
};
