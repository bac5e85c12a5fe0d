use std::ops::{Mul, MulAssign};

use crate::error::{KinemathError, Result};
use crate::math::{layout, near_all, Matrix2, NearEq, Vector2};

use super::Position2D;

const TYPE_NAME: &str = "Rotation2D";

/// A 2x2 rotation matrix, stored row-major.
///
/// Same conventions as [`Rotation`](super::Rotation): orthonormality is
/// not enforced, and `r1 * r2` applies `r2` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation2D {
    pub r1_c1: f32,
    pub r1_c2: f32,
    pub r2_c1: f32,
    pub r2_c2: f32,
}

impl Default for Rotation2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotation2D {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        r1_c1: 1.0,
        r1_c2: 0.0,
        r2_c1: 0.0,
        r2_c2: 1.0,
    };

    /// Returns the identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Rotation of `theta` radians: `[[cos, -sin], [sin, cos]]`.
    #[must_use]
    pub fn from_angle(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            r1_c1: c,
            r1_c2: -s,
            r2_c1: s,
            r2_c2: c,
        }
    }

    /// Builds a rotation from four row-major values.
    ///
    /// Any other length emits a warning and returns the identity.
    #[must_use]
    pub fn from_slice(values: &[f32]) -> Self {
        layout::read_flat::<4>(TYPE_NAME, values).map_or(Self::IDENTITY, Self::from)
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            r1_c2: self.r2_c1,
            r2_c1: self.r1_c2,
            ..*self
        }
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        self.r1_c1 * self.r2_c2 - self.r1_c2 * self.r2_c1
    }

    /// Returns `[r1_c1, r1_c2, r2_c1, r2_c2]`.
    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        [self.r1_c1, self.r1_c2, self.r2_c1, self.r2_c2]
    }

    /// Returns `[r1_c1, r1_c2, r2_c1, r2_c2]`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f32> {
        self.to_array().to_vec()
    }
}

impl From<[f32; 4]> for Rotation2D {
    fn from([r1_c1, r1_c2, r2_c1, r2_c2]: [f32; 4]) -> Self {
        Self {
            r1_c1,
            r1_c2,
            r2_c1,
            r2_c2,
        }
    }
}

impl TryFrom<&[f32]> for Rotation2D {
    type Error = KinemathError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Ok(Self::from(layout::strict_flat::<4>(TYPE_NAME, &[4], values)?))
    }
}

impl From<Rotation2D> for Matrix2 {
    fn from(r: Rotation2D) -> Self {
        Matrix2::new(r.r1_c1, r.r1_c2, r.r2_c1, r.r2_c2)
    }
}

impl From<Matrix2> for Rotation2D {
    fn from(m: Matrix2) -> Self {
        Self::from([m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]])
    }
}

impl Mul for Rotation2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from(Matrix2::from(self) * Matrix2::from(rhs))
    }
}

impl MulAssign for Rotation2D {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Position2D> for Rotation2D {
    type Output = Position2D;

    fn mul(self, rhs: Position2D) -> Position2D {
        Position2D::from(Matrix2::from(self) * Vector2::from(rhs))
    }
}

impl NearEq for Rotation2D {
    fn is_near_within(&self, other: &Self, epsilon: f32) -> bool {
        near_all(self.to_array(), other.to_array(), epsilon)
    }
}

/// Returns the transpose of `rot`.
#[must_use]
pub fn transpose(rot: &Rotation2D) -> Rotation2D {
    rot.transpose()
}

/// Returns the determinant of `rot`.
#[must_use]
pub fn determinant(rot: &Rotation2D) -> f32 {
    rot.determinant()
}
