use std::ops::{Mul, MulAssign};

use crate::error::{KinemathError, LayoutError};
use crate::math::{layout, near_all, Matrix3, NearEq, Vector3};

use super::{Position3D, Position6D, Velocity3D};

const TYPE_NAME: &str = "Rotation";

/// Accepted flat sizes: a 3x3 matrix, or a row-major 3x4 / 4x4 transform.
const FLAT_SIZES: &[usize] = &[9, 12, 16];

/// A 3x3 rotation matrix, stored row-major as `r{row}_c{col}`.
///
/// A proper rotation is orthonormal with determinant `+1`. Nothing enforces
/// this: [`Rotation::from_slice`] and the public fields accept any values.
///
/// Products follow the column-vector convention: `r1 * r2` applies `r2`
/// first, then `r1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub r1_c1: f32,
    pub r1_c2: f32,
    pub r1_c3: f32,
    pub r2_c1: f32,
    pub r2_c2: f32,
    pub r2_c3: f32,
    pub r3_c1: f32,
    pub r3_c2: f32,
    pub r3_c3: f32,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Returns the identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a rotation from its three rows.
    #[must_use]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        let [[r1_c1, r1_c2, r1_c3], [r2_c1, r2_c2, r2_c3], [r3_c1, r3_c2, r3_c3]] = rows;
        Self {
            r1_c1,
            r1_c2,
            r1_c3,
            r2_c1,
            r2_c2,
            r2_c3,
            r3_c1,
            r3_c2,
            r3_c3,
        }
    }

    /// Builds a rotation from a flat row-major array.
    ///
    /// * 9 values: the 3x3 matrix.
    /// * 12 or 16 values: the rotation block of a row-major 3x4 or 4x4
    ///   transform. The translation column is discarded.
    ///
    /// Any other length emits a warning and returns the identity.
    #[must_use]
    pub fn from_slice(values: &[f32]) -> Self {
        if let Some(block) = rotation_block(values) {
            Self::from(block)
        } else {
            layout::warn_size_mismatch(TYPE_NAME, FLAT_SIZES, values.len());
            Self::IDENTITY
        }
    }

    /// Rotation of `angle` radians around the x axis.
    #[must_use]
    pub fn from_rot_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation of `angle` radians around the y axis.
    #[must_use]
    pub fn from_rot_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation of `angle` radians around the z axis.
    #[must_use]
    pub fn from_rot_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation from Euler angles in radians.
    ///
    /// Always computed as `from_rot_z(wz) * from_rot_y(wy) * from_rot_x(wx)`,
    /// so a vector is rotated about x first, then y, then z.
    #[must_use]
    pub fn from_euler(wx: f32, wy: f32, wz: f32) -> Self {
        Self::from_rot_z(wz) * Self::from_rot_y(wy) * Self::from_rot_x(wx)
    }

    /// Rotation of `angle` radians around the unit axis `(x, y, z)`
    /// (Rodrigues' formula).
    ///
    /// The axis must already be normalized; this is not checked.
    #[must_use]
    #[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
    pub fn from_axis_angle(angle: f32, x: f32, y: f32, z: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self::from_rows([
            [t * x * x + c,     t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c,     t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c    ],
        ])
    }

    /// Rotation from the unit quaternion `a + bi + cj + dk`.
    ///
    /// The quaternion must already be normalized; this is not checked.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_quaternion(a: f32, b: f32, c: f32, d: f32) -> Self {
        let (aa, bb, cc, dd) = (a * a, b * b, c * c, d * d);
        let (ab, ac, ad) = (a * b, a * c, a * d);
        let (bc, bd, cd) = (b * c, b * d, c * d);

        Self::from_rows([
            [aa + bb - cc - dd,   2.0 * (bc - ad),     2.0 * (ac + bd)    ],
            [2.0 * (ad + bc),     aa - bb + cc - dd,   2.0 * (cd - ab)    ],
            [2.0 * (bd - ac),     2.0 * (ab + cd),     aa - bb - cc + dd  ],
        ])
    }

    /// Returns the transpose, which is the inverse of a proper rotation.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from(Matrix3::from(*self).transpose())
    }

    /// Returns the determinant by cofactor expansion.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        self.r1_c1 * self.r2_c2 * self.r3_c3
            + self.r1_c2 * self.r2_c3 * self.r3_c1
            + self.r1_c3 * self.r2_c1 * self.r3_c2
            - self.r1_c1 * self.r2_c3 * self.r3_c2
            - self.r1_c2 * self.r2_c1 * self.r3_c3
            - self.r1_c3 * self.r2_c2 * self.r3_c1
    }

    /// Rotates the translation part of `pose`. The orientation components
    /// are copied unchanged.
    #[must_use]
    pub fn rotate_translation(&self, pose: &Position6D) -> Position6D {
        let translation = *self * pose.translation();
        Position6D {
            x: translation.x,
            y: translation.y,
            z: translation.z,
            ..*pose
        }
    }

    /// Returns the nine elements in row-major order.
    #[must_use]
    pub fn to_array(&self) -> [f32; 9] {
        [
            self.r1_c1, self.r1_c2, self.r1_c3,
            self.r2_c1, self.r2_c2, self.r2_c3,
            self.r3_c1, self.r3_c2, self.r3_c3,
        ]
    }

    /// Returns the nine elements in row-major order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f32> {
        self.to_array().to_vec()
    }
}

/// Extracts the row-major 3x3 block for every accepted flat size.
fn rotation_block(values: &[f32]) -> Option<[f32; 9]> {
    match values.len() {
        9 => <[f32; 9]>::try_from(values).ok(),
        12 | 16 => Some([
            values[0], values[1], values[2],
            values[4], values[5], values[6],
            values[8], values[9], values[10],
        ]),
        _ => None,
    }
}

impl From<[f32; 9]> for Rotation {
    fn from(a: [f32; 9]) -> Self {
        Self::from_rows([[a[0], a[1], a[2]], [a[3], a[4], a[5]], [a[6], a[7], a[8]]])
    }
}

impl From<Rotation> for [f32; 9] {
    fn from(r: Rotation) -> Self {
        r.to_array()
    }
}

impl TryFrom<&[f32]> for Rotation {
    type Error = KinemathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        rotation_block(values).map(Self::from).ok_or_else(|| {
            LayoutError::SizeMismatch {
                type_name: TYPE_NAME,
                expected: FLAT_SIZES,
                given: values.len(),
            }
            .into()
        })
    }
}

impl From<Rotation> for Matrix3 {
    fn from(r: Rotation) -> Self {
        Matrix3::new(
            r.r1_c1, r.r1_c2, r.r1_c3,
            r.r2_c1, r.r2_c2, r.r2_c3,
            r.r3_c1, r.r3_c2, r.r3_c3,
        )
    }
}

impl From<Matrix3> for Rotation {
    fn from(m: Matrix3) -> Self {
        Self::from_rows([
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ])
    }
}

impl Mul for Rotation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from(Matrix3::from(self) * Matrix3::from(rhs))
    }
}

impl MulAssign for Rotation {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Position3D> for Rotation {
    type Output = Position3D;

    fn mul(self, rhs: Position3D) -> Position3D {
        Position3D::from(Matrix3::from(self) * Vector3::from(rhs))
    }
}

impl Mul<Velocity3D> for Rotation {
    type Output = Velocity3D;

    fn mul(self, rhs: Velocity3D) -> Velocity3D {
        Velocity3D::from(Matrix3::from(self) * Vector3::from(rhs))
    }
}

impl NearEq for Rotation {
    fn is_near_within(&self, other: &Self, epsilon: f32) -> bool {
        near_all(self.to_array(), other.to_array(), epsilon)
    }
}

/// Returns the transpose of `rot`.
#[must_use]
pub fn transpose(rot: &Rotation) -> Rotation {
    rot.transpose()
}

/// Returns the determinant of `rot`.
#[must_use]
pub fn determinant(rot: &Rotation) -> f32 {
    rot.determinant()
}

/// See [`Rotation::from_quaternion`].
#[must_use]
pub fn rotation_from_quaternion(a: f32, b: f32, c: f32, d: f32) -> Rotation {
    Rotation::from_quaternion(a, b, c, d)
}

/// See [`Rotation::from_axis_angle`].
#[must_use]
pub fn rotation_from_axis_angle(angle: f32, x: f32, y: f32, z: f32) -> Rotation {
    Rotation::from_axis_angle(angle, x, y, z)
}

/// See [`Rotation::from_rot_x`].
#[must_use]
pub fn rotation_from_rot_x(angle: f32) -> Rotation {
    Rotation::from_rot_x(angle)
}

/// See [`Rotation::from_rot_y`].
#[must_use]
pub fn rotation_from_rot_y(angle: f32) -> Rotation {
    Rotation::from_rot_y(angle)
}

/// See [`Rotation::from_rot_z`].
#[must_use]
pub fn rotation_from_rot_z(angle: f32) -> Rotation {
    Rotation::from_rot_z(angle)
}

/// See [`Rotation::from_euler`].
#[must_use]
pub fn rotation_from_euler(wx: f32, wy: f32, wz: f32) -> Rotation {
    Rotation::from_euler(wx, wy, wz)
}

/// Rotates the point `(x, y, z)` in place: `[x, y, z] = rot * [x, y, z]`.
pub fn apply_rotation(rot: &Rotation, x: &mut f32, y: &mut f32, z: &mut f32) {
    let rotated = *rot * Position3D::new(*x, *y, *z);
    *x = rotated.x;
    *y = rotated.y;
    *z = rotated.z;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    const EPS: f32 = 1e-4;

    /// A representative output of every factory.
    fn factory_outputs() -> Vec<Rotation> {
        let inv_sqrt3 = 1.0 / 3.0_f32.sqrt();
        let q = [0.5_f32, -0.3, 0.7, 0.2];
        let q_norm = q.iter().map(|v| v * v).sum::<f32>().sqrt();
        vec![
            Rotation::identity(),
            Rotation::from_rot_x(0.3),
            Rotation::from_rot_y(-1.2),
            Rotation::from_rot_z(2.5),
            Rotation::from_euler(0.1, -0.7, 1.9),
            Rotation::from_euler(PI, FRAC_PI_2, -FRAC_PI_4),
            Rotation::from_axis_angle(1.1, inv_sqrt3, -inv_sqrt3, inv_sqrt3),
            Rotation::from_axis_angle(-0.4, 0.0, 0.6, 0.8),
            Rotation::from_quaternion(q[0] / q_norm, q[1] / q_norm, q[2] / q_norm, q[3] / q_norm),
            Rotation::from_quaternion(1.0, 0.0, 0.0, 0.0),
        ]
    }

    // ── factories ──

    #[test]
    fn default_is_identity() {
        assert_eq!(Rotation::default(), Rotation::identity());
        assert_eq!(
            Rotation::identity().to_vec(),
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn elementary_rotations_place_sine_terms() {
        let (s, c) = 0.4_f32.sin_cos();
        assert_eq!(
            Rotation::from_rot_x(0.4),
            Rotation::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
        );
        assert_eq!(
            Rotation::from_rot_y(0.4),
            Rotation::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
        );
        assert_eq!(
            Rotation::from_rot_z(0.4),
            Rotation::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
        );
    }

    #[test]
    fn factories_are_orthonormal() {
        for rot in factory_outputs() {
            assert!(
                (rot.transpose() * rot).is_near(&Rotation::identity()),
                "not orthonormal: {rot:?}"
            );
            assert_abs_diff_eq!(rot.determinant(), 1.0, epsilon = EPS);
        }
    }

    #[test]
    fn euler_is_exact_zyx_product() {
        for (wx, wy, wz) in [(0.1, -0.7, 1.9), (1.3, 0.2, -2.8), (0.0, 0.0, 0.0)] {
            assert_eq!(
                Rotation::from_euler(wx, wy, wz),
                Rotation::from_rot_z(wz) * Rotation::from_rot_y(wy) * Rotation::from_rot_x(wx)
            );
        }
    }

    #[test]
    fn euler_order_matters() {
        let zyx = Rotation::from_euler(0.5, 0.5, 0.0);
        let xyz = Rotation::from_rot_x(0.5) * Rotation::from_rot_y(0.5);
        assert!(!zyx.is_near(&xyz));
    }

    #[test]
    fn axis_angle_matches_elementary_rotations() {
        let angle = 0.8;
        assert!(Rotation::from_axis_angle(angle, 1.0, 0.0, 0.0).is_near(&Rotation::from_rot_x(angle)));
        assert!(Rotation::from_axis_angle(angle, 0.0, 1.0, 0.0).is_near(&Rotation::from_rot_y(angle)));
        assert!(Rotation::from_axis_angle(angle, 0.0, 0.0, 1.0).is_near(&Rotation::from_rot_z(angle)));
    }

    #[test]
    fn quaternion_matches_axis_angle() {
        // q = cos(θ/2) + sin(θ/2) * axis
        let angle = 1.1_f32;
        let axis = [0.0_f32, 0.6, 0.8];
        let (s, c) = (angle / 2.0).sin_cos();
        let from_quat = Rotation::from_quaternion(c, s * axis[0], s * axis[1], s * axis[2]);
        let from_axis = Rotation::from_axis_angle(angle, axis[0], axis[1], axis[2]);
        assert!(from_quat.is_near(&from_axis));
    }

    #[test]
    fn identity_quaternion_is_identity() {
        assert_eq!(Rotation::from_quaternion(1.0, 0.0, 0.0, 0.0), Rotation::identity());
    }

    // ── algebra ──

    #[test]
    fn composition_applies_right_factor_first() {
        // Rotate x about z by 90°, then about x by 90°: x -> y -> z.
        let rot = Rotation::from_rot_x(FRAC_PI_2) * Rotation::from_rot_z(FRAC_PI_2);
        let v = rot * Position3D::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(v.z, 1.0, epsilon = EPS);
    }

    #[test]
    fn mul_assign_matches_mul() {
        let a = Rotation::from_rot_y(0.3);
        let b = Rotation::from_rot_x(-0.9);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn transpose_swaps_off_diagonal() {
        let rot = Rotation::from(core::array::from_fn::<f32, 9, _>(|i| i as f32));
        assert_eq!(
            transpose(&rot).to_vec(),
            vec![0.0, 3.0, 6.0, 1.0, 4.0, 7.0, 2.0, 5.0, 8.0]
        );
        assert_eq!(rot.transpose().transpose(), rot);
    }

    #[test]
    fn determinant_of_general_matrix() {
        let m = Rotation::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]);
        assert_abs_diff_eq!(determinant(&m), 6.0, epsilon = EPS);
        let singular = Rotation::from(core::array::from_fn::<f32, 9, _>(|i| i as f32));
        assert_abs_diff_eq!(singular.determinant(), 0.0, epsilon = EPS);
        let reflection = Rotation::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert_abs_diff_eq!(reflection.determinant(), -1.0, epsilon = EPS);
    }

    #[test]
    fn is_near_is_reflexive_symmetric_and_inclusive() {
        let a = Rotation::from_euler(0.2, 0.4, 0.6);
        assert!(a.is_near(&a));

        let mut b = a;
        b.r2_c3 += 0.5;
        assert!(a.is_near_within(&b, 0.5 + EPS));
        assert!(b.is_near_within(&a, 0.5 + EPS));
        assert!(!a.is_near(&b));

        let zero = Rotation::from([0.0; 9]);
        let half = Rotation::from([0.5; 9]);
        assert!(zero.is_near_within(&half, 0.5));
        assert!(!zero.is_near_within(&half, 0.25));
    }

    #[test]
    fn exact_equality_is_not_near_equality() {
        let a = Rotation::identity();
        let mut b = a;
        b.r1_c1 += 1e-5;
        assert_ne!(a, b);
        assert!(a.is_near(&b));
    }

    #[test]
    fn apply_rotation_in_place() {
        let rot = Rotation::from_rot_z(FRAC_PI_2);
        let (mut x, mut y, mut z) = (1.0, 2.0, 3.0);
        apply_rotation(&rot, &mut x, &mut y, &mut z);
        assert_abs_diff_eq!(x, -2.0, epsilon = EPS);
        assert_abs_diff_eq!(y, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(z, 3.0, epsilon = EPS);
    }

    #[test]
    fn rotates_velocity_and_pose_translation() {
        let rot = Rotation::from_rot_x(FRAC_PI_2);
        let v = rot * Velocity3D::new(0.0, 1.0, 0.0);
        assert!(v.is_near(&Velocity3D::new(0.0, 0.0, 1.0)));

        let pose = Position6D::new(0.0, 1.0, 0.0, 0.1, 0.2, 0.3);
        let rotated = rot.rotate_translation(&pose);
        assert!(rotated.is_near(&Position6D::new(0.0, 0.0, 1.0, 0.1, 0.2, 0.3)));
    }

    // ── flat layout ──

    #[test]
    fn flat_round_trip() {
        for rot in factory_outputs() {
            assert_eq!(Rotation::from_slice(&rot.to_vec()), rot);
            assert_eq!(Rotation::try_from(rot.to_vec().as_slice()).unwrap(), rot);
        }
    }

    #[test]
    fn transform_slices_take_rotation_block() {
        let transform: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let expected = Rotation::from_rows([[0.0, 1.0, 2.0], [4.0, 5.0, 6.0], [8.0, 9.0, 10.0]]);
        assert_eq!(Rotation::from_slice(&transform), expected);
        assert_eq!(Rotation::from_slice(&transform[..12]), expected);
    }

    #[test]
    fn wrong_size_falls_back_to_identity() {
        crate::test_support::init_tracing();
        for len in [0, 3, 8, 10, 13, 17] {
            let values = vec![2.0; len];
            assert_eq!(Rotation::from_slice(&values), Rotation::identity());
            assert!(Rotation::try_from(values.as_slice()).is_err());
        }
    }

    #[test]
    fn nalgebra_round_trip() {
        let rot = Rotation::from_euler(0.3, -0.2, 0.9);
        let m = Matrix3::from(rot);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = EPS);
        assert_eq!(Rotation::from(m), rot);
    }
}
