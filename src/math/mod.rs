pub(crate) mod layout;
mod metric;

pub use metric::{
    cross_product, distance, distance_squared, dot_product, norm, normalize, CrossProduct,
    Distance, DotProduct, NearEq, Norm, Normalize,
};

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// 2x2 matrix type.
pub type Matrix2 = nalgebra::Matrix2<f32>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f32>;

/// Default tolerance used by [`NearEq::is_near`].
pub const DEFAULT_EPSILON: f32 = 0.0001;

/// Returns `true` if every pair of components differs by at most `epsilon`.
pub(crate) fn near_all<const N: usize>(lhs: [f32; N], rhs: [f32; N], epsilon: f32) -> bool {
    lhs.iter()
        .zip(rhs.iter())
        .all(|(a, b)| (a - b).abs() <= epsilon)
}
