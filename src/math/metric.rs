use crate::error::Result;

use super::DEFAULT_EPSILON;

/// Euclidean norm over all components of a value.
pub trait Norm {
    /// Returns the Euclidean norm.
    fn norm(&self) -> f32;
}

/// Scaling of a value to unit norm.
pub trait Normalize: Sized {
    /// Returns the value scaled to unit norm.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::ZeroNorm`](crate::error::NumericError::ZeroNorm)
    /// if the norm is exactly zero.
    fn normalize(&self) -> Result<Self>;
}

/// Point-to-point distance.
pub trait Distance {
    /// Returns the squared Euclidean distance to `other`.
    fn distance_squared(&self, other: &Self) -> f32;

    /// Returns the Euclidean distance to `other`.
    fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

/// Inner product.
pub trait DotProduct {
    /// Returns the dot product with `other`.
    fn dot_product(&self, other: &Self) -> f32;
}

/// Cross product. In 2D the output is the scalar `z` component.
pub trait CrossProduct {
    type Output;

    /// Returns the cross product `self x other`.
    fn cross_product(&self, other: &Self) -> Self::Output;
}

/// Component-wise tolerance comparison, distinct from exact `==`.
pub trait NearEq {
    /// Returns `true` if every component differs from `other` by at most `epsilon`.
    fn is_near_within(&self, other: &Self, epsilon: f32) -> bool;

    /// [`NearEq::is_near_within`] with [`DEFAULT_EPSILON`].
    fn is_near(&self, other: &Self) -> bool {
        self.is_near_within(other, DEFAULT_EPSILON)
    }
}

/// Returns the Euclidean norm of `value`.
#[must_use]
pub fn norm<T: Norm>(value: &T) -> f32 {
    value.norm()
}

/// Returns `value` scaled to unit norm.
///
/// # Errors
///
/// Returns an error if the norm of `value` is exactly zero.
pub fn normalize<T: Normalize>(value: &T) -> Result<T> {
    value.normalize()
}

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance<T: Distance>(a: &T, b: &T) -> f32 {
    a.distance(b)
}

/// Returns the squared Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance_squared<T: Distance>(a: &T, b: &T) -> f32 {
    a.distance_squared(b)
}

/// Returns the dot product of `a` and `b`.
#[must_use]
pub fn dot_product<T: DotProduct>(a: &T, b: &T) -> f32 {
    a.dot_product(b)
}

/// Returns the cross product `a x b`.
#[must_use]
pub fn cross_product<T: CrossProduct>(a: &T, b: &T) -> T::Output {
    a.cross_product(b)
}
