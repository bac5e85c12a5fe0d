/// Implements the shared component-wise surface of a flat `f32` value type:
/// flat-array conversions, arithmetic operators, [`NearEq`](crate::math::NearEq),
/// [`Norm`](crate::math::Norm) and [`Normalize`](crate::math::Normalize).
macro_rules! impl_component_ops {
    ($ty:ident, $name:literal, $size:literal, [$($field:ident),+]) => {
        impl $ty {
            /// Number of components in the flat layout.
            pub const SIZE: usize = $size;

            /// Returns the components in flat order.
            #[must_use]
            pub fn to_array(&self) -> [f32; $size] {
                [$(self.$field),+]
            }

            /// Returns the components in flat order.
            #[must_use]
            pub fn to_vec(&self) -> Vec<f32> {
                self.to_array().to_vec()
            }

            /// Builds a value from a flat array.
            ///
            /// A slice of the wrong length is not an error: a warning is
            /// emitted and the zero value is returned.
            #[must_use]
            pub fn from_slice(values: &[f32]) -> Self {
                $crate::math::layout::read_flat::<$size>($name, values)
                    .map_or_else(Self::default, Self::from)
            }

            /// Divides every component by `value`.
            ///
            /// # Errors
            ///
            /// Returns `NumericError::DivisionByZero` if `value` is exactly zero.
            pub fn checked_div(self, value: f32) -> $crate::error::Result<Self> {
                self.divide(value, "div")
            }

            fn divide(self, value: f32, operation: &'static str) -> $crate::error::Result<Self> {
                if value == 0.0 {
                    return Err($crate::error::NumericError::DivisionByZero {
                        type_name: $name,
                        operation,
                    }
                    .into());
                }
                Ok(self * (1.0 / value))
            }
        }

        impl From<[f32; $size]> for $ty {
            fn from(array: [f32; $size]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl From<$ty> for [f32; $size] {
            fn from(value: $ty) -> Self {
                value.to_array()
            }
        }

        impl TryFrom<&[f32]> for $ty {
            type Error = $crate::error::KinemathError;

            fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
                let array = $crate::math::layout::strict_flat::<$size>($name, &[$size], values)?;
                Ok(Self::from(array))
            }
        }

        impl ::std::ops::Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl ::std::ops::AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl ::std::ops::SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl ::std::ops::Mul<f32> for $ty {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl ::std::ops::Mul<$ty> for f32 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl ::std::ops::MulAssign<f32> for $ty {
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }

        impl ::std::ops::Div<f32> for $ty {
            type Output = Self;

            /// # Panics
            ///
            /// Panics if `rhs` is exactly zero. Use `checked_div` to recover.
            fn div(self, rhs: f32) -> Self {
                match self.divide(rhs, "div") {
                    Ok(value) => value,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl ::std::ops::DivAssign<f32> for $ty {
            /// # Panics
            ///
            /// Panics if `rhs` is exactly zero.
            fn div_assign(&mut self, rhs: f32) {
                match self.divide(rhs, "div_assign") {
                    Ok(value) => *self = value,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl $crate::math::NearEq for $ty {
            fn is_near_within(&self, other: &Self, epsilon: f32) -> bool {
                $crate::math::near_all(self.to_array(), other.to_array(), epsilon)
            }
        }

        impl $crate::math::Norm for $ty {
            fn norm(&self) -> f32 {
                self.to_array().iter().map(|c| c * c).sum::<f32>().sqrt()
            }
        }

        impl $crate::math::Normalize for $ty {
            fn normalize(&self) -> $crate::error::Result<Self> {
                let norm = $crate::math::Norm::norm(self);
                if norm == 0.0 {
                    return Err($crate::error::NumericError::ZeroNorm { type_name: $name }.into());
                }
                Ok(*self * (1.0 / norm))
            }
        }
    };
}

pub mod position_2d;
pub mod position_3d;
pub mod position_6d;
pub mod position_and_velocity;
pub mod rotation;
pub mod rotation_2d;
pub mod velocity_3d;

pub use position_2d::Position2D;
pub use position_3d::Position3D;
pub use position_6d::Position6D;
pub use position_and_velocity::PositionAndVelocity;
pub use rotation::Rotation;
pub use rotation_2d::Rotation2D;
pub use velocity_3d::Velocity3D;
