//! Operator boilerplate shared by the N-component value types

/// Componentwise arithmetic, indexing, NaN helpers and conversions for a
/// struct whose fields are all `T`.
///
/// Scalar division by zero yields an all-NaN value.
macro_rules! impl_componentwise {
    ($name:ident, $n:literal { $($idx:literal => $field:ident),+ }) => {
        impl<T: Real> $name<T> {
            /// Every component set to `value`
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// All-NaN value, the result of an undefined operation
            #[inline]
            pub fn nan() -> Self {
                Self::splat(T::nan())
            }

            /// True if any component is NaN
            #[inline]
            pub fn has_nan(&self) -> bool {
                false $(|| self.$field.is_nan())+
            }

            /// True if every component is NaN
            #[inline]
            pub fn is_nan(&self) -> bool {
                true $(&& self.$field.is_nan())+
            }

            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }
        }

        impl<T: Real> std::ops::Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl<T: Real> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$field += other.$field;)+
            }
        }

        impl<T: Real> std::ops::Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl<T: Real> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$field -= other.$field;)+
            }
        }

        impl<T: Real> std::ops::Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Real> std::ops::Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: T) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl<T: Real> std::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, scalar: T) {
                $(self.$field *= scalar;)+
            }
        }

        impl<T: Real> std::ops::Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, scalar: T) -> Self {
                if scalar == T::ZERO {
                    return Self::nan();
                }
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl<T: Real> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, scalar: T) {
                *self = *self / scalar;
            }
        }

        impl std::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            #[inline]
            fn mul(self, v: $name<f32>) -> $name<f32> {
                v * self
            }
        }

        impl std::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            #[inline]
            fn mul(self, v: $name<f64>) -> $name<f64> {
                v * self
            }
        }

        impl<T> std::ops::Index<usize> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!(
                        "{} index out of range: {} (len {})",
                        stringify!($name), index, $n
                    ),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!(
                        "{} index out of range: {} (len {})",
                        stringify!($name), index, $n
                    ),
                }
            }
        }

        impl<T: Real> $crate::Equivalent<T> for $name<T> {
            #[inline]
            fn equivalent(&self, other: &Self, epsilon: T) -> bool {
                true $(&& (self.$field - other.$field).abs() <= epsilon)+
            }
        }

        impl<T: Real> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(a: [T; $n]) -> Self {
                Self { $($field: a[$idx]),+ }
            }
        }

        impl<T: Real> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        // SAFETY: #[repr(C)] with every field of type T, so no padding.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $name<T> {}
    };
}

/// Lossless conversions between two types with the same field layout
macro_rules! impl_same_shape_from {
    ($a:ident, $b:ident { $($field:ident),+ }) => {
        impl<T: Real> From<$a<T>> for $b<T> {
            #[inline]
            fn from(v: $a<T>) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl<T: Real> From<$b<T>> for $a<T> {
            #[inline]
            fn from(v: $b<T>) -> Self {
                Self { $($field: v.$field),+ }
            }
        }
    };
}
