//! Integer vectors in two and three dimensions.
//!
//! [`Point2`] and [`Point3`] are plain `Copy` values compared and hashed by
//! their components, so they work directly as `HashMap`/`HashSet` keys.
//!
//! Arithmetic is component-wise: `+`, `-`, unary `-`, `* i64` (scale) and
//! `/ i64`, which is **floor** division (rounds toward negative infinity):
//!
//! ```rust
//! use aoc_solutions::utils::geom::Point2;
//!
//! let p = Point2::new(-3, 4);
//! assert_eq!(p + Point2::new(1, 1), Point2::new(-2, 5));
//! assert_eq!(p * 2, Point2::new(-6, 8));
//! assert_eq!(p / 2, Point2::new(-2, 2));
//! assert_eq!(p.four_neighbors().len(), 4);
//! ```

/// Integer division rounding toward negative infinity.
///
/// # Panics
///
/// Panics if `rhs` is zero, like `/` on integers.
#[inline]
pub fn floor_div(lhs: i64, rhs: i64) -> i64 {
    let q = lhs / rhs;
    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        q - 1
    } else {
        q
    }
}

/// Implements the component-wise operator set for a point type.
macro_rules! vector_ops {
    ($point:ident { $($field:ident),+ }) => {
        impl ::std::ops::Add for $point {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl ::std::ops::Sub for $point {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl ::std::ops::Neg for $point {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl ::std::ops::Mul<i64> for $point {
            type Output = Self;
            #[inline]
            fn mul(self, factor: i64) -> Self {
                Self { $($field: self.$field * factor),+ }
            }
        }

        impl ::std::ops::Div<i64> for $point {
            type Output = Self;
            #[inline]
            fn div(self, divisor: i64) -> Self {
                Self { $($field: $crate::utils::geom::floor_div(self.$field, divisor)),+ }
            }
        }

        impl ::std::ops::AddAssign for $point {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl ::std::ops::SubAssign for $point {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl $point {
            /// Multiply every component by `factor`
            #[inline]
            pub fn scale(self, factor: i64) -> Self {
                self * factor
            }

            /// Floor-divide every component by `divisor`
            #[inline]
            pub fn floor_div(self, divisor: i64) -> Self {
                self / divisor
            }

            /// Component-wise sign (-1, 0 or 1)
            #[inline]
            pub fn signum(self) -> Self {
                Self { $($field: self.$field.signum()),+ }
            }

            /// Sum of absolute component differences
            #[inline]
            pub fn manhattan(self, other: Self) -> u64 {
                0u64 $(+ self.$field.abs_diff(other.$field))+
            }

            /// Largest absolute component difference
            #[inline]
            pub fn chebyshev(self, other: Self) -> u64 {
                let mut max = 0u64;
                $(max = max.max(self.$field.abs_diff(other.$field));)+
                max
            }
        }
    };
}

pub(crate) use vector_ops;

mod point2;
mod point3;

pub use point2::Point2;
pub use point3::Point3;

#[cfg(test)]
mod tests;
