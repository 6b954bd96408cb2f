use core::ops;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::{IndexError, MathResult};

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: self.$e.$func(rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            #[inline]
            fn $func(&mut self, rhs: $v) {
                $( self.$e.$func(rhs.$e); )*
            }
        }
    }
}

// Vector on the left only: `s / v` has no meaning here.
macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $t: ident, $($e: ident),*) => {
        impl ops::$trait<$t> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $t) -> $v {
                $v { $( $e: self.$e.$func(rhs), )* }
            }
        }
    }
}

macro_rules! scalar_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $t: ident, $($e: ident),*) => {
        impl ops::$trait<$t> for $v {
            #[inline]
            fn $func(&mut self, rhs: $t) {
                $( self.$e.$func(rhs); )*
            }
        }
    }
}

/// Writes `values` as a comma separated list, honoring the formatter's
/// precision if one was given.
pub(crate) fn write_components<T: fmt::Display>(f: &mut fmt::Formatter, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(prec) => write!(f, "{:.prec$}", value, prec = prec)?,
            None => write!(f, "{}", value)?,
        }
    }
    Ok(())
}

macro_rules! vec_impl {
    ($v: ident, $t: ident, $n: expr, $($e: ident),*) => {

        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $v {
            $( pub $e : $t, )*
        }

        impl $v {
            pub const DIM: usize = $n;

            #[inline]
            pub fn new($( $e: $t, )*) -> $v {
                $v { $( $e : $e, )* }
            }

            #[inline]
            pub fn from_scalar(a: $t) -> $v {
                $v { $( $e : a, )* }
            }

            #[inline]
            pub fn from_slice(a: &[$t; $n]) -> $v {
                bytemuck::cast(*a)
            }

            #[inline]
            pub fn to_slice(self) -> [$t; $n] {
                bytemuck::cast(self)
            }

            #[inline]
            pub fn as_array(&self) -> &[$t; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [$t; $n] {
                bytemuck::cast_mut(self)
            }

            /// Component `i`, counting `x` as 0.
            #[inline]
            pub fn get(&self, i: usize) -> MathResult<$t> {
                self.as_array().get(i).copied()
                    .ok_or(IndexError::Component { index: i, len: $n })
            }

            #[inline]
            pub fn get_mut(&mut self, i: usize) -> MathResult<&mut $t> {
                self.as_array_mut().get_mut(i)
                    .ok_or(IndexError::Component { index: i, len: $n })
            }

            #[inline]
            pub fn dot(self, b: $v) -> $t {
                // Adding negative zero (-0.0) is a nop in IEEE 754 floating
                // point, while adding positive zero can change the sign of
                // negative zero, thus llvm only optimizes out (-0.0).
                $( self.$e * b.$e + )* (-0.0)
            }

            #[inline]
            pub fn length2(self) -> $t {
                $v::dot(self, self)
            }

            #[inline]
            pub fn length(self) -> $t {
                $v::length2(self).sqrt()
            }

            #[inline]
            pub fn norm(self) -> $t {
                $v::length(self)
            }

            #[inline]
            pub fn normalized(self) -> $v {
                self * (1.0 / $v::length(self))
            }

            /// Componentwise comparison within `epsilon`. `==` stays exact.
            #[inline]
            pub fn approx_eq(self, b: $v, epsilon: $t) -> bool {
                $( (self.$e - b.$e).abs() <= epsilon )&&*
            }
        }

        impl ops::Index<usize> for $v {
            type Output = $t;

            #[inline]
            fn index(&self, i: usize) -> &$t {
                match self.as_array().get(i) {
                    Some(c) => c,
                    None => panic!("{}", IndexError::Component { index: i, len: $n }),
                }
            }
        }

        impl ops::IndexMut<usize> for $v {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut $t {
                match self.as_array_mut().get_mut(i) {
                    Some(c) => c,
                    None => panic!("{}", IndexError::Component { index: i, len: $n }),
                }
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )* }
            }
        }

        impl ops::Mul<$v> for $t {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                $v { $( $e: self * rhs.$e, )* }
            }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("(")?;
                write_components(f, self.as_array())?;
                f.write_str(")")
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);

        vec_assign_op_impl!(AddAssign, add_assign, $v, $($e),*);
        vec_assign_op_impl!(SubAssign, sub_assign, $v, $($e),*);

        scalar_op_impl!(Mul, mul, $v, $t, $($e),*);
        scalar_op_impl!(Div, div, $v, $t, $($e),*);

        scalar_assign_op_impl!(MulAssign, mul_assign, $v, $t, $($e),*);
        scalar_assign_op_impl!(DivAssign, div_assign, $v, $t, $($e),*);
    }
}

vec_impl!(Vec2, f32, 2, x, y);
vec_impl!(Vec3, f32, 3, x, y, z);
vec_impl!(Vec4, f32, 4, x, y, z, w);

vec_impl!(Vec2d, f64, 2, x, y);
vec_impl!(Vec3d, f64, 3, x, y, z);
vec_impl!(Vec4d, f64, 4, x, y, z, w);
