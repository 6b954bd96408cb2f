use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::{IndexError, MathResult};
use crate::vec::*;

macro_rules! mat_impl {
    ($m: ident, $t: ident, $v: ident, $n: literal, $($r: ident),*) => {

        /// Square matrix stored column-major: `e[column][row]`.
        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $m {
            pub e: [[$t; $n]; $n],
        }

        impl $m {
            pub const DIM: usize = $n;

            /// Builds a matrix from its entries written out row by row, the
            /// way it reads on paper.
            #[inline]
            pub fn new($( $r: $t, )*) -> $m {
                $m::from_row_major(&[$( $r, )*])
            }

            #[inline]
            pub fn zero() -> $m {
                $m::default()
            }

            #[inline]
            pub fn from_row_major(a: &[$t; $n * $n]) -> $m {
                let mut m = $m::zero();
                for i in 0..$n {
                    for j in 0..$n {
                        m.e[j][i] = a[i * $n + j];
                    }
                }
                m
            }

            #[inline]
            pub fn from_columns(v: &[$v; $n]) -> $m {
                let mut m = $m::zero();
                for i in 0..$n {
                    m.e[i] = v[i].to_slice();
                }
                m
            }

            #[inline]
            pub fn from_rows(v: &[$v; $n]) -> $m {
                $m::from_columns(v).transpose()
            }

            #[inline]
            pub fn identity() -> $m {
                $m::scale_uniform(1.0)
            }

            #[inline]
            pub fn scale_uniform(d: $t) -> $m {
                let mut m = $m::zero();
                for i in 0..$n {
                    m.e[i][i] = d;
                }
                m
            }

            /// Entry at row `i`, column `j`.
            #[inline]
            pub fn at(&self, i: usize, j: usize) -> MathResult<$t> {
                self.e.get(j).and_then(|c| c.get(i)).copied()
                    .ok_or(IndexError::Entry { row: i, column: j, dim: $n })
            }

            #[inline]
            pub fn at_mut(&mut self, i: usize, j: usize) -> MathResult<&mut $t> {
                self.e.get_mut(j).and_then(|c| c.get_mut(i))
                    .ok_or(IndexError::Entry { row: i, column: j, dim: $n })
            }

            #[inline]
            pub fn column(&self, j: usize) -> MathResult<$v> {
                self.e.get(j).map($v::from_slice)
                    .ok_or(IndexError::Column { column: j, dim: $n })
            }

            /// Overwrites column `j` in place.
            #[inline]
            pub fn set_column(&mut self, j: usize, v: $v) -> MathResult<()> {
                let c = self.e.get_mut(j)
                    .ok_or(IndexError::Column { column: j, dim: $n })?;
                *c = v.to_slice();
                Ok(())
            }

            #[inline]
            pub fn row(&self, i: usize) -> MathResult<$v> {
                if i >= $n {
                    return Err(IndexError::Row { row: i, dim: $n });
                }
                let mut v = [0.0; $n];
                for j in 0..$n {
                    v[j] = self.e[j][i];
                }
                Ok($v::from_slice(&v))
            }

            #[inline]
            pub fn transpose(&self) -> $m {
                let mut m = $m::zero();

                for j in 0..$n {
                    for i in 0..$n {
                        m.e[j][i] = self.e[i][j];
                    }
                }
                m
            }

            #[inline]
            pub fn to_columns(&self) -> [$v; $n] {
                bytemuck::cast(*self)
            }

            #[inline]
            pub fn to_rows(&self) -> [$v; $n] {
                self.transpose().to_columns()
            }

            /// Matrix-vector product expanded one row at a time, each output
            /// component being a row dotted with `v`. Agrees with `self * v`.
            #[inline]
            pub fn mul_by_rows(&self, v: $v) -> $v {
                let mut out = [0.0; $n];

                let a = self.to_rows();

                for i in 0..$n {
                    out[i] = a[i].dot(v);
                }
                $v::from_slice(&out)
            }

            #[inline]
            pub fn approx_eq(&self, b: &$m, epsilon: $t) -> bool {
                self.to_columns().iter().zip(b.to_columns().iter())
                    .all(|(x, y)| x.approx_eq(*y, epsilon))
            }
        }

        /// Indexed by `(row, column)`.
        impl ops::Index<(usize, usize)> for $m {
            type Output = $t;

            #[inline]
            fn index(&self, (i, j): (usize, usize)) -> &$t {
                match self.e.get(j).and_then(|c| c.get(i)) {
                    Some(x) => x,
                    None => panic!("{}", IndexError::Entry { row: i, column: j, dim: $n }),
                }
            }
        }

        impl ops::IndexMut<(usize, usize)> for $m {
            #[inline]
            fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut $t {
                match self.e.get_mut(j).and_then(|c| c.get_mut(i)) {
                    Some(x) => x,
                    None => panic!("{}", IndexError::Entry { row: i, column: j, dim: $n }),
                }
            }
        }

        impl ops::Mul<$m> for $m {
            type Output = $m;

            /// Column `j` of the product is `self * rhs.column(j)`.
            #[inline]
            fn mul(self, rhs: $m) -> $m {
                let mut c = rhs.to_columns();
                for j in 0..$n {
                    c[j] = self * c[j];
                }
                $m::from_columns(&c)
            }
        }

        impl ops::Mul<$v> for $m {
            type Output = $v;

            /// Linear combination of the columns weighted by the components
            /// of `rhs`.
            #[inline]
            fn mul(self, rhs: $v) -> $v {
                let c = self.to_columns();
                let mut v = $v::default();
                for j in 0..$n {
                    v += rhs[j] * c[j];
                }
                v
            }
        }

        /// Row vector times matrix, i.e. `transpose(rhs) * self`.
        impl ops::Mul<$m> for $v {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $m) -> $v {
                rhs.transpose() * self
            }
        }

        impl ops::Mul<$t> for $m {
            type Output = $m;

            #[inline]
            fn mul(self, rhs: $t) -> $m {
                let mut c = self.to_columns();
                for j in 0..$n {
                    c[j] *= rhs;
                }
                $m::from_columns(&c)
            }
        }

        impl ops::Mul<$m> for $t {
            type Output = $m;

            #[inline]
            fn mul(self, rhs: $m) -> $m {
                rhs * self
            }
        }

        impl ops::MulAssign<$t> for $m {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl fmt::Display for $m {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                for row in self.to_rows().iter() {
                    f.write_str("[")?;
                    write_components(f, row.as_array())?;
                    f.write_str("]\n")?;
                }
                Ok(())
            }
        }
    }
}

mat_impl!(Mat4, f32, Vec4, 4,
    m00, m01, m02, m03,
    m10, m11, m12, m13,
    m20, m21, m22, m23,
    m30, m31, m32, m33);
mat_impl!(Mat3, f32, Vec3, 3,
    m00, m01, m02,
    m10, m11, m12,
    m20, m21, m22);
mat_impl!(Mat2, f32, Vec2, 2,
    m00, m01,
    m10, m11);

mat_impl!(Mat4d, f64, Vec4d, 4,
    m00, m01, m02, m03,
    m10, m11, m12, m13,
    m20, m21, m22, m23,
    m30, m31, m32, m33);
mat_impl!(Mat3d, f64, Vec3d, 3,
    m00, m01, m02,
    m10, m11, m12,
    m20, m21, m22);
mat_impl!(Mat2d, f64, Vec2d, 2,
    m00, m01,
    m10, m11);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_construction() {
        let a = Mat2::new(1., 2., 3., 4.);
        assert_eq!(a.e, [[1., 3.], [2., 4.]]);
        assert_eq!(a.at(0, 1), Ok(2.));
        assert_eq!(a.column(0), Ok(Vec2::new(1., 3.)));
        assert_eq!(a.row(1), Ok(Vec2::new(3., 4.)));
        assert_eq!(a, Mat2::from_rows(&[Vec2::new(1., 2.), Vec2::new(3., 4.)]));
        assert_eq!(a, Mat2::from_columns(&[Vec2::new(1., 3.), Vec2::new(2., 4.)]));
    }

    #[test]
    fn entry_write_through() {
        let mut a = Mat3::identity();
        *a.at_mut(2, 0).unwrap() = 7.;
        a[(0, 1)] = -2.;
        assert_eq!(a.column(0), Ok(Vec3::new(1., 0., 7.)));
        assert_eq!(a.column(1), Ok(Vec3::new(-2., 1., 0.)));
    }

    #[test]
    fn set_column_replaces_in_place() {
        let mut a = Mat2::new(1., 2., 3., 4.);
        a.set_column(1, Vec2::new(9., 8.)).unwrap();
        assert_eq!(a, Mat2::new(1., 9., 3., 8.));
        assert_eq!(a.set_column(2, Vec2::default()), Err(IndexError::Column { column: 2, dim: 2 }));
    }

    #[test]
    fn out_of_range_access() {
        let mut a = Mat4::identity();
        assert_eq!(a.at(4, 0), Err(IndexError::Entry { row: 4, column: 0, dim: 4 }));
        assert_eq!(a.at(0, 4), Err(IndexError::Entry { row: 0, column: 4, dim: 4 }));
        assert!(a.at_mut(5, 5).is_err());
        assert_eq!(a.column(4), Err(IndexError::Column { column: 4, dim: 4 }));
        assert_eq!(a.row(9), Err(IndexError::Row { row: 9, dim: 4 }));
    }

    #[test]
    #[should_panic(expected = "entry (0, 3) out of range for a 3x3 matrix")]
    fn index_past_end_panics() {
        let a = Mat3::zero();
        let _ = a[(0, 3)];
    }

    #[test]
    fn scalar_multiply() {
        let a = Mat2::new(1., -2., 3., 0.5);
        let b = Mat2::new(2., -4., 6., 1.);
        assert_eq!(2. * a, b);
        assert_eq!(a * 2., b);

        let mut c = a;
        c *= 2.;
        assert_eq!(c, b);
    }

    #[test]
    fn product_composes_columns() {
        let a = Mat3::new(1., 2., 0., 0., 1., 3., 4., 0., 1.);
        let b = Mat3::new(2., 0., 1., 1., 1., 0., 0., 5., 2.);
        let ab = a * b;
        for j in 0..3 {
            assert_eq!(ab.column(j).unwrap(), a * b.column(j).unwrap());
        }
        assert_eq!(ab, Mat3::new(4., 2., 1., 1., 16., 6., 8., 5., 6.));
        assert_eq!(Mat3::identity() * a, a);
    }

    #[test]
    fn display_one_row_per_line() {
        let a = Mat2::new(1., 2., 3., 4.);
        assert_eq!(a.to_string(), "[1, 2]\n[3, 4]\n");
        assert_eq!(format!("{:.1}", Mat2::identity()), "[1.0, 0.0]\n[0.0, 1.0]\n");
    }

    #[test]
    fn double_precision() {
        let a = Mat4d::scale_uniform(0.5);
        let v = Vec4d::new(2., 4., 6., 8.);
        assert_eq!(a * v, Vec4d::new(1., 2., 3., 4.));
        assert!(a.approx_eq(&Mat4d::scale_uniform(0.5 + 1e-15), 1e-12));
    }
}
