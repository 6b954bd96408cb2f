//! Fixed-size vectors and square matrices in 2, 3 and 4 dimensions.
//!
//! Matrices are column-major and act on column vectors: `m * v` is a linear
//! combination of the columns of `m`. A vector on the left, `v * m`, is read
//! as a row vector and equals `m.transpose() * v`.

pub mod error;
pub mod vec;
pub mod mat;

pub use error::{IndexError, MathResult};

#[cfg(test)]
mod tests {
    use crate::vec::Vec2;
    use crate::mat::Mat2;

    #[test]
    fn doubling_x() {
        let m = Mat2::new(2., 0., 0., 1.);
        let x = Vec2::new(3., 4.);
        assert_eq!(m * x, Vec2::new(6., 4.));
    }

    #[test]
    fn first_column_from_unit_vector() {
        let a = Mat2::new(1., 2., 3., 4.);
        let x = Vec2::new(1., 0.);
        assert_eq!(a * x, Vec2::new(1., 3.));
        assert_eq!(a * x, a.column(0).unwrap());
    }

    #[test]
    fn row_and_column_products_differ() {
        let a = Mat2::new(1., 2., 3., 4.);
        let x = Vec2::new(1., 1.);
        assert_eq!(a * x, Vec2::new(3., 7.));
        assert_eq!(x * a, Vec2::new(4., 6.));
        assert_ne!(a * x, x * a);
    }

    #[test]
    fn row_product_is_transposed_column_product() {
        let a = Mat2::new(1., 2., 3., 4.);
        let x = Vec2::new(1., 1.);
        assert_eq!(a.transpose(), Mat2::new(1., 3., 2., 4.));
        assert_eq!(x * a, a.transpose() * x);
        assert_eq!(a.transpose() * x, Vec2::new(4., 6.));
        assert_eq!(x * a.transpose(), a * x);
    }

    #[test]
    fn uniform_scales_compose() {
        let a = Mat2::scale_uniform(3.0);
        let b = Mat2::scale_uniform(2.0) * a;

        let mut z = Vec2::new(10.0, 2.0);
        z += Vec2::from_scalar(1.0);

        assert_eq!(b * z, Vec2::new(66.0, 18.0));
        assert_eq!(format!("{:.2}", b * z), "(66.00, 18.00)");
    }
}
