//! Two-vector visualizer.
//!
//! Takes two 2-D vectors, draws them from the centre of a canvas and applies
//! one elementary vector operation to them, drawing and reporting the result.

pub mod config;
pub mod error;
pub mod operation;
pub mod render;

pub mod library {
    use crate::error::VectorError;
    use std::ops::{Add, Mul, Neg, Sub};

    /// A point or displacement. User vectors always have `z == 0`; `z` is only
    /// populated by [`cross`].
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Vector3 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }

    impl Vector3 {
        pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

        pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
            Vector3 { x, y, z }
        }

        /// Vector in the z = 0 plane.
        pub const fn planar(x: f32, y: f32) -> Vector3 {
            Vector3 { x, y, z: 0.0 }
        }
    }

    pub fn add(a: Vector3, b: Vector3) -> Vector3 {
        Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
    }

    pub fn sub(a: Vector3, b: Vector3) -> Vector3 {
        Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
    }

    pub fn scale(a: Vector3, k: f32) -> Vector3 {
        Vector3::new(a.x * k, a.y * k, a.z * k)
    }

    /// Component-wise division. Checked before anything is computed so a zero
    /// scalar never produces infinities.
    pub fn divide(a: Vector3, k: f32) -> Result<Vector3, VectorError> {
        if k == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Vector3::new(a.x / k, a.y / k, a.z / k))
    }

    /// Planar dot product, z is ignored.
    pub fn dot(a: Vector3, b: Vector3) -> f32 {
        a.x * b.x + a.y * b.y
    }

    /// Planar length, z is ignored.
    pub fn get_magnitude(vec: Vector3) -> f32 {
        vec.x.hypot(vec.y)
    }

    /// Planar length in f64, finite for every finite input.
    fn magnitude_f64(vec: Vector3) -> f64 {
        (vec.x as f64).hypot(vec.y as f64)
    }

    pub fn normalize(vec: Vector3) -> Vector3 {
        let mag = magnitude_f64(vec);
        if mag == 0.0 {
            return Vector3::ZERO;
        }
        Vector3::planar((vec.x as f64 / mag) as f32, (vec.y as f64 / mag) as f32)
    }

    /// Cross product of two vectors in the z = 0 plane. Only `z` can be non-zero.
    pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
        Vector3::new(0.0, 0.0, a.x * b.y - a.y * b.x)
    }

    /// Angle between `a` and `b` in degrees, 0 when either has no length.
    pub fn angle_degrees(a: Vector3, b: Vector3) -> f32 {
        let mag = magnitude_f64(a) * magnitude_f64(b);
        if mag == 0.0 {
            return 0.0;
        }
        let dot = a.x as f64 * b.x as f64 + a.y as f64 * b.y as f64;
        // rounding can push the cosine just outside [-1, 1]
        let cos = (dot / mag).clamp(-1.0, 1.0);
        cos.acos().to_degrees() as f32
    }

    pub fn triangle_area(a: Vector3, b: Vector3) -> f32 {
        0.5 * cross(a, b).z.abs()
    }

    impl Add for Vector3 {
        type Output = Vector3;

        fn add(self, rhs: Vector3) -> Vector3 {
            add(self, rhs)
        }
    }

    impl Sub for Vector3 {
        type Output = Vector3;

        fn sub(self, rhs: Vector3) -> Vector3 {
            sub(self, rhs)
        }
    }

    impl Mul<f32> for Vector3 {
        type Output = Vector3;

        fn mul(self, k: f32) -> Vector3 {
            scale(self, k)
        }
    }

    impl Neg for Vector3 {
        type Output = Vector3;

        fn neg(self) -> Vector3 {
            scale(self, -1.0)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::{assert_abs_diff_eq, assert_relative_eq};

        const SAMPLES: usize = 200;

        fn random_vector() -> Vector3 {
            Vector3::planar(
                rand::random_range(-100.0..100.0),
                rand::random_range(-100.0..100.0),
            )
        }

        fn assert_vec_eq(actual: Vector3, expected: Vector3, epsilon: f32) {
            assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
            assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
            assert_abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
        }

        #[test]
        fn test_add_then_sub_returns_original() {
            for _ in 0..SAMPLES {
                let a = random_vector();
                let b = random_vector();
                assert_vec_eq(sub(add(a, b), b), a, 1e-3);
            }
        }

        #[test]
        fn test_divide_then_scale_returns_original() {
            for _ in 0..SAMPLES {
                let a = random_vector();
                let mut k: f32 = rand::random_range(-10.0..10.0);
                if k.abs() < 0.01 {
                    k = 0.5;
                }
                let back = scale(divide(a, k).unwrap(), k);
                assert_vec_eq(back, a, 1e-3);
            }
        }

        #[test]
        fn test_divide_by_zero() {
            for _ in 0..SAMPLES {
                assert_eq!(divide(random_vector(), 0.0), Err(VectorError::DivisionByZero));
            }
            assert_eq!(divide(Vector3::ZERO, -0.0), Err(VectorError::DivisionByZero));
        }

        #[test]
        fn test_dot_and_magnitude_ignore_z() {
            let a = Vector3::new(1.0, 2.0, 7.0);
            let b = Vector3::new(3.0, 4.0, 9.0);
            assert_eq!(dot(a, b), 11.0);
            assert_eq!(get_magnitude(Vector3::new(3.0, 4.0, 12.0)), 5.0);
        }

        #[test]
        fn test_magnitude_of_sum() {
            let a = Vector3::planar(3.0, 4.0);
            let sum = add(a, Vector3::ZERO);
            assert_eq!(sum, Vector3::planar(3.0, 4.0));
            assert_abs_diff_eq!(get_magnitude(a), 5.0);
        }

        #[test]
        fn test_normalize() {
            let n = normalize(Vector3::planar(6.0, 8.0));
            assert_vec_eq(n, Vector3::planar(0.6, 0.8), 1e-6);
            assert_abs_diff_eq!(get_magnitude(n), 1.0, epsilon = 1e-6);
            assert_eq!(normalize(Vector3::ZERO), Vector3::ZERO);
        }

        #[test]
        fn test_normalize_drops_z() {
            let n = normalize(Vector3::new(0.0, 2.0, 5.0));
            assert_eq!(n, Vector3::planar(0.0, 1.0));
        }

        #[test]
        fn test_perpendicular_unit_vectors() {
            let a = Vector3::planar(1.0, 0.0);
            let b = Vector3::planar(0.0, 1.0);
            assert_abs_diff_eq!(angle_degrees(a, b), 90.0, epsilon = 1e-4);
            assert_abs_diff_eq!(triangle_area(a, b), 0.5);
            assert_eq!(cross(a, b), Vector3::new(0.0, 0.0, 1.0));
        }

        #[test]
        fn test_angle_fallbacks() {
            for _ in 0..SAMPLES {
                let a = random_vector();
                assert_eq!(angle_degrees(a, Vector3::ZERO), 0.0);
                assert_eq!(angle_degrees(Vector3::ZERO, a), 0.0);
                if get_magnitude(a) > 1e-3 {
                    assert_abs_diff_eq!(angle_degrees(a, a), 0.0, epsilon = 0.1);
                }
            }
        }

        #[test]
        fn test_magnitude_at_range_limits() {
            let big = get_magnitude(Vector3::planar(3e19, 4e19));
            assert_relative_eq!(big, 5e19, max_relative = 1e-6);
            let tiny = get_magnitude(Vector3::planar(3e-25, 4e-25));
            assert_relative_eq!(tiny, 5e-25, max_relative = 1e-6);
            assert!(get_magnitude(Vector3::planar(f32::MAX, 0.0)).is_finite());
            assert!(get_magnitude(Vector3::planar(1e-45, 0.0)) > 0.0);
        }

        #[test]
        fn test_normalize_at_range_limits() {
            for v in [
                Vector3::planar(1e20, 1e20),
                Vector3::planar(1e-25, 0.0),
                Vector3::planar(-3e-40, 4e-40),
                Vector3::planar(f32::MAX, f32::MAX),
                Vector3::planar(f32::MIN_POSITIVE, -f32::MAX),
            ] {
                let n = normalize(v);
                assert_abs_diff_eq!(get_magnitude(n), 1.0, epsilon = 1e-5);
                assert_eq!(n.x.signum(), v.x.signum());
                assert_eq!(n.y.signum(), v.y.signum());
            }
            let n = normalize(Vector3::planar(1e20, 1e20));
            assert_abs_diff_eq!(n.x, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        }

        #[test]
        fn test_angle_at_range_limits() {
            for a in [
                Vector3::planar(1e20, 1e20),
                Vector3::planar(1e-25, 0.0),
                Vector3::planar(f32::MAX, -f32::MAX),
            ] {
                let angle = angle_degrees(a, a);
                assert!(!angle.is_nan());
                assert_abs_diff_eq!(angle, 0.0, epsilon = 0.1);
            }
            let right = angle_degrees(Vector3::planar(1e-25, 0.0), Vector3::planar(0.0, 3e30));
            assert_abs_diff_eq!(right, 90.0, epsilon = 1e-3);
        }

        #[test]
        fn test_angle_of_opposite_vectors() {
            let a = Vector3::planar(0.1, 0.7);
            assert_abs_diff_eq!(angle_degrees(a, -a), 180.0, epsilon = 0.1);
        }

        #[test]
        fn test_cross_is_antisymmetric() {
            for _ in 0..SAMPLES {
                let a = random_vector();
                let b = random_vector();
                let ab = cross(a, b);
                assert_eq!(ab.x, 0.0);
                assert_eq!(ab.y, 0.0);
                assert_abs_diff_eq!(ab.z, -cross(b, a).z, epsilon = 1e-2);
            }
        }

        #[test]
        fn test_operators_match_functions() {
            let a = Vector3::planar(1.5, -2.0);
            let b = Vector3::planar(-0.5, 4.0);
            assert_eq!(a + b, add(a, b));
            assert_eq!(a - b, sub(a, b));
            assert_eq!(a * 3.0, scale(a, 3.0));
        }
    }
}
