//! # Reference frame rotations
//!
//! Rotation matrices connecting the frames used by the position pipeline.
//!
//! ## Overview
//!
//! - [`rotmt`] – elementary rotation about a coordinate axis
//! - [`perifocal_to_ecliptic`] – orbital plane → ecliptic J2000, the
//!   composite `R_z(Ω)·R_x(I)·R_z(ω)`
//! - [`ecliptic_to_equatorial`] – ecliptic J2000 → equatorial (ICRF), a
//!   fixed rotation about the x-axis by the J2000 mean obliquity
//!
//! All rotations are active and follow the right-hand rule; applying a
//! matrix to a column vector expresses that vector in the target frame.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Radian, OBLIQUITY_J2000, RADEG};

/// Elementary active rotation matrix about one coordinate axis.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians.
/// * `k`: axis index, 0 (x), 1 (y) or 2 (z).
///
/// Return
/// ------
/// * The 3×3 rotation matrix.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation from the perifocal (orbital) plane to the ecliptic J2000 frame.
///
/// The composite `R_z(Ω)·R_x(I)·R_z(ω)`: the perifocal x-axis points at the
/// perihelion, and the product carries `(x_p, y_p, 0)` into heliocentric
/// ecliptic coordinates.
///
/// Arguments
/// ---------
/// * `node`: longitude of the ascending node Ω in radians.
/// * `inclination`: orbital inclination I in radians.
/// * `periapsis_argument`: argument of perihelion ω in radians.
///
/// Return
/// ------
/// * The 3×3 rotation matrix.
pub fn perifocal_to_ecliptic(
    node: Radian,
    inclination: Radian,
    periapsis_argument: Radian,
) -> Matrix3<f64> {
    rotmt(node, 2) * rotmt(inclination, 0) * rotmt(periapsis_argument, 2)
}

/// Rotation from the ecliptic J2000 frame to the equatorial (ICRF) frame.
///
/// A rotation about the x-axis by the fixed J2000 mean obliquity
/// ε = 23.43928°: `x' = x`, `y' = cos(ε)·y - sin(ε)·z`,
/// `z' = sin(ε)·y + cos(ε)·z`.
///
/// Return
/// ------
/// * The 3×3 rotation matrix.
pub fn ecliptic_to_equatorial() -> Matrix3<f64> {
    rotmt(OBLIQUITY_J2000 * RADEG, 0)
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_matrix_eq(a: &Matrix3<f64>, b: &Matrix3<f64>, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(a[(i, j)], b[(i, j)], epsilon = tol);
            }
        }
    }

    #[test]
    fn test_rotmt_identity() {
        for k in 0..3 {
            assert_eq!(rotmt(0.0, k), Matrix3::identity());
        }
    }

    #[test]
    fn test_rotmt_quarter_turn() {
        // Active right-handed rotation: +90° about z carries x̂ onto ŷ.
        let rotated = rotmt(FRAC_PI_2, 2) * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perifocal_matches_closed_form() {
        let (periapsis_arg, node, inc) = (0.3_f64, 1.1_f64, 0.2_f64);
        let (x, y) = (0.7, -1.3);

        let pos = perifocal_to_ecliptic(node, inc, periapsis_arg) * Vector3::new(x, y, 0.0);

        let (sin_w, cos_w) = periapsis_arg.sin_cos();
        let (sin_node, cos_node) = node.sin_cos();
        let cos_inc = inc.cos();
        let x_ecl = (cos_w * cos_node - sin_w * sin_node * cos_inc) * x
            - (sin_w * cos_node + cos_w * sin_node * cos_inc) * y;
        let y_ecl = (cos_w * sin_node + sin_w * cos_node * cos_inc) * x
            + (-sin_w * sin_node + cos_w * cos_node * cos_inc) * y;
        let z_ecl = inc.sin() * (sin_w * x + cos_w * y);

        assert_abs_diff_eq!(pos.x, x_ecl, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.y, y_ecl, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.z, z_ecl, epsilon = 1e-12);
    }

    #[test]
    fn test_rotations_are_orthonormal() {
        let matrices = [
            perifocal_to_ecliptic(1.1, 0.2, 0.3),
            ecliptic_to_equatorial(),
        ];
        for rot in matrices {
            assert_matrix_eq(&(rot.transpose() * rot), &Matrix3::identity(), 1e-12);
        }
    }

    #[test]
    fn test_obliquity_rotation_values() {
        let eps = OBLIQUITY_J2000 * RADEG;
        let rotated = ecliptic_to_equatorial() * Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(rotated.y, eps.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.z, eps.sin(), epsilon = 1e-12);
    }
}
