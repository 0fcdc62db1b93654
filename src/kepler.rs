//! # Kepler's equation
//!
//! Newton resolution of the elliptic Kepler equation `M = E - e·sin(E)`,
//! together with the angle normalization helpers shared by the element
//! evaluation.
//!
//! ## Overview
//!
//! - [`solve_keplers_equation`] – eccentric anomaly from mean anomaly and eccentricity
//! - [`principal_angle`] – wrap an angle to `[0, 2π)`
//! - [`centered_angle`] – wrap an angle to `(-π, π]`
//!
//! ## Example
//!
//! ```rust, no_run
//! use heliopos::kepler::solve_keplers_equation;
//!
//! let ecc_anom = solve_keplers_equation(1.0, 0.0167)?;
//! # Ok::<(), heliopos::heliopos_errors::HelioposError>(())
//! ```

use super::constants::{Radian, DPI};
use crate::heliopos_errors::HelioposError;
use std::f64::consts::PI;

/// Returns the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Returns an angle in radians reduced to (-π, π].
pub fn centered_angle(a: Radian) -> Radian {
    let a = principal_angle(a);
    if a > PI {
        a - DPI
    } else {
        a
    }
}

/// Solve the elliptic Kepler equation `M = E - e·sin(E)` for the eccentric anomaly.
///
/// Newton–Raphson iteration starting from `E₀ = M + sin(M)`, stopping once the
/// Newton step falls below an absolute tolerance of 1e-6 radians. The final
/// sub-tolerance step is applied to the returned value, not discarded.
///
/// The iteration count is capped at 100. Inputs outside the elliptic domain
/// (eccentricity at or beyond 1, non-finite anomalies) can defeat the Newton
/// update and exhaust the cap; those return
/// [`HelioposError::SolverDidNotConverge`] instead of looping forever. For
/// planetary eccentricities (e < 0.3) the cap is never reached.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in radians.
/// * `eccentricity`: orbital eccentricity e, 0 ≤ e < 1.
///
/// Return
/// ------
/// * The eccentric anomaly E in radians, satisfying `M = E - e·sin(E)` to
///   within the step tolerance.
///
/// See also
/// --------
/// * [`centered_angle`] – Mean anomaly reduction applied upstream.
pub fn solve_keplers_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
) -> Result<Radian, HelioposError> {
    const TOL: f64 = 1.0e-6;
    const JMAX: usize = 100;

    let mut ecc_anom = mean_anomaly + mean_anomaly.sin();

    for _ in 0..JMAX {
        let residual = mean_anomaly - (ecc_anom - eccentricity * ecc_anom.sin());
        let delta = residual / (1.0 - eccentricity * ecc_anom.cos());
        ecc_anom += delta;

        if delta.abs() < TOL {
            return Ok(ecc_anom);
        }
    }

    Err(HelioposError::SolverDidNotConverge {
        iterations: JMAX,
        eccentricity,
    })
}
