//! # Planetary orbital elements
//!
//! This module embeds the JPL approximate Keplerian elements of the eight
//! major planets and evaluates them at a requested time.
//!
//! ## What the table contains
//!
//! For each planet, six elements at the J2000 epoch and their linear rates of
//! change per Julian century:
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless)
//! 3. **I** – Inclination (degrees)
//! 4. **L** – Mean longitude (degrees)
//! 5. **ϖ** – Longitude of perihelion (degrees)
//! 6. **Ω** – Longitude of the ascending node (degrees)
//!
//! The fit is intended for the interval 1800 AD – 2050 AD; outside that range
//! the linear rates degrade gracefully but the accuracy claim no longer holds.
//!
//! ## Provided functionality
//!
//! - [`ElementSet::evaluate`] – advance the elements to a time offset in
//!   Julian centuries and derive the angles needed for position computation,
//!   producing a [`KeplerianElements`] value in radians.
//! - [`Planet::orbital_elements`] – table lookup for a resolved planet.
//!
//! ## Units
//!
//! - Table entries: **AU** and **degrees** (as published).
//! - Evaluated [`KeplerianElements`]: **AU** and **radians**.
//!
//! ## See also
//!
//! - E.M. Standish, *Keplerian Elements for Approximate Positions of the
//!   Major Planets*, JPL/Caltech.
//! - [`crate::ephemeris`] – position pipeline consuming the evaluated elements.

use std::fmt;

use crate::constants::{Degree, JulianCentury, Radian, RADEG};
use crate::kepler::centered_angle;
use crate::planets::Planet;

/// Orbital elements of one planet at J2000 plus their linear rates.
///
/// Units
/// -----
/// * `semi_major_axis`: AU, `semi_major_axis_rate`: AU per Julian century.
/// * `eccentricity`: unitless, `eccentricity_rate`: per Julian century.
/// * Angles (`inclination`, `mean_longitude`, `perihelion_longitude`,
///   `ascending_node_longitude`): degrees, rates in degrees per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSet {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub mean_longitude: Degree,
    pub perihelion_longitude: Degree,
    pub ascending_node_longitude: Degree,
    pub semi_major_axis_rate: f64,
    pub eccentricity_rate: f64,
    pub inclination_rate: Degree,
    pub mean_longitude_rate: Degree,
    pub perihelion_longitude_rate: Degree,
    pub ascending_node_longitude_rate: Degree,
}

/// JPL approximate elements for the eight major planets, heliocentric order.
pub static PLANETARY_ELEMENTS: [ElementSet; 8] = [
    // Mercury
    ElementSet {
        semi_major_axis: 0.38709927,
        eccentricity: 0.20563593,
        inclination: 7.00497902,
        mean_longitude: 252.25032350,
        perihelion_longitude: 77.45779628,
        ascending_node_longitude: 48.33076593,
        semi_major_axis_rate: 0.00000037,
        eccentricity_rate: 0.00001906,
        inclination_rate: -0.00594749,
        mean_longitude_rate: 149472.67411175,
        perihelion_longitude_rate: 0.16047689,
        ascending_node_longitude_rate: -0.12534081,
    },
    // Venus
    ElementSet {
        semi_major_axis: 0.72333566,
        eccentricity: 0.00677672,
        inclination: 3.39467605,
        mean_longitude: 181.97909950,
        perihelion_longitude: 131.60246718,
        ascending_node_longitude: 76.67984255,
        semi_major_axis_rate: 0.00000390,
        eccentricity_rate: -0.00004107,
        inclination_rate: -0.00078890,
        mean_longitude_rate: 58517.81538729,
        perihelion_longitude_rate: 0.00268329,
        ascending_node_longitude_rate: -0.27769418,
    },
    // Earth (Earth-Moon barycenter)
    ElementSet {
        semi_major_axis: 1.00000261,
        eccentricity: 0.01671123,
        inclination: -0.00001531,
        mean_longitude: 100.46457166,
        perihelion_longitude: 102.93768193,
        ascending_node_longitude: 0.0,
        semi_major_axis_rate: 0.00000562,
        eccentricity_rate: -0.00004392,
        inclination_rate: -0.01294668,
        mean_longitude_rate: 35999.37244981,
        perihelion_longitude_rate: 0.32327364,
        ascending_node_longitude_rate: 0.0,
    },
    // Mars
    ElementSet {
        semi_major_axis: 1.52371034,
        eccentricity: 0.09339410,
        inclination: 1.84969142,
        mean_longitude: -4.55343205,
        perihelion_longitude: -23.94362959,
        ascending_node_longitude: 49.55953891,
        semi_major_axis_rate: 0.00001847,
        eccentricity_rate: 0.00007882,
        inclination_rate: -0.00813131,
        mean_longitude_rate: 19140.30268499,
        perihelion_longitude_rate: 0.44441088,
        ascending_node_longitude_rate: -0.29257343,
    },
    // Jupiter
    ElementSet {
        semi_major_axis: 5.20288700,
        eccentricity: 0.04838624,
        inclination: 1.30439695,
        mean_longitude: 34.39644051,
        perihelion_longitude: 14.72847983,
        ascending_node_longitude: 100.47390909,
        semi_major_axis_rate: -0.00011607,
        eccentricity_rate: -0.00013253,
        inclination_rate: -0.00183714,
        mean_longitude_rate: 3034.74612775,
        perihelion_longitude_rate: 0.21252668,
        ascending_node_longitude_rate: 0.20469106,
    },
    // Saturn
    ElementSet {
        semi_major_axis: 9.53667594,
        eccentricity: 0.05386179,
        inclination: 2.48599187,
        mean_longitude: 49.95424423,
        perihelion_longitude: 92.59887831,
        ascending_node_longitude: 113.66242448,
        semi_major_axis_rate: -0.00125060,
        eccentricity_rate: -0.00050991,
        inclination_rate: 0.00193609,
        mean_longitude_rate: 1222.49362201,
        perihelion_longitude_rate: -0.41897216,
        ascending_node_longitude_rate: -0.28867794,
    },
    // Uranus
    ElementSet {
        semi_major_axis: 19.18916464,
        eccentricity: 0.04725744,
        inclination: 0.77263783,
        mean_longitude: 313.23810451,
        perihelion_longitude: 170.95427630,
        ascending_node_longitude: 74.01692503,
        semi_major_axis_rate: -0.00196176,
        eccentricity_rate: -0.00004397,
        inclination_rate: -0.00242939,
        mean_longitude_rate: 428.48202785,
        perihelion_longitude_rate: 0.40805281,
        ascending_node_longitude_rate: 0.04240589,
    },
    // Neptune
    ElementSet {
        semi_major_axis: 30.06992276,
        eccentricity: 0.00859048,
        inclination: 1.77004347,
        mean_longitude: -55.12002969,
        perihelion_longitude: 44.96476227,
        ascending_node_longitude: 131.78422574,
        semi_major_axis_rate: 0.00026291,
        eccentricity_rate: 0.00005105,
        inclination_rate: 0.00035372,
        mean_longitude_rate: 218.45945325,
        perihelion_longitude_rate: -0.32241464,
        ascending_node_longitude_rate: -0.00508664,
    },
];

impl Planet {
    /// Tabulated JPL elements for this planet.
    pub fn orbital_elements(self) -> &'static ElementSet {
        &PLANETARY_ELEMENTS[self.index()]
    }
}

impl ElementSet {
    /// Advance the elements to `t` Julian centuries from J2000 and derive the
    /// angles used by the position pipeline.
    ///
    /// Each element is propagated linearly (`x = x₀ + t·ẋ`), angular elements
    /// are converted to radians, then the argument of perihelion
    /// `ω = ϖ - Ω` and the mean anomaly `M = L - ϖ` (reduced to `(-π, π]`)
    /// are formed.
    ///
    /// Arguments
    /// ---------
    /// * `t`: time offset from J2000 in Julian centuries.
    ///
    /// Return
    /// ------
    /// * The evaluated [`KeplerianElements`], angles in radians.
    pub fn evaluate(&self, t: JulianCentury) -> KeplerianElements {
        let semi_major_axis = self.semi_major_axis + t * self.semi_major_axis_rate;
        let eccentricity = self.eccentricity + t * self.eccentricity_rate;
        let inclination = (self.inclination + t * self.inclination_rate) * RADEG;
        let mean_longitude = (self.mean_longitude + t * self.mean_longitude_rate) * RADEG;
        let perihelion_longitude =
            (self.perihelion_longitude + t * self.perihelion_longitude_rate) * RADEG;
        let ascending_node_longitude =
            (self.ascending_node_longitude + t * self.ascending_node_longitude_rate) * RADEG;

        KeplerianElements {
            epoch: t,
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument: perihelion_longitude - ascending_node_longitude,
            mean_anomaly: centered_angle(mean_longitude - perihelion_longitude),
        }
    }
}

/// Keplerian elements evaluated at a given time.
///
/// Units
/// -----
/// * `epoch`: Julian centuries from J2000.
/// * `semi_major_axis`: Astronomical Units (AU).
/// * `eccentricity`: unitless.
/// * `inclination`: radians.
/// * `ascending_node_longitude`: radians (Ω).
/// * `periapsis_argument`: radians (ω = ϖ - Ω).
/// * `mean_anomaly`: radians (M = L - ϖ), reduced to `(-π, π]`.
///
/// See also
/// --------
/// * [`ElementSet::evaluate`] – Produces this set from the static table.
/// * [`KeplerianElements::heliocentric_position`] – Position pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct KeplerianElements {
    pub epoch: JulianCentury,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Keplerian Elements @ T (Julian centuries from J2000): {:+.6}",
            self.epoch
        )?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (ascending node long.)  = {:.6} rad",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (periapsis argument)    = {:.6} rad",
            self.periapsis_argument
        )?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.6} rad",
            self.mean_anomaly
        )
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_table_spot_values() {
        let mercury = Planet::Mercury.orbital_elements();
        assert_eq!(mercury.semi_major_axis, 0.38709927);
        assert_eq!(mercury.mean_longitude_rate, 149472.67411175);

        let earth = Planet::Earth.orbital_elements();
        assert_eq!(earth.ascending_node_longitude, 0.0);
        assert_eq!(earth.ascending_node_longitude_rate, 0.0);

        let neptune = Planet::Neptune.orbital_elements();
        assert_eq!(neptune.mean_longitude, -55.12002969);
        assert_eq!(neptune.ascending_node_longitude_rate, -0.00508664);
    }

    #[test]
    fn test_evaluate_at_j2000() {
        let earth = Planet::Earth.orbital_elements().evaluate(0.0);

        assert_eq!(earth.epoch, 0.0);
        assert_eq!(earth.semi_major_axis, 1.00000261);
        assert_eq!(earth.eccentricity, 0.01671123);
        assert_eq!(earth.inclination, -0.00001531 * RADEG);
        assert_eq!(earth.ascending_node_longitude, 0.0);
        assert_relative_eq!(
            earth.periapsis_argument,
            102.93768193 * RADEG,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            earth.mean_anomaly,
            (100.46457166 - 102.93768193) * RADEG,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_evaluate_linear_rates() {
        let jupiter = Planet::Jupiter.orbital_elements().evaluate(1.0);
        assert_relative_eq!(
            jupiter.semi_major_axis,
            5.20288700 - 0.00011607,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            jupiter.eccentricity,
            0.04838624 - 0.00013253,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_mean_anomaly_stays_reduced() {
        // Mercury accumulates ~415 revolutions per century in mean longitude.
        for planet in Planet::ALL {
            for t in [-2.0, -0.5, 0.0, 0.171, 5.0] {
                let elements = planet.orbital_elements().evaluate(t);
                assert!(
                    elements.mean_anomaly > -PI && elements.mean_anomaly <= PI,
                    "mean anomaly {} out of range for {planet} at T = {t}",
                    elements.mean_anomaly
                );
            }
        }
    }
}
