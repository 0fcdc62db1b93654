//! # Planet position pipeline
//!
//! Heliocentric positions of the eight major planets from the embedded JPL
//! approximate elements.
//!
//! ## Overview
//!
//! - [`position`] – main entry point, polymorphic over the planet designator
//! - [`Planet::position`] – same pipeline for an already resolved planet
//! - [`position_at_epoch`] – entry point for callers holding an [`hifitime::Epoch`]
//! - [`KeplerianElements::heliocentric_position`] – the orbital-plane part of
//!   the pipeline, usable with hand-built element sets
//! - [`PositionOptions`] – the three independent toggles
//!
//! ## Coordinate frames
//!
//! Positions are heliocentric Cartesian vectors in AU. The default frame is
//! the ecliptic J2000 frame; with [`PositionOptions::icrf`] the result is
//! rotated about the x-axis by the fixed J2000 mean obliquity into the
//! equatorial (ICRF) frame.
//!
//! ## Time input
//!
//! The scalar time argument is a fractional calendar year by default
//! (`2000.0` = J2000.0). With [`PositionOptions::unix_time`] it is read as
//! **seconds** since 1970-01-01 00:00:00 UTC.
//!
//! ## Example
//!
//! ```rust, no_run
//! use heliopos::ephemeris::{position, PositionOptions};
//!
//! let pos = position("earth", 2024.5, PositionOptions::default())?;
//! println!("x = {} AU, y = {} AU, z = {} AU", pos.x, pos.y, pos.z);
//!
//! let equatorial = position(4, 2024.5, PositionOptions { icrf: true, ..Default::default() })?;
//! println!("Jupiter, equatorial: {equatorial}");
//! # Ok::<(), heliopos::heliopos_errors::HelioposError>(())
//! ```

use hifitime::Epoch;
use nalgebra::Vector3;

use crate::constants::JulianCentury;
use crate::elements::KeplerianElements;
use crate::heliopos_errors::HelioposError;
use crate::kepler::solve_keplers_equation;
use crate::planets::{Planet, PlanetId};
use crate::ref_system::{ecliptic_to_equatorial, perifocal_to_ecliptic};
use crate::time::{
    julian_centuries_from_epoch, julian_centuries_from_unix_seconds, julian_centuries_from_year,
};

/// Configuration toggles for the position routines.
///
/// All toggles default to `false` and are independent; any combination is
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionOptions {
    /// Approximate the orbit as a circle (`E = M`), skipping the Kepler
    /// solver. Slightly faster, coarser.
    pub circular: bool,
    /// Interpret the time argument as seconds since the Unix epoch instead
    /// of a fractional calendar year.
    pub unix_time: bool,
    /// Return the position in the equatorial (ICRF) frame instead of the
    /// ecliptic J2000 frame.
    pub icrf: bool,
}

impl KeplerianElements {
    /// Heliocentric ecliptic position of a body carrying these elements.
    ///
    /// Solves Kepler's equation for the eccentric anomaly (or takes `E = M`
    /// when `circular`), forms the perifocal coordinates
    /// `x_p = a(cos E - e)`, `y_p = a√(1-e²)·sin E` and rotates them through
    /// [`perifocal_to_ecliptic`].
    ///
    /// Arguments
    /// ---------
    /// * `circular`: use the circular-orbit shortcut instead of the solver.
    ///
    /// Return
    /// ------
    /// * The heliocentric position in the ecliptic J2000 frame (AU).
    ///
    /// See also
    /// --------
    /// * [`solve_keplers_equation`] – The Newton iteration used here.
    pub fn heliocentric_position(&self, circular: bool) -> Result<Vector3<f64>, HelioposError> {
        let ecc_anom = if circular {
            self.mean_anomaly
        } else {
            solve_keplers_equation(self.mean_anomaly, self.eccentricity)?
        };

        let x_p = self.semi_major_axis * (ecc_anom.cos() - self.eccentricity);
        let y_p = self.semi_major_axis
            * (1.0 - self.eccentricity * self.eccentricity).sqrt()
            * ecc_anom.sin();

        let rotation = perifocal_to_ecliptic(
            self.ascending_node_longitude,
            self.inclination,
            self.periapsis_argument,
        );
        Ok(rotation * Vector3::new(x_p, y_p, 0.0))
    }
}

impl Planet {
    /// Heliocentric position of this planet at time `t`.
    ///
    /// Arguments
    /// ---------
    /// * `t`: fractional calendar year, or seconds since the Unix epoch when
    ///   `options.unix_time` is set.
    /// * `options`: frame, orbit and time-interpretation toggles.
    ///
    /// Return
    /// ------
    /// * The heliocentric position in AU, ecliptic J2000 by default or
    ///   equatorial (ICRF) when `options.icrf` is set.
    pub fn position(
        self,
        t: f64,
        options: PositionOptions,
    ) -> Result<Vector3<f64>, HelioposError> {
        let centuries = if options.unix_time {
            julian_centuries_from_unix_seconds(t)
        } else {
            julian_centuries_from_year(t)
        };
        position_at_centuries(self, centuries, options)
    }
}

fn position_at_centuries(
    planet: Planet,
    centuries: JulianCentury,
    options: PositionOptions,
) -> Result<Vector3<f64>, HelioposError> {
    let elements = planet.orbital_elements().evaluate(centuries);
    let pos_ecl = elements.heliocentric_position(options.circular)?;

    if options.icrf {
        Ok(ecliptic_to_equatorial() * pos_ecl)
    } else {
        Ok(pos_ecl)
    }
}

/// Heliocentric position of a planet, polymorphic over the designator.
///
/// The designator may be a 0-based integer index, a float index within 1e-4
/// of a whole number, a canonical lowercase name, or a [`Planet`] value.
///
/// Arguments
/// ---------
/// * `planet`: planet designator, converted into a [`PlanetId`] and resolved.
/// * `t`: fractional calendar year, or seconds since the Unix epoch when
///   `options.unix_time` is set.
/// * `options`: frame, orbit and time-interpretation toggles.
///
/// Return
/// ------
/// * The heliocentric position in AU, or a designator-validation or solver
///   error.
///
/// See also
/// --------
/// * [`PlanetId::resolve`] – Designator validation rules.
/// * [`position_at_epoch`] – Same pipeline from an [`hifitime::Epoch`].
pub fn position(
    planet: impl Into<PlanetId>,
    t: f64,
    options: PositionOptions,
) -> Result<Vector3<f64>, HelioposError> {
    let planet = planet.into().resolve()?;
    planet.position(t, options)
}

/// Heliocentric position of a planet at an [`hifitime::Epoch`].
///
/// The time offset is taken from the epoch (TT scale, J2000.0 noon origin);
/// `options.unix_time` is ignored here. The `circular` and `icrf` toggles
/// behave as in [`position`].
///
/// Arguments
/// ---------
/// * `planet`: planet designator, converted into a [`PlanetId`] and resolved.
/// * `epoch`: the instant of interest.
/// * `options`: frame and orbit toggles.
///
/// Return
/// ------
/// * The heliocentric position in AU.
pub fn position_at_epoch(
    planet: impl Into<PlanetId>,
    epoch: Epoch,
    options: PositionOptions,
) -> Result<Vector3<f64>, HelioposError> {
    let planet = planet.into().resolve()?;
    position_at_centuries(planet, julian_centuries_from_epoch(epoch), options)
}
