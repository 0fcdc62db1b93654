//! # Constants and type definitions for Heliopos
//!
//! This module centralizes the **numeric constants** and **common type definitions**
//! used throughout the `heliopos` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians)
//! - Epoch constants tying civil time scales to the element polynomials
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the element table,
//! time normalization and the reference frame rotations.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// MJD of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const MJD_UNIX_EPOCH: f64 = 40587.0;

/// MJD of 2000-01-01 00:00:00, the Julian-century origin for Unix-time input.
/// Half a day before the J2000.0 noon epoch; the element fit is quoted against
/// this midnight reference.
pub const MJD_2000_MIDNIGHT: f64 = 51544.0;

/// Mean obliquity of the ecliptic at J2000.0 in degrees, fixed value used for
/// the ecliptic ↔ equatorial (ICRF) rotation
pub const OBLIQUITY_J2000: Degree = 23.43928;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Time offset in Julian centuries (36525 days) from the J2000 origin
pub type JulianCentury = f64;
/// Fractional calendar year (2000.0 = J2000.0 by convention)
pub type FractionalYear = f64;
