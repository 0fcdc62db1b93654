//! # Planet identifiers
//!
//! This module defines the [`Planet`] enumeration of the eight major planets
//! and the polymorphic [`PlanetId`] designator accepted by the public position
//! routines.
//!
//! ## Overview
//!
//! - [`Planet`] – strongly-typed planet, 0-indexed from the Sun
//! - [`PlanetId`] – designator built from an integer, a float index or a name,
//!   validated by [`PlanetId::resolve`]
//!
//! A numeric designator must be a whole number in [0, 7] (a float is accepted
//! when it lies within 1e-4 of a whole number). A name must match one of the
//! canonical lowercase names exactly; matching is case-sensitive.

use std::fmt;
use std::str::FromStr;

use crate::heliopos_errors::HelioposError;

/// Canonical lowercase planet names, in heliocentric order.
pub const PLANET_NAMES: [&str; 8] = [
    "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
];

/// Maximum distance from a whole number for a float index to be accepted.
const INDEX_TOLERANCE: f64 = 1e-4;

/// The eight major planets, 0-indexed from the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury = 0,
    Venus = 1,
    Earth = 2,
    Mars = 3,
    Jupiter = 4,
    Saturn = 5,
    Uranus = 6,
    Neptune = 7,
}

impl Planet {
    /// All planets in heliocentric order.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// 0-based heliocentric index (Mercury = 0 … Neptune = 7).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        PLANET_NAMES[self as usize]
    }

    /// Planet from a 0-based heliocentric index.
    ///
    /// Arguments
    /// ---------
    /// * `index`: position from the Sun, 0 (Mercury) to 7 (Neptune).
    ///
    /// Return
    /// ------
    /// * The matching [`Planet`], or
    ///   [`HelioposError::InvalidPlanetIndex`] when out of range.
    pub fn from_index(index: usize) -> Result<Planet, HelioposError> {
        Planet::ALL
            .get(index)
            .copied()
            .ok_or(HelioposError::InvalidPlanetIndex(index as f64))
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Planet {
    type Err = HelioposError;

    /// Parse a planet from its canonical lowercase name (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLANET_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|idx| Planet::ALL[idx])
            .ok_or_else(|| HelioposError::UnknownPlanetName(s.to_string()))
    }
}

/// Polymorphic planet designator.
///
/// This can be:
/// - A numeric 0-based index (e.g. `2` or `2.0` for Earth)
/// - A canonical lowercase name (e.g. `"earth"`)
///
/// Validation happens in [`PlanetId::resolve`]; building a `PlanetId` never
/// fails, so invalid designators surface as errors only when resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanetId {
    /// Numeric 0-based index, validated on resolution.
    Index(f64),
    /// Planet name, matched exactly against the canonical lowercase names.
    Name(String),
}

impl PlanetId {
    /// Resolve the designator to a [`Planet`].
    ///
    /// Return
    /// ------
    /// * The designated planet, or one of:
    ///     - [`HelioposError::InvalidPlanetType`] for a non-finite numeric index,
    ///     - [`HelioposError::InvalidPlanetIndex`] for a fractional index
    ///       (beyond 1e-4) or an index outside [0, 7],
    ///     - [`HelioposError::UnknownPlanetName`] for an unmatched name.
    pub fn resolve(&self) -> Result<Planet, HelioposError> {
        match self {
            PlanetId::Index(index) => {
                if !index.is_finite() {
                    return Err(HelioposError::InvalidPlanetType);
                }
                let rounded = index.round();
                if (index - rounded).abs() > INDEX_TOLERANCE || !(0.0..=7.0).contains(&rounded) {
                    return Err(HelioposError::InvalidPlanetIndex(*index));
                }
                Planet::from_index(rounded as usize)
            }
            PlanetId::Name(name) => name.parse(),
        }
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanetId::Index(index) => write!(f, "{index}"),
            PlanetId::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<Planet> for PlanetId {
    fn from(planet: Planet) -> Self {
        PlanetId::Index(planet.index() as f64)
    }
}

impl From<u32> for PlanetId {
    fn from(index: u32) -> Self {
        PlanetId::Index(index as f64)
    }
}

impl From<i32> for PlanetId {
    fn from(index: i32) -> Self {
        PlanetId::Index(index as f64)
    }
}

impl From<usize> for PlanetId {
    fn from(index: usize) -> Self {
        PlanetId::Index(index as f64)
    }
}

impl From<f64> for PlanetId {
    fn from(index: f64) -> Self {
        PlanetId::Index(index)
    }
}

impl From<&str> for PlanetId {
    fn from(name: &str) -> Self {
        PlanetId::Name(name.to_string())
    }
}

impl From<String> for PlanetId {
    fn from(name: String) -> Self {
        PlanetId::Name(name)
    }
}
