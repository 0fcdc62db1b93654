use thiserror::Error;

/// Errors raised by the planet position routines.
///
/// All variants are synchronous, caller-input failures (or a solver failure):
/// the computation is pure and stateless, so callers recover by re-invoking
/// with corrected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HelioposError {
    /// Numeric planet designator is fractional beyond the accepted tolerance
    /// or falls outside the 0-indexed range [0, 7].
    #[error("Invalid planet index: {0} (must be a whole number between 0 and 7)")]
    InvalidPlanetIndex(f64),

    /// String planet designator matches none of the eight canonical
    /// lowercase planet names.
    #[error("Unknown planet name: {0}")]
    UnknownPlanetName(String),

    /// Planet designator is neither a usable number nor a name
    /// (e.g. a NaN or infinite index).
    #[error("Planet designator must be an integer index or a planet name")]
    InvalidPlanetType,

    /// The Kepler equation solver reached its iteration cap without the
    /// Newton step shrinking below tolerance.
    #[error("Kepler solver did not converge after {iterations} iterations (eccentricity = {eccentricity})")]
    SolverDidNotConverge {
        iterations: usize,
        eccentricity: f64,
    },
}
