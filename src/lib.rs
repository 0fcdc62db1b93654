pub mod constants;
pub mod elements;
pub mod ephemeris;
pub mod heliopos_errors;
pub mod kepler;
pub mod planets;
pub mod ref_system;
pub mod time;
