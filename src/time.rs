use hifitime::Epoch;

use crate::constants::{
    FractionalYear, JulianCentury, MJD, MJD_2000_MIDNIGHT, MJD_UNIX_EPOCH, SECONDS_PER_DAY, T2000,
};

/// Transformation from a fractional calendar year to Julian centuries from J2000.
///
/// Purely linear: `T = (t - 2000) / 100`, with no leap-year or calendar
/// correction. `t = 2000.0` maps to `T = 0`.
///
/// Argument
/// --------
/// * `t`: fractional calendar year (e.g. 2017.101)
///
/// Return
/// ------
/// * the time offset in Julian centuries used by the element polynomials
pub fn julian_centuries_from_year(t: FractionalYear) -> JulianCentury {
    (t - 2000.0) / 100.0
}

/// Transformation from milliseconds since the Unix epoch to modified julian date (MJD)
///
/// Argument
/// --------
/// * `millisecs`: milliseconds elapsed since 1970-01-01 00:00:00 UTC
///
/// Return
/// ------
/// * the corresponding modified julian date
pub fn mjd_from_unix_millis(millisecs: f64) -> MJD {
    millisecs / (SECONDS_PER_DAY * 1000.0) + MJD_UNIX_EPOCH
}

/// Transformation from **seconds** since the Unix epoch to Julian centuries.
///
/// The argument is expected in seconds and is scaled to milliseconds
/// internally before the MJD conversion; passing milliseconds here yields
/// times a thousandfold in the future. The century origin is
/// 2000-01-01 00:00 (MJD 51544.0), half a day before the J2000.0 noon epoch,
/// matching the reference used by the element fit for Unix-time input.
///
/// Argument
/// --------
/// * `t`: seconds elapsed since 1970-01-01 00:00:00 UTC
///
/// Return
/// ------
/// * the time offset in Julian centuries used by the element polynomials
pub fn julian_centuries_from_unix_seconds(t: f64) -> JulianCentury {
    let mjd = mjd_from_unix_millis(t * 1000.0);
    (mjd - MJD_2000_MIDNIGHT) / 36525.0
}

/// Transformation from an [`hifitime::Epoch`] to Julian centuries from J2000.0 (TT).
///
/// Argument
/// --------
/// * `epoch`: the instant to convert
///
/// Return
/// ------
/// * the time offset in Julian centuries from the J2000.0 noon epoch
pub fn julian_centuries_from_epoch(epoch: Epoch) -> JulianCentury {
    (epoch.to_mjd_tt_days() - T2000) / 36525.0
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use hifitime::TimeScale;

    #[test]
    fn test_julian_centuries_from_year() {
        assert_eq!(julian_centuries_from_year(2000.0), 0.0);
        assert_eq!(julian_centuries_from_year(2100.0), 1.0);
        assert_eq!(julian_centuries_from_year(1950.0), -0.5);
        assert_relative_eq!(
            julian_centuries_from_year(2017.101),
            0.17101,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mjd_from_unix_millis() {
        assert_eq!(mjd_from_unix_millis(0.0), 40587.0);
        // 2000-01-01 00:00:00 UTC, 10957 days after the Unix epoch.
        assert_eq!(mjd_from_unix_millis(946_684_800_000.0), 51544.0);
    }

    #[test]
    fn test_julian_centuries_from_unix_seconds() {
        assert_eq!(julian_centuries_from_unix_seconds(946_684_800.0), 0.0);
        assert_eq!(
            julian_centuries_from_unix_seconds(0.0),
            -10957.0 / 36525.0
        );
    }

    #[test]
    fn test_julian_centuries_from_epoch() {
        let j2000 = Epoch::from_gregorian(2000, 1, 1, 12, 0, 0, 0, TimeScale::TT);
        assert_abs_diff_eq!(julian_centuries_from_epoch(j2000), 0.0, epsilon = 1e-12);

        // 2100-01-01 12:00 TT is exactly one Julian century (36525 days) past J2000.0.
        let one_century = Epoch::from_gregorian(2100, 1, 1, 12, 0, 0, 0, TimeScale::TT);
        assert_abs_diff_eq!(
            julian_centuries_from_epoch(one_century),
            1.0,
            epsilon = 1e-12
        );
    }
}
