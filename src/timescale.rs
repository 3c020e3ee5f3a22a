//! # Time scales and Julian Date conversions
//!
//! The series are defined against TDB (Barycentric Dynamical Time). Civil
//! instants enter as UTC and walk the linear chain
//!
//! ```text
//! UTC --(+37 s)--> TAI --(+32.184 s)--> TT --(+0)--> TDB
//! ```
//!
//! one fixed additive offset at a time; the reverse direction applies the
//! offsets with opposite sign, so the chain is exactly invertible. The
//! TT/TDB difference (periodic, < 2 ms) is treated as negligible.
//!
//! Julian Dates are obtained through the 1899-12-30T00:00:00 day-count
//! origin: `JD = days since that origin + 2415018.5`. All offsets are whole
//! milliseconds, so the chain arithmetic is exact in the nanosecond-resolution
//! civil representation.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{
    JulianDate, JD_DAY_COUNT_EPOCH, SECONDS_PER_DAY, TAI_MINUS_UTC_SECONDS,
    TT_MINUS_TAI_MILLISECONDS,
};

/// A time scale of the UTC → TAI → TT → TDB chain, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeScale {
    UTC = 0,
    TAI = 1,
    TT = 2,
    TDB = 3,
}

/// Offset added when stepping up from chain position `index` to `index + 1`.
fn step_offset(index: usize) -> Duration {
    match index {
        0 => Duration::seconds(TAI_MINUS_UTC_SECONDS),
        1 => Duration::milliseconds(TT_MINUS_TAI_MILLISECONDS),
        _ => Duration::zero(),
    }
}

/// Convert a civil instant between any two scales of the chain.
///
/// Walks the chain forward or backward, applying or reversing the
/// intermediate offsets. For any `t`, converting to a scale and back
/// reproduces `t` exactly.
///
/// Arguments
/// ---------
/// * `instant`: the civil instant expressed in `from`.
/// * `from`: source time scale.
/// * `to`: target time scale.
///
/// Return
/// ------
/// * the same instant expressed in `to`.
pub fn change_scale(instant: NaiveDateTime, from: TimeScale, to: TimeScale) -> NaiveDateTime {
    let mut t = instant;
    let mut position = from as usize;
    let target = to as usize;
    while position < target {
        t += step_offset(position);
        position += 1;
    }
    while position > target {
        position -= 1;
        t -= step_offset(position);
    }
    t
}

/// Julian Date of a civil instant (days since the 1899-12-30 origin plus
/// 2415018.5). The instant is interpreted in whatever scale the caller put
/// it in; the scale tag travels separately.
pub fn to_julian_date(instant: NaiveDateTime) -> JulianDate {
    let delta = instant - day_count_epoch();
    let days =
        delta.num_seconds() as f64 / SECONDS_PER_DAY + delta.subsec_nanos() as f64 * 1e-9 / SECONDS_PER_DAY;
    days + JD_DAY_COUNT_EPOCH
}

/// Inverse of [`to_julian_date`]; reproduces the calendar instant within
/// floating rounding of the Julian Date (about 1e-9 day).
pub fn from_julian_date(jd: JulianDate) -> NaiveDateTime {
    let seconds = (jd - JD_DAY_COUNT_EPOCH) * SECONDS_PER_DAY;
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as i64;
    day_count_epoch() + Duration::seconds(whole as i64) + Duration::nanoseconds(nanos)
}

fn day_count_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A civil instant with its projections onto the chain scales.
///
/// Stores UTC; every accessor walks the chain on demand. The downstream
/// calculation is always driven by [`VSOPTime::julian_date`], the TDB
/// instant expressed as a Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VSOPTime {
    utc: NaiveDateTime,
}

impl VSOPTime {
    /// Wrap an instant already expressed in UTC.
    pub fn from_utc(utc: NaiveDateTime) -> Self {
        VSOPTime { utc }
    }

    /// Wrap an instant expressed in any chain scale.
    pub fn from_scale(instant: NaiveDateTime, scale: TimeScale) -> Self {
        VSOPTime {
            utc: change_scale(instant, scale, TimeScale::UTC),
        }
    }

    pub fn utc(&self) -> NaiveDateTime {
        self.utc
    }

    pub fn tai(&self) -> NaiveDateTime {
        change_scale(self.utc, TimeScale::UTC, TimeScale::TAI)
    }

    pub fn tt(&self) -> NaiveDateTime {
        change_scale(self.utc, TimeScale::UTC, TimeScale::TT)
    }

    pub fn tdb(&self) -> NaiveDateTime {
        change_scale(self.utc, TimeScale::UTC, TimeScale::TDB)
    }

    /// Julian Date of the TDB projection, the argument of every series.
    pub fn julian_date(&self) -> JulianDate {
        to_julian_date(self.tdb())
    }
}
