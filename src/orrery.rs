//! # `Orrery`: the evaluation façade
//!
//! [`Orrery`] owns a loaded [`Catalog`] and exposes the one operation the
//! crate exists for: evaluate a (version, body) pair at an instant and get
//! back a tagged [`VSOPResult`]. Everything downstream (representation
//! changes, frame reassignment, typed views) hangs off the result itself.
//!
//! ## Usage
//!
//! ```no_run
//! use orrery::orrery::Orrery;
//! use orrery::series::Catalog;
//! use orrery::theory::{VSOPBody, VSOPVersion};
//! use orrery::timescale::VSOPTime;
//! use chrono::NaiveDate;
//!
//! # fn load_catalog() -> Catalog { Catalog::new() }
//! let orrery = Orrery::new(load_catalog());
//! let time = VSOPTime::from_utc(
//!     NaiveDate::from_ymd_opt(2000, 1, 1)
//!         .unwrap()
//!         .and_hms_opt(12, 0, 0)
//!         .unwrap(),
//! );
//! let earth = orrery
//!     .evaluate(VSOPVersion::VSOP87D, VSOPBody::EARTH, time)
//!     .unwrap();
//! println!("r = {} au", earth.as_spherical().unwrap().radius);
//! ```

use crate::evaluator::{evaluate, evaluate_simd};
use crate::orrery_errors::OrreryError;
use crate::series::Catalog;
use crate::theory::{VSOPBody, VSOPVersion};
use crate::timescale::VSOPTime;
use crate::vsop_result::VSOPResult;

/// Evaluation engine over a loaded series catalog.
///
/// The catalog is immutable once handed over; `Orrery` is `Sync` and a
/// single instance can serve evaluations from many threads.
#[derive(Debug, Clone)]
pub struct Orrery {
    catalog: Catalog,
}

impl Orrery {
    pub fn new(catalog: Catalog) -> Self {
        Orrery { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluate a (version, body) pair at an instant, scalar path.
    ///
    /// Arguments
    /// ---------
    /// * `version`: the theory variant to evaluate.
    /// * `body`: the target body.
    /// * `time`: the instant; the series argument is its TDB Julian Date.
    ///
    /// Return
    /// ------
    /// * the tagged result, or [`OrreryError::UnsupportedCombination`] when
    ///   the pair is outside the theory coverage or absent from the catalog.
    pub fn evaluate(
        &self,
        version: VSOPVersion,
        body: VSOPBody,
        time: VSOPTime,
    ) -> Result<VSOPResult, OrreryError> {
        let table = self.table(version, body)?;
        let raw = evaluate(table, time.julian_date());
        Ok(VSOPResult::from_raw(version, body, time, raw))
    }

    /// Evaluate through the SIMD-batched path.
    ///
    /// Same contract as [`Orrery::evaluate`]; outputs agree with the scalar
    /// path within 1e-9 relative.
    pub fn evaluate_simd(
        &self,
        version: VSOPVersion,
        body: VSOPBody,
        time: VSOPTime,
    ) -> Result<VSOPResult, OrreryError> {
        let table = self.table(version, body)?;
        let raw = evaluate_simd(table, time.julian_date());
        Ok(VSOPResult::from_raw(version, body, time, raw))
    }

    fn table(
        &self,
        version: VSOPVersion,
        body: VSOPBody,
    ) -> Result<&crate::series::SeriesTable, OrreryError> {
        if !version.supports(body) {
            return Err(OrreryError::UnsupportedCombination { version, body });
        }
        self.catalog.get(version, body)
    }
}
