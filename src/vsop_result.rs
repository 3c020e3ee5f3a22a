//! # Tagged evaluation results
//!
//! A [`VSOPResult`] couples the raw 6-component vector with everything needed
//! to interpret it: the (version, body) pair it came from, the instant, the
//! coordinate representation, the coordinate reference (origin), and the
//! inertial frame. Conversions return new tagged results and keep the tags
//! consistent, so a state can never silently end up interpreted in the wrong
//! representation or frame.
//!
//! Three families of operations are available:
//! - representation changes ([`VSOPResult::to_rectangular`],
//!   [`VSOPResult::to_spherical`]), exact and always defined;
//! - frame reassignment ([`VSOPResult::with_frame`]), defined only between
//!   dynamical J2000 and ICRS on non-elliptic, non-barycentric states;
//! - typed read-only views ([`VSOPResult::as_elliptic`] and friends), which
//!   name the components without copying convention knowledge to call sites.

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, AuPerDay, Radian, RadianPerDay};
use crate::conversion::{lbr_to_xyz, xyz_to_lbr};
use crate::kepler::ell_to_xyz;
use crate::orrery_errors::OrreryError;
use crate::ref_system::{dynamical_to_icrs, icrs_to_dynamical};
use crate::theory::{CoordinateKind, CoordinateReference, ReferenceFrame, VSOPBody, VSOPVersion};
use crate::timescale::VSOPTime;

/// A raw series evaluation together with its interpretation tags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VSOPResult {
    version: VSOPVersion,
    body: VSOPBody,
    time: VSOPTime,
    coordinate: CoordinateKind,
    reference: CoordinateReference,
    frame: ReferenceFrame,
    variables: [f64; 6],
}

/// Named view of an elliptic result: equinoctial elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticView {
    /// Semi-major axis (au)
    pub a: AstronomicalUnit,
    /// Mean longitude λ (radians, [0, 2π))
    pub lambda: Radian,
    /// e·cos ϖ
    pub k: f64,
    /// e·sin ϖ
    pub h: f64,
    /// sin(i/2)·cos Ω
    pub q: f64,
    /// sin(i/2)·sin Ω
    pub p: f64,
}

/// Named view of a rectangular result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularView {
    pub x: AstronomicalUnit,
    pub y: AstronomicalUnit,
    pub z: AstronomicalUnit,
    pub dx: AuPerDay,
    pub dy: AuPerDay,
    pub dz: AuPerDay,
}

/// Named view of a spherical result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalView {
    /// Longitude (radians, [0, 2π))
    pub longitude: Radian,
    /// Latitude (radians, [−π/2, π/2])
    pub latitude: Radian,
    /// Radius (au)
    pub radius: AstronomicalUnit,
    pub dl: RadianPerDay,
    pub db: RadianPerDay,
    pub dr: AuPerDay,
}

impl VSOPResult {
    /// Tag a raw evaluation with the fixed properties of its version.
    pub fn from_raw(
        version: VSOPVersion,
        body: VSOPBody,
        time: VSOPTime,
        variables: [f64; 6],
    ) -> Self {
        VSOPResult {
            version,
            body,
            time,
            coordinate: version.coordinate_kind(),
            reference: version.coordinate_reference(),
            frame: version.reference_frame(),
            variables,
        }
    }

    pub fn version(&self) -> VSOPVersion {
        self.version
    }

    pub fn body(&self) -> VSOPBody {
        self.body
    }

    pub fn time(&self) -> VSOPTime {
        self.time
    }

    pub fn coordinate(&self) -> CoordinateKind {
        self.coordinate
    }

    pub fn reference(&self) -> CoordinateReference {
        self.reference
    }

    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// The raw components, in the order of the current representation.
    pub fn variables(&self) -> &[f64; 6] {
        &self.variables
    }

    /// Express this result in rectangular coordinates.
    ///
    /// Elliptic elements go through the Kepler recovery; spherical states
    /// through the exact chart change. Reference and frame tags are
    /// unchanged except for the elliptic case, which is heliocentric
    /// dynamical J2000 by construction.
    pub fn to_rectangular(&self) -> VSOPResult {
        let variables = match self.coordinate {
            CoordinateKind::Rectangular => return *self,
            CoordinateKind::Spherical => lbr_to_xyz(&self.variables),
            CoordinateKind::Elliptic => ell_to_xyz(&self.variables, self.body),
        };
        VSOPResult {
            coordinate: CoordinateKind::Rectangular,
            variables,
            ..*self
        }
    }

    /// Express this result in spherical coordinates.
    pub fn to_spherical(&self) -> VSOPResult {
        let variables = match self.coordinate {
            CoordinateKind::Spherical => return *self,
            CoordinateKind::Rectangular => xyz_to_lbr(&self.variables),
            CoordinateKind::Elliptic => xyz_to_lbr(&ell_to_xyz(&self.variables, self.body)),
        };
        VSOPResult {
            coordinate: CoordinateKind::Spherical,
            variables,
            ..*self
        }
    }

    /// Reassign this result to another inertial frame.
    ///
    /// Only the dynamical J2000 ↔ ICRS rotation is defined, and only for
    /// heliocentric position/velocity states: elliptic elements have no
    /// frame rotation and refuse every request, including one naming their
    /// current frame; equinox-of-date states have no fixed mapping to ICRS;
    /// the barycentric reference is left in its ecliptic frame. For
    /// position/velocity states, reassigning to the current frame is the
    /// identity.
    ///
    /// Arguments
    /// ---------
    /// * `target`: the frame to express the state in.
    ///
    /// Return
    /// ------
    /// * the same state tagged and expressed in `target`, or
    ///   [`OrreryError::UnsupportedFrameTransition`].
    pub fn with_frame(&self, target: ReferenceFrame) -> Result<VSOPResult, OrreryError> {
        let unsupported = OrreryError::UnsupportedFrameTransition {
            from: self.frame,
            to: target,
        };
        if self.coordinate == CoordinateKind::Elliptic {
            return Err(unsupported);
        }
        if target == self.frame {
            return Ok(*self);
        }
        if self.frame == ReferenceFrame::DynamicalDate
            || target == ReferenceFrame::DynamicalDate
        {
            return Err(unsupported);
        }
        if self.reference == CoordinateReference::EclipticBarycentric {
            return Err(unsupported);
        }

        // Rotate through the rectangular representation, then restore the
        // original chart.
        let rectangular = self.to_rectangular();
        let (variables, reference) = match (self.frame, target) {
            (ReferenceFrame::DynamicalJ2000, ReferenceFrame::ICRSJ2000) => (
                dynamical_to_icrs(&rectangular.variables),
                CoordinateReference::EquatorialHeliocentric,
            ),
            (ReferenceFrame::ICRSJ2000, ReferenceFrame::DynamicalJ2000) => (
                icrs_to_dynamical(&rectangular.variables),
                CoordinateReference::EclipticHeliocentric,
            ),
            _ => return Err(unsupported),
        };

        let rotated = VSOPResult {
            frame: target,
            reference,
            coordinate: CoordinateKind::Rectangular,
            variables,
            ..*self
        };
        Ok(match self.coordinate {
            CoordinateKind::Spherical => rotated.to_spherical(),
            _ => rotated,
        })
    }

    /// Identity on elliptic results. The theory defines no inverse map from
    /// a position/velocity state back to its elements, so any other
    /// representation yields `None`.
    pub fn to_elliptic(&self) -> Option<VSOPResult> {
        (self.coordinate == CoordinateKind::Elliptic).then_some(*self)
    }

    /// The equinoctial elements, if this result is elliptic.
    pub fn as_elliptic(&self) -> Option<EllipticView> {
        (self.coordinate == CoordinateKind::Elliptic).then(|| EllipticView {
            a: self.variables[0],
            lambda: self.variables[1],
            k: self.variables[2],
            h: self.variables[3],
            q: self.variables[4],
            p: self.variables[5],
        })
    }

    /// The position/velocity components, if this result is rectangular.
    pub fn as_rectangular(&self) -> Option<RectangularView> {
        (self.coordinate == CoordinateKind::Rectangular).then(|| RectangularView {
            x: self.variables[0],
            y: self.variables[1],
            z: self.variables[2],
            dx: self.variables[3],
            dy: self.variables[4],
            dz: self.variables[5],
        })
    }

    /// The angular components and rates, if this result is spherical.
    pub fn as_spherical(&self) -> Option<SphericalView> {
        (self.coordinate == CoordinateKind::Spherical).then(|| SphericalView {
            longitude: self.variables[0],
            latitude: self.variables[1],
            radius: self.variables[2],
            dl: self.variables[3],
            db: self.variables[4],
            dr: self.variables[5],
        })
    }
}
