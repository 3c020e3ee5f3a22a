//! # VSOP87 theory catalogue: bodies, versions and their fixed properties
//!
//! The VSOP87 solution exists in six variants, each covering a fixed set of
//! bodies and producing one of three coordinate representations in one of two
//! inertial frames. This module defines the corresponding enums and the
//! **availability oracle**: the per-version body coverage and the per-version
//! mapping to coordinate kind, coordinate reference and initial frame.
//!
//! The mappings are data, not behavior; they never change at runtime and are
//! shared by the evaluator, the result type and the conversion layer.

use serde::{Deserialize, Serialize};

use crate::constants::{
    GM_EARTH_MOON, GM_JUPITER, GM_MARS, GM_MERCURY, GM_NEPTUNE, GM_SATURN, GM_URANUS, GM_VENUS,
};

/// A solar-system body covered by at least one VSOP87 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VSOPBody {
    SUN = 0,
    MERCURY = 1,
    VENUS = 2,
    EARTH = 3,
    MARS = 4,
    JUPITER = 5,
    SATURN = 6,
    URANUS = 7,
    NEPTUNE = 8,
    /// Earth–Moon barycenter
    EMB = 9,
}

impl VSOPBody {
    /// Gravitational parameter GM of the body in au³/day².
    ///
    /// The values are the `vsop87.f` data block. EARTH and EMB share the
    /// Earth–Moon system value, as the elliptic solution does. The Sun has no
    /// planetary GM contribution; it only ever appears in the barycentric
    /// rectangular variant, which never goes through the elliptic recovery.
    pub fn gm(&self) -> f64 {
        match self {
            VSOPBody::SUN => 0.0,
            VSOPBody::MERCURY => GM_MERCURY,
            VSOPBody::VENUS => GM_VENUS,
            VSOPBody::EARTH | VSOPBody::EMB => GM_EARTH_MOON,
            VSOPBody::MARS => GM_MARS,
            VSOPBody::JUPITER => GM_JUPITER,
            VSOPBody::SATURN => GM_SATURN,
            VSOPBody::URANUS => GM_URANUS,
            VSOPBody::NEPTUNE => GM_NEPTUNE,
        }
    }
}

/// One of the six fixed variants of the planetary solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VSOPVersion {
    /// Elliptic elements, dynamical equinox and ecliptic J2000
    VSOP87 = 0,
    /// Heliocentric rectangular coordinates, J2000
    VSOP87A = 1,
    /// Heliocentric spherical coordinates, J2000
    VSOP87B = 2,
    /// Heliocentric rectangular coordinates, equinox of date
    VSOP87C = 3,
    /// Heliocentric spherical coordinates, equinox of date
    VSOP87D = 4,
    /// Barycentric rectangular coordinates, J2000
    VSOP87E = 5,
}

/// Coordinate representation of a raw 6-component result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateKind {
    /// (a, λ, k, h, q, p) orbital elements
    Elliptic,
    /// (x, y, z, dx, dy, dz) in au and au/day
    Rectangular,
    /// (l, b, r, dl, db, dr) in radians, au and per-day rates
    Spherical,
}

/// Origin and plane the coordinates are referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateReference {
    EclipticHeliocentric,
    EclipticBarycentric,
    /// Heliocentric, after rotation into the ICRS equatorial frame
    EquatorialHeliocentric,
}

/// Inertial frame tag of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    /// Dynamical equinox and ecliptic J2000
    DynamicalJ2000,
    /// Dynamical equinox and ecliptic of date (no defined mapping to ICRS)
    DynamicalDate,
    /// ICRS equatorial frame J2000
    ICRSJ2000,
}

impl VSOPVersion {
    /// Bodies covered by this version.
    ///
    /// Coverage differs per version: the elliptic solution replaces EARTH by
    /// the Earth–Moon barycenter, and only the barycentric variant carries
    /// the Sun.
    pub fn bodies(&self) -> &'static [VSOPBody] {
        use VSOPBody::*;
        match self {
            VSOPVersion::VSOP87 => &[
                MERCURY, VENUS, MARS, JUPITER, SATURN, URANUS, NEPTUNE, EMB,
            ],
            VSOPVersion::VSOP87A => &[
                MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE, EMB,
            ],
            VSOPVersion::VSOP87B | VSOPVersion::VSOP87C | VSOPVersion::VSOP87D => &[
                MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE,
            ],
            VSOPVersion::VSOP87E => &[
                SUN, MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE,
            ],
        }
    }

    /// Availability oracle: whether `body` is covered by this version.
    pub fn supports(&self, body: VSOPBody) -> bool {
        self.bodies().contains(&body)
    }

    /// Coordinate representation this version produces.
    pub fn coordinate_kind(&self) -> CoordinateKind {
        match self {
            VSOPVersion::VSOP87 => CoordinateKind::Elliptic,
            VSOPVersion::VSOP87A | VSOPVersion::VSOP87C | VSOPVersion::VSOP87E => {
                CoordinateKind::Rectangular
            }
            VSOPVersion::VSOP87B | VSOPVersion::VSOP87D => CoordinateKind::Spherical,
        }
    }

    /// Coordinate reference this version produces.
    pub fn coordinate_reference(&self) -> CoordinateReference {
        match self {
            VSOPVersion::VSOP87E => CoordinateReference::EclipticBarycentric,
            _ => CoordinateReference::EclipticHeliocentric,
        }
    }

    /// Inertial frame a raw result of this version is expressed in.
    pub fn reference_frame(&self) -> ReferenceFrame {
        match self {
            VSOPVersion::VSOP87C | VSOPVersion::VSOP87D => ReferenceFrame::DynamicalDate,
            _ => ReferenceFrame::DynamicalJ2000,
        }
    }
}
