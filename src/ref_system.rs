//! # Inertial frame rotation: dynamical ecliptic J2000 ↔ ICRS
//!
//! The theory expresses its coordinates in the dynamical ecliptic and
//! equinox J2000 frame. The rotation into the ICRS equatorial frame composes
//! the equinox offset φ about the pole with the obliquity tilt ε about the
//! equinox:
//!
//! ```text
//! ε = 23° 26′ 21.41136″        (mean obliquity at J2000)
//! φ = −0.05188″                (equinox offset)
//! ```
//!
//! The matrix is orthogonal; the inverse rotation is its transpose. Both
//! position and velocity components of a state rotate with the same matrix,
//! since the frames are inertial.
//!
//! The bias φ is applied about the ecliptic pole before the obliquity tilt
//! (R_x(ε)·R_z(φ)); formulations that apply their bias about the equatorial
//! pole instead quote a different constant for it.

use nalgebra::{Matrix3, Vector3};

/// Arcseconds to radians.
const RADSEC: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Rotation matrix from the dynamical ecliptic J2000 frame to ICRS.
pub fn rotation_dynamical_to_icrs() -> Matrix3<f64> {
    let eps = (23.0 * 3600.0 + 26.0 * 60.0 + 21.411_36) * RADSEC;
    let phi = -0.05188 * RADSEC;
    let (seps, ceps) = eps.sin_cos();
    let (sphi, cphi) = phi.sin_cos();

    Matrix3::new(
        cphi,
        -sphi,
        0.0,
        ceps * sphi,
        ceps * cphi,
        -seps,
        seps * sphi,
        seps * cphi,
        ceps,
    )
}

/// Rotate a 6-component state (position and velocity) by `rot`.
pub fn rotate_state(rot: &Matrix3<f64>, state: &[f64; 6]) -> [f64; 6] {
    let pos = rot * Vector3::new(state[0], state[1], state[2]);
    let vel = rot * Vector3::new(state[3], state[4], state[5]);
    [pos.x, pos.y, pos.z, vel.x, vel.y, vel.z]
}

/// Express a dynamical-J2000 ecliptic state in the ICRS equatorial frame.
pub fn dynamical_to_icrs(state: &[f64; 6]) -> [f64; 6] {
    rotate_state(&rotation_dynamical_to_icrs(), state)
}

/// Express an ICRS equatorial state in the dynamical-J2000 ecliptic frame.
pub fn icrs_to_dynamical(state: &[f64; 6]) -> [f64; 6] {
    rotate_state(&rotation_dynamical_to_icrs().transpose(), state)
}
