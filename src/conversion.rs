//! # Coordinate representation changes
//!
//! Exact, time-free mappings between the rectangular `(x, y, z, dx, dy, dz)`
//! and spherical `(l, b, r, dl, db, dr)` representations of a heliocentric
//! state. Both directions propagate velocities through the analytic Jacobian
//! of the coordinate change, so a round trip reproduces the state to
//! floating rounding.
//!
//! Longitudes are produced in [0, 2π), latitudes in [−π/2, π/2]. The
//! spherical chart is singular on the polar axis (ρ = 0); the planetary
//! solutions never approach it.

use crate::evaluator::modulo_circle;

/// Convert a rectangular state to spherical `(l, b, r, dl, db, dr)`.
///
/// Arguments
/// ---------
/// * `state`: `[x, y, z, dx, dy, dz]` in au and au/day.
///
/// Return
/// ------
/// * `[l, b, r, dl, db, dr]`: longitude in [0, 2π), latitude in
///   [−π/2, π/2], radius in au, and their per-day rates.
pub fn xyz_to_lbr(state: &[f64; 6]) -> [f64; 6] {
    let [x, y, z, dx, dy, dz] = *state;

    let rho2 = x * x + y * y;
    let rho = rho2.sqrt();
    let r = (rho2 + z * z).sqrt();

    let l = modulo_circle(y.signum() * (x / rho).acos());
    let b = (z / r).asin();

    let radial = x * dx + y * dy;
    let dr = (radial + z * dz) / r;
    let dl = (x * dy - y * dx) / rho2;
    let db = (dz * rho2 - z * radial) / (r * r * rho);

    [l, b, r, dl, db, dr]
}

/// Convert a spherical state `(l, b, r, dl, db, dr)` to rectangular.
///
/// Inverse of [`xyz_to_lbr`] away from the polar axis.
pub fn lbr_to_xyz(state: &[f64; 6]) -> [f64; 6] {
    let [l, b, r, dl, db, dr] = *state;

    let (sl, cl) = l.sin_cos();
    let (sb, cb) = b.sin_cos();

    let x = r * cb * cl;
    let y = r * cb * sl;
    let z = r * sb;

    let dx = dr * cb * cl - db * r * sb * cl - dl * r * cb * sl;
    let dy = dr * cb * sl - db * r * sb * sl + dl * r * cb * cl;
    let dz = dr * sb + db * r * cb;

    [x, y, z, dx, dy, dz]
}
