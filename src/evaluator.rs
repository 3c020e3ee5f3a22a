//! # Series evaluation: scalar reference and SIMD-batched variant
//!
//! Evaluating a [`SeriesTable`](crate::series::SeriesTable) at a Julian Date
//! produces the raw 6-component vector of the theory. With
//! τ = (JD − 2451545) / 365250 (Julian millennia from J2000), each component
//! iv accumulates, over the degrees it = 5..=0 of its populated power
//! tables,
//!
//! ```text
//! Result[iv] += A·cos(B + C·τ)·τ^it
//! ```
//!
//! For every version except the elliptic one, components 0..3 also feed the
//! derivative sums into components 3..6:
//!
//! ```text
//! it = 0:  Result[iv+3] += −A·C·sin(u)
//! it > 0:  Result[iv+3] += it·τ^(it−1)·A·cos(u) − τ^it·A·C·sin(u)
//! ```
//!
//! after which the three rates are divided by 365250 to convert from
//! per-millennium to per-day. The elliptic version stops after the position
//! sums and reduces its mean longitude into [0, 2π); spherical versions
//! reduce their longitude the same way.
//!
//! The canonical accumulation order is **degree descending (5 → 0), terms in
//! table order**; [`evaluate`] is bit-reproducible for identical inputs. The
//! batched [`evaluate_simd`] streams the padded per-degree term arrays
//! through `f64x4` lanes and sums lane partials horizontally; it is
//! mathematically equivalent to the scalar form but may differ by a few ULP
//! from reduction-order changes.

use wide::f64x4;

use crate::constants::{JulianDate, DAYS_PER_MILLENNIUM, DPI, JD_J2000};
use crate::series::{PowerTable, SeriesTable, DEGREES, LANES, VARIABLES};
use crate::theory::{CoordinateKind, VSOPVersion};

/// Reduce an angle into [0, 2π).
#[inline]
pub fn modulo_circle(angle: f64) -> f64 {
    angle.rem_euclid(DPI)
}

/// τ and its powers τ⁰..τ⁵ for a Julian Date.
#[inline]
fn tau_powers(jd: JulianDate) -> (f64, [f64; DEGREES]) {
    let tau = (jd - JD_J2000) / DAYS_PER_MILLENNIUM;
    let mut powers = [1.0; DEGREES];
    for it in 1..DEGREES {
        powers[it] = powers[it - 1] * tau;
    }
    (tau, powers)
}

/// Angular reductions and rate rescaling shared by both evaluator variants.
fn finalize(version: VSOPVersion, result: &mut [f64; 6]) {
    if version == VSOPVersion::VSOP87 {
        // Elliptic solution: the six sums are the orbital elements
        // themselves; only the mean longitude needs reduction.
        result[1] = modulo_circle(result[1]);
        return;
    }
    for ic in 0..3 {
        result[ic + 3] /= DAYS_PER_MILLENNIUM;
    }
    if version.coordinate_kind() == CoordinateKind::Spherical {
        result[0] = modulo_circle(result[0]);
    }
}

/// Scalar reference evaluation of a series table at a Julian Date.
///
/// Arguments
/// ---------
/// * `table`: the coefficient tables of one (version, body) pair.
/// * `jd`: Julian Date of the instant, TDB scale.
///
/// Return
/// ------
/// * the raw 6-component vector: orbital elements for the elliptic version,
///   position and velocity (au, au/day or radians, radians/day) otherwise.
pub fn evaluate(table: &SeriesTable, jd: JulianDate) -> [f64; 6] {
    let (tau, t) = tau_powers(jd);
    let elliptic = table.version() == VSOPVersion::VSOP87;
    let mut result = [0.0; 6];

    for iv in 0..VARIABLES {
        for it in (0..DEGREES).rev() {
            let power = table.variable(iv).power(it);
            if power.is_empty() {
                continue;
            }
            for term in power.terms() {
                let u = term.phase + term.frequency * tau;
                let (su, cu) = u.sin_cos();
                result[iv] += term.amplitude * cu * t[it];

                if elliptic || iv >= 3 {
                    continue;
                }
                if it == 0 {
                    result[iv + 3] -= term.amplitude * term.frequency * su;
                } else {
                    result[iv + 3] += t[it - 1] * it as f64 * term.amplitude * cu
                        - t[it] * term.amplitude * term.frequency * su;
                }
            }
        }
    }

    finalize(table.version(), &mut result);
    result
}

/// Lane sums of one power table: (Σ A·cos(u), Σ A·C·sin(u)).
///
/// The padding terms have zero amplitude and contribute nothing to either
/// sum, so full lanes can be streamed unconditionally.
#[inline]
fn lane_sums(power: &PowerTable, tau: f64) -> (f64, f64) {
    let tau_v = f64x4::splat(tau);
    let mut pos_acc = f64x4::splat(0.0);
    let mut rate_acc = f64x4::splat(0.0);

    let amplitudes = power.lane_amplitudes().chunks_exact(LANES);
    let phases = power.lane_phases().chunks_exact(LANES);
    let frequencies = power.lane_frequencies().chunks_exact(LANES);

    for ((a, b), c) in amplitudes.zip(phases).zip(frequencies) {
        let a = f64x4::from([a[0], a[1], a[2], a[3]]);
        let b = f64x4::from([b[0], b[1], b[2], b[3]]);
        let c = f64x4::from([c[0], c[1], c[2], c[3]]);
        let u = b + c * tau_v;
        pos_acc += a * u.cos();
        rate_acc += a * c * u.sin();
    }

    (pos_acc.reduce_add(), rate_acc.reduce_add())
}

/// SIMD-batched evaluation of a series table at a Julian Date.
///
/// Numerically equivalent to [`evaluate`]; the horizontal lane reduction
/// changes the summation order, so outputs may differ from the scalar
/// reference by a few ULP (within 1e-9 relative).
pub fn evaluate_simd(table: &SeriesTable, jd: JulianDate) -> [f64; 6] {
    let (tau, t) = tau_powers(jd);
    let elliptic = table.version() == VSOPVersion::VSOP87;
    let mut result = [0.0; 6];

    for iv in 0..VARIABLES {
        for it in (0..DEGREES).rev() {
            let power = table.variable(iv).power(it);
            if power.is_empty() {
                continue;
            }
            let (a_cos, ac_sin) = lane_sums(power, tau);
            result[iv] += a_cos * t[it];

            if elliptic || iv >= 3 {
                continue;
            }
            if it == 0 {
                result[iv + 3] -= ac_sin;
            } else {
                result[iv + 3] += t[it - 1] * it as f64 * a_cos - t[it] * ac_sin;
            }
        }
    }

    finalize(table.version(), &mut result);
    result
}
