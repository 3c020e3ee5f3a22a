//! # Kepler solver for equinoctial elements
//!
//! The elliptic solution produces the six equinoctial elements
//! (a, λ, k, h, q, p). Recovering rectangular coordinates requires solving
//! the equinoctial form of Kepler's equation
//!
//! ```text
//! λ = F − k·sin(F) + h·cos(F)
//! ```
//!
//! for the eccentric longitude F, then projecting the in-plane motion
//! through the (q, p) inclination elements. The in-plane geometry is most
//! compact in complex form: with `z = k + ih` and `ζ = exp(iF)`, the radius
//! factor is `1 − Re(z̄ζ)` and both the position and its time derivative are
//! short complex expressions in z and ζ.
//!
//! The mean motion follows from the third law, `n = √(GM☉ + GM_body)/a^{3/2}`,
//! with the gravitational parameters of [`crate::constants`].

use num_complex::Complex64;

use crate::constants::{AstronomicalUnit, Radian, DPI, GM_SUN};
use crate::theory::VSOPBody;

/// Convergence threshold on the longitude residual (radians).
const KEPLER_TOLERANCE: f64 = 1e-15;

/// Safety cap on Newton iterations; the solver converges in a handful of
/// steps for every eccentricity the planetary solution produces (< 0.21).
const KEPLER_MAX_ITERATIONS: usize = 50;

/// Solve the equinoctial Kepler equation `λ = F − k·sin F + h·cos F` for the
/// eccentric longitude F.
///
/// The starting value is a third-order series in the eccentricity about the
/// mean longitude, refined by Newton steps on the longitude residual.
///
/// Arguments
/// ---------
/// * `xl`: mean longitude λ (radians, any branch).
/// * `k`: equinoctial element k = e·cos ϖ.
/// * `h`: equinoctial element h = e·sin ϖ.
///
/// Return
/// ------
/// * the eccentric longitude F (radians), on the branch of λ reduced to
///   [0, 2π).
pub fn eccentric_longitude(xl: Radian, k: f64, h: f64) -> Radian {
    let z = Complex64::new(k, h);
    let ex = z.norm();
    let ex2 = ex * ex;
    let ex3 = ex2 * ex;

    let gl = xl.rem_euclid(DPI);
    // Mean anomaly: mean longitude minus longitude of perihelion.
    let gm = gl - h.atan2(k);

    let mut f = gl
        + (ex - 0.125 * ex3) * gm.sin()
        + 0.5 * ex2 * (2.0 * gm).sin()
        + 0.375 * ex3 * (3.0 * gm).sin();

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let zteta = Complex64::from_polar(1.0, f);
        let z3 = z.conj() * zteta;
        let dl = gl - f + z3.im;
        let rsa = 1.0 - z3.re;
        f += dl / rsa;
        if dl.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    f
}

/// Convert equinoctial elements to rectangular position and velocity.
///
/// Arguments
/// ---------
/// * `elements`: (a, λ, k, h, q, p) as produced by the elliptic solution.
/// * `body`: the body the elements belong to, for its mean motion.
///
/// Return
/// ------
/// * `[x, y, z, dx, dy, dz]` in au and au/day, heliocentric, dynamical
///   ecliptic and equinox J2000.
pub fn ell_to_xyz(elements: &[f64; 6], body: VSOPBody) -> [f64; 6] {
    let a: AstronomicalUnit = elements[0];
    let xl = elements[1];
    let k = elements[2];
    let h = elements[3];
    let q = elements[4];
    let p = elements[5];

    let xfi = (1.0 - k * k - h * h).sqrt();
    let xki = (1.0 - q * q - p * p).sqrt();
    let u = 1.0 / (1.0 + xfi);

    let z = Complex64::new(k, h);
    let f = eccentric_longitude(xl, k, h);
    let zteta = Complex64::from_polar(1.0, f);
    let z3 = z.conj() * zteta;
    let rsa = 1.0 - z3.re;

    // In-plane position, divided by the semi-major axis.
    let zq = z * (u * z3.im);
    let z2 = Complex64::new(zq.im, -zq.re);
    let zto = (-z + zteta + z2) / rsa;
    let xcw = zto.re;
    let xsw = zto.im;
    let xm = p * xcw - q * xsw;
    let xr = a * rsa;

    // In-plane velocity: dF/dt = n / rsa from the Kepler equation.
    let n = (GM_SUN + body.gm()).sqrt() / (a * a.sqrt());
    let zv = Complex64::i() * (zteta - z * (u * z3.re)) * (a * n / rsa);
    let xcv = zv.re;
    let xsv = zv.im;
    let xmv = p * xcv - q * xsv;

    [
        xr * (xcw - 2.0 * p * xm),
        xr * (xsw + 2.0 * q * xm),
        -2.0 * xr * xki * xm,
        xcv - 2.0 * p * xmv,
        xsv + 2.0 * q * xmv,
        -2.0 * xki * xmv,
    ]
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eccentric_longitude_residual() {
        let cases = [
            (1.234, 0.2, 0.05),
            (4.40260884240, 0.04466059760, 0.20072331368),
            (0.0, 0.0, 0.0),
            (6.5, -0.1, 0.15),
        ];
        for (xl, k, h) in cases {
            let f = eccentric_longitude(xl, k, h);
            let residual = xl.rem_euclid(DPI) - f + k * f.sin() - h * f.cos();
            assert!(
                residual.abs() < 1e-13,
                "residual {residual} for ({xl}, {k}, {h})"
            );
        }
    }

    #[test]
    fn test_circular_orbit() {
        let lambda = std::f64::consts::FRAC_PI_4;
        let state = ell_to_xyz(&[1.0, lambda, 0.0, 0.0, 0.0, 0.0], VSOPBody::MERCURY);

        let n = (GM_SUN + VSOPBody::MERCURY.gm()).sqrt();
        assert_relative_eq!(state[0], lambda.cos(), epsilon = 1e-14);
        assert_relative_eq!(state[1], lambda.sin(), epsilon = 1e-14);
        assert_relative_eq!(state[2], 0.0, epsilon = 1e-14);
        assert_relative_eq!(state[3], -n * lambda.sin(), epsilon = 1e-14);
        assert_relative_eq!(state[4], n * lambda.cos(), epsilon = 1e-14);
        assert_relative_eq!(state[5], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_vis_viva_on_eccentric_inclined_orbit() {
        // An inclined, eccentric orbit; the recovered state must satisfy
        // v² = GM (2/r − 1/a).
        let elements = [1.5, 2.3, 0.12, -0.07, 0.05, 0.03];
        let state = ell_to_xyz(&elements, VSOPBody::MARS);

        let gm = GM_SUN + VSOPBody::MARS.gm();
        let r = (state[0].powi(2) + state[1].powi(2) + state[2].powi(2)).sqrt();
        let v2 = state[3].powi(2) + state[4].powi(2) + state[5].powi(2);
        assert_relative_eq!(v2, gm * (2.0 / r - 1.0 / elements[0]), max_relative = 1e-10);
    }

    #[test]
    fn test_radius_matches_radius_factor() {
        let elements = [0.387098, 4.402609, 0.044661, 0.200723, 0.040616, 0.045636];
        let state = ell_to_xyz(&elements, VSOPBody::MERCURY);

        let f = eccentric_longitude(elements[1], elements[2], elements[3]);
        let rsa = 1.0 - elements[2] * f.cos() - elements[3] * f.sin();
        let r = (state[0].powi(2) + state[1].powi(2) + state[2].powi(2)).sqrt();
        assert_relative_eq!(r, elements[0] * rsa, max_relative = 1e-12);
    }

    #[test]
    fn test_angular_momentum_is_constant_of_the_elements() {
        // |r × v| = √(GM·a)·√(1 − e²) for an ellipse.
        let elements = [5.2, 0.6, 0.046, 0.012, -0.002, 0.011];
        let state = ell_to_xyz(&elements, VSOPBody::JUPITER);

        let hx = state[1] * state[5] - state[2] * state[4];
        let hy = state[2] * state[3] - state[0] * state[5];
        let hz = state[0] * state[4] - state[1] * state[3];
        let h_norm = (hx * hx + hy * hy + hz * hz).sqrt();

        let gm = GM_SUN + VSOPBody::JUPITER.gm();
        let e2 = elements[2].powi(2) + elements[3].powi(2);
        let expected = (gm * elements[0] * (1.0 - e2)).sqrt();
        assert_relative_eq!(h_norm, expected, max_relative = 1e-10);
    }
}
