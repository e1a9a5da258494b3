//! Small numerical and randomness helpers shared across the crate.
//!
//! The fallback random direction generator lives here. Pair potentials that
//! encounter a zero interparticle distance substitute a random unit vector
//! for the displacement direction; that draw comes from one process-wide
//! seedable stream so tests can make the substitution reproducible.

use crate::vector::Vec3;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::f64::consts::PI;
use std::sync::Mutex;
use std::sync::OnceLock;

/// Nearest integer as a real number, matching the minimum-image convention
/// rounding (`round half away from zero`).
#[inline]
pub fn nint(x: f64) -> f64 {
    x.round()
}

/// Sign of a real number as -1, 0 or +1.
///
/// The dotted-surface mapping matches octants by comparing signs of all
/// three coordinates.
#[inline]
pub fn sgn(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

fn fallback_rng() -> &'static Mutex<StdRng> {
    static RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();
    RNG.get_or_init(|| Mutex::new(StdRng::from_os_rng()))
}

/// Reseeds the process-wide fallback stream.
///
/// Only the zero-distance direction substitution draws from this stream;
/// integrators own their random state. Tests call this to make warnings
/// paths deterministic.
pub fn reseed_fallback_rng(seed: u64) {
    *fallback_rng().lock().unwrap() = StdRng::seed_from_u64(seed);
}

/// Returns a uniformly distributed unit vector.
///
/// Sampled as a uniform point on the unit sphere via the cosine-of-polar
/// trick.
pub fn random_unit_vector() -> Vec3 {
    let mut rng = fallback_rng().lock().unwrap();
    let phi: f64 = rng.random_range(0.0..2.0 * PI);
    let cos_theta: f64 = rng.random_range(-1.0..1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    Vec3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// Returns a uniform random number in `[low, high)` from the fallback
/// stream. Stochastic reinjection of the 2D periodic boundary condition
/// uses this.
pub fn random_uniform(low: f64, high: f64) -> f64 {
    let mut rng = fallback_rng().lock().unwrap();
    rng.random_range(low..high)
}

/// Adaptive Simpson quadrature of `f` over `[a, b]`.
///
/// Recursion refines until the local Richardson estimate meets the
/// requested relative tolerance. The virtual-plane pair energy integral
/// is evaluated with `rel_tol = 1e-6`.
pub fn integrate<F>(f: F, a: f64, b: f64, rel_tol: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    fn simpson<F: Fn(f64) -> f64>(f: &F, a: f64, fa: f64, b: f64, fb: f64) -> (f64, f64, f64) {
        let m = 0.5 * (a + b);
        let fm = f(m);
        let s = (b - a) / 6.0 * (fa + 4.0 * fm + fb);
        (m, fm, s)
    }

    #[allow(clippy::too_many_arguments)]
    fn recurse<F: Fn(f64) -> f64>(
        f: &F,
        a: f64,
        fa: f64,
        b: f64,
        fb: f64,
        m: f64,
        fm: f64,
        whole: f64,
        eps: f64,
        depth: u32,
    ) -> f64 {
        let (lm, flm, left) = simpson(f, a, fa, m, fm);
        let (rm, frm, right) = simpson(f, m, fm, b, fb);
        let delta = left + right - whole;
        if depth == 0 || delta.abs() <= 15.0 * eps {
            left + right + delta / 15.0
        } else {
            recurse(f, a, fa, m, fm, lm, flm, left, 0.5 * eps, depth - 1)
                + recurse(f, m, fm, b, fb, rm, frm, right, 0.5 * eps, depth - 1)
        }
    }

    let fa = f(a);
    let fb = f(b);
    let (m, fm, whole) = simpson(&f, a, fa, b, fb);
    let eps = rel_tol * whole.abs().max(1.0e-30);
    recurse(&f, a, fa, b, fb, m, fm, whole, eps, 48)
}

/// Modified Bessel function of the second kind of order zero, K0(x).
///
/// Rational approximations from Abramowitz & Stegun 9.8.5/9.8.6, accurate
/// to about 1e-7. The Lekner summation evaluates this for every term.
pub fn bessel_k0(x: f64) -> f64 {
    assert!(x > 0.0, "bessel_k0: argument must be positive, got {}", x);
    if x <= 2.0 {
        let t = x * x / 4.0;
        let i0 = bessel_i0(x);
        -(0.5 * x).ln() * i0
            + (-0.57721566
                + t * (0.42278420
                    + t * (0.23069756
                        + t * (0.03488590
                            + t * (0.00262698 + t * (0.00010750 + t * 0.00000740))))))
    } else {
        let t = 2.0 / x;
        (x.exp().recip() / x.sqrt())
            * (1.25331414
                + t * (-0.07832358
                    + t * (0.02189568
                        + t * (-0.01062446
                            + t * (0.00587872 + t * (-0.00251540 + t * 0.00053208))))))
    }
}

/// Modified Bessel function of the first kind of order zero, I0(x).
///
/// Abramowitz & Stegun 9.8.1/9.8.2.
pub fn bessel_i0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 3.75 {
        let t = (x / 3.75) * (x / 3.75);
        1.0 + t
            * (3.5156229
                + t * (3.0899424
                    + t * (1.2067492 + t * (0.2659732 + t * (0.0360768 + t * 0.0045813)))))
    } else {
        let t = 3.75 / ax;
        (ax.exp() / ax.sqrt())
            * (0.39894228
                + t * (0.01328592
                    + t * (0.00225319
                        + t * (-0.00157565
                            + t * (0.00916281
                                + t * (-0.02057706
                                    + t * (0.02635537 + t * (-0.01647633 + t * 0.00392377))))))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nint_rounds_to_nearest() {
        assert_eq!(nint(0.4), 0.0);
        assert_eq!(nint(0.6), 1.0);
        assert_eq!(nint(-0.6), -1.0);
        assert_eq!(nint(2.0), 2.0);
    }

    #[test]
    fn random_unit_has_unit_length() {
        reseed_fallback_rng(17);
        for _ in 0..100 {
            let u = random_unit_vector();
            assert!((u.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn integrate_polynomial_exactly() {
        // int_0^1 x^2 dx = 1/3
        let v = integrate(|x| x * x, 0.0, 1.0, 1e-10);
        assert!((v - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn integrate_transcendental() {
        // int_0^pi sin(x) dx = 2
        let v = integrate(|x| x.sin(), 0.0, std::f64::consts::PI, 1e-8);
        assert!((v - 2.0).abs() < 1e-7);
    }

    #[test]
    fn bessel_k0_reference_values() {
        // Abramowitz & Stegun table 9.8: K0(1) = 0.4210244382,
        // K0(2) = 0.1138938727. The polynomial fit is good to ~1e-7.
        assert!((bessel_k0(1.0) - 0.4210244382).abs() < 1e-6);
        assert!((bessel_k0(2.0) - 0.1138938727).abs() < 1e-6);
        // Large argument branch: K0(5) = 0.003691098.
        assert!((bessel_k0(5.0) - 0.003691098).abs() < 1e-6);
    }

    #[test]
    fn bessel_k0_decreasing() {
        let mut prev = bessel_k0(0.1);
        for k in 1..50 {
            let x = 0.1 + 0.25 * k as f64;
            let v = bessel_k0(x);
            assert!(v < prev);
            prev = v;
        }
    }
}
