//! # trig.rs
//!
//! Circular and hyperbolic functions and their reciprocals.
//!
//! All of them are closed forms over the components of `z = x + yi`; no
//! logarithms are involved. The quotients (`tan`, `sec`, ... `coth`) inherit
//! the unguarded division of the operators module, so a zero denominator
//! gives infinite or NaN components.

use crate::complex::Complex;

impl Complex
{
    /// `sin x·cosh y + i·cos x·sinh y`
    pub fn sin(self) -> Complex
    {
        Complex::new(
            self.real.sin() * self.imag.cosh(),
            self.real.cos() * self.imag.sinh(),
        )
    }

    /// `cos x·cosh y + i·sin x·sinh y`
    ///
    /// The imaginary term carries a positive sign, so for non-real input this
    /// is the conjugate of the textbook `cos x·cosh y - i·sin x·sinh y`.
    pub fn cos(self) -> Complex
    {
        Complex::new(
            self.real.cos() * self.imag.cosh(),
            self.real.sin() * self.imag.sinh(),
        )
    }

    pub fn tan(self) -> Complex
    {
        self.sin() / self.cos()
    }

    pub fn sec(self) -> Complex
    {
        1.0 / self.cos()
    }

    pub fn csc(self) -> Complex
    {
        1.0 / self.sin()
    }

    pub fn cot(self) -> Complex
    {
        1.0 / self.tan()
    }

    /// `sinh x·cos y + i·cosh x·sin y`
    pub fn sinh(self) -> Complex
    {
        Complex::new(
            self.real.sinh() * self.imag.cos(),
            self.real.cosh() * self.imag.sin(),
        )
    }

    /// `cosh x·cos y + i·sinh x·sin y`
    pub fn cosh(self) -> Complex
    {
        Complex::new(
            self.real.cosh() * self.imag.cos(),
            self.real.sinh() * self.imag.sin(),
        )
    }

    pub fn tanh(self) -> Complex
    {
        self.sinh() / self.cosh()
    }

    pub fn sech(self) -> Complex
    {
        1.0 / self.cosh()
    }

    pub fn csch(self) -> Complex
    {
        1.0 / self.sinh()
    }

    pub fn coth(self) -> Complex
    {
        1.0 / self.tanh()
    }
}

#[cfg(test)]
mod trig_tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_close(l: Complex, r: Complex, epsilon: f64) {
        assert_abs_diff_eq!(l.real, r.real, epsilon = epsilon);
        assert_abs_diff_eq!(l.imag, r.imag, epsilon = epsilon);
    }

    fn reference(z: Complex) -> num_complex::Complex<f64> {
        num_complex::Complex::from(z)
    }

    const SAMPLES: [Complex; 4] = [
        Complex::new(0.5, 0.25),
        Complex::new(-1.2, 0.7),
        Complex::new(2.0, -1.5),
        Complex::new(0.0, 0.9),
    ];

    #[test]
    fn test_real_input_matches_f64() {
        for x in [-2.5, -0.3, 0.0, 0.7, 1.4, 3.0] {
            let z = Complex::from(x);
            assert_close(z.sin(), Complex::new(f64::sin(x), 0.0), 1.0e-15);
            assert_close(z.cos(), Complex::new(f64::cos(x), 0.0), 1.0e-15);
            assert_close(z.tan(), Complex::new(f64::tan(x), 0.0), 1.0e-14);
            assert_close(z.sinh(), Complex::new(f64::sinh(x), 0.0), 1.0e-14);
            assert_close(z.cosh(), Complex::new(f64::cosh(x), 0.0), 1.0e-14);
            assert_close(z.tanh(), Complex::new(f64::tanh(x), 0.0), 1.0e-15);
        }
    }

    #[test]
    fn test_sin_sinh_cosh_tanh_match_reference() {
        for z in SAMPLES {
            assert_close(z.sin(), reference(z).sin().into(), 1.0e-14);
            assert_close(z.sinh(), reference(z).sinh().into(), 1.0e-14);
            assert_close(z.cosh(), reference(z).cosh().into(), 1.0e-14);
            assert_close(z.tanh(), reference(z).tanh().into(), 1.0e-13);
        }
    }

    #[test]
    fn test_cos_has_positive_imaginary_term() {
        for z in SAMPLES {
            let c = z.cos();
            assert_eq!(c.real, z.real.cos() * z.imag.cosh());
            assert_eq!(c.imag, z.real.sin() * z.imag.sinh());
            assert_close(c, reference(z).cos().conj().into(), 1.0e-14);
        }
    }

    #[test]
    fn test_quotients() {
        for z in SAMPLES {
            assert_eq!(z.tan(), z.sin() / z.cos());
            assert_eq!(z.sec(), 1.0 / z.cos());
            assert_eq!(z.csc(), 1.0 / z.sin());
            assert_eq!(z.cot(), 1.0 / z.tan());
            assert_eq!(z.tanh(), z.sinh() / z.cosh());
            assert_eq!(z.sech(), 1.0 / z.cosh());
            assert_eq!(z.csch(), 1.0 / z.sinh());
            assert_eq!(z.coth(), 1.0 / z.tanh());
        }
    }

    #[test]
    fn test_pythagorean_identity() {
        for z in SAMPLES {
            let s = z.sin();
            let c = z.cos();
            let sum = s * s + c * c;
            assert_abs_diff_eq!(sum.real, 1.0, epsilon = 1.0e-12);
        }
        for z in [Complex::from(0.3), Complex::from(-2.0), Complex::new(0.0, 1.1), Complex::new(0.0, -0.4)] {
            let s = z.sin();
            let c = z.cos();
            assert_close(s * s + c * c, Complex::ONE, 1.0e-12);
        }
    }

    #[test]
    fn test_zero_denominator_is_not_finite() {
        assert!(!Complex::ZERO.csc().is_finite());
        assert!(!Complex::ZERO.cot().is_finite());
        assert!(!Complex::ZERO.csch().is_finite());
        assert!(!Complex::ZERO.coth().is_finite());
    }
}
