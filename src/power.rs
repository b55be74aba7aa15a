//! # power.rs
//!
//! Argument, generalized power, exponential and logarithms.
//!
//! Everything here is derived from `z^w = exp(w·ln z)` evaluated in polar
//! form, so the whole layer shares the branch chosen by [`Complex::arg`].

use crate::complex::Complex;

use num_traits::Pow;

impl Complex
{
    /// Returns the argument as `atan(imag / real)`.
    ///
    /// The single-argument arctangent only covers the right half-plane: for a
    /// negative real part the result is off by `π`, and a zero real part gives
    /// `±π/2` (or NaN for the zero value). Every power, root and logarithm in
    /// the crate inherits this branch.
    pub fn arg(self) -> f64
    {
        (self.imag / self.real).atan()
    }

    /// Raises `self` to a complex power.
    ///
    /// With `m = |self|²` and `a = arg(self)`, the result is
    /// `(cos c, sin c) · m^(w.real/2) · e^(-w.imag·a)` where
    /// `c = w.real·a + w.imag·ln(m)/2`.
    ///
    /// # Examples
    /// ```
    /// use ccalc::Complex;
    ///
    /// let z = Complex::new(2.0, 0.0).powc(Complex::new(3.0, 0.0));
    /// assert!((z.real - 8.0).abs() < 1.0e-12);
    /// ```
    pub fn powc(self, w: Complex) -> Complex
    {
        let a = self.arg();
        let m = self.real * self.real + self.imag * self.imag;
        let c = w.real * a + 0.5 * w.imag * m.ln();
        let unit = Complex::new(c.cos(), c.sin());
        unit * (m.powf(w.real / 2.0) * (-w.imag * a).exp())
    }

    /// Raises `self` to a real power.
    pub fn powf(self, exponent: f64) -> Complex
    {
        self.powc(Complex::from(exponent))
    }

    /// Square root, as `self^0.5`.
    pub fn sqrt(self) -> Complex
    {
        self.powf(0.5)
    }

    /// Natural logarithm `(ln|z|, arg z)`.
    pub fn ln(self) -> Complex
    {
        Complex::new(self.abs().ln(), self.arg())
    }

    /// Base-10 logarithm `(log10|z|, arg z)`.
    ///
    /// Only the real part is in base 10; the imaginary part is the plain
    /// argument in radians.
    pub fn log10(self) -> Complex
    {
        Complex::new(self.abs().log10(), self.arg())
    }

    /// Logarithm in an arbitrary real `base`, `ln(z) / ln(base)`.
    ///
    /// Unlike [`Complex::log10`] both parts are divided by `ln(base)`, so
    /// `z.log(E)` is `z.ln()` and `z.log(10.0)` differs from `z.log10()` only in
    /// the imaginary part, which is `arg z / ln 10`.
    ///
    /// # Examples
    /// ```
    /// use ccalc::Complex;
    ///
    /// let z = Complex::new(8.0, 0.0).log(2.0);
    /// assert!((z.real - 3.0).abs() < 1.0e-12);
    /// ```
    pub fn log(self, base: f64) -> Complex
    {
        self.ln() / base.ln()
    }

    /// Exponential, as `e^self`.
    pub fn exp(self) -> Complex
    {
        Complex::from(std::f64::consts::E).powc(self)
    }
}

impl Pow<Complex> for Complex
{
    type Output = Complex;

    fn pow(self, rhs: Complex) -> Complex
    {
        self.powc(rhs)
    }
}

impl Pow<f64> for Complex
{
    type Output = Complex;

    fn pow(self, rhs: f64) -> Complex
    {
        self.powf(rhs)
    }
}

/// A real base raised to a complex exponent.
impl Pow<Complex> for f64
{
    type Output = Complex;

    fn pow(self, rhs: Complex) -> Complex
    {
        Complex::from(self).powc(rhs)
    }
}

#[cfg(test)]
mod power_tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_4, FRAC_PI_2};

    fn assert_close(l: Complex, r: Complex, epsilon: f64) {
        assert_abs_diff_eq!(l.real, r.real, epsilon = epsilon);
        assert_abs_diff_eq!(l.imag, r.imag, epsilon = epsilon);
    }

    #[test]
    fn test_arg_right_half_plane() {
        assert_eq!(Complex::new(1.0, 0.0).arg(), 0.0);
        assert_abs_diff_eq!(Complex::new(1.0, 1.0).arg(), FRAC_PI_4, epsilon = 1.0e-15);
        assert_abs_diff_eq!(Complex::new(1.0, -1.0).arg(), -FRAC_PI_4, epsilon = 1.0e-15);
    }

    #[test]
    fn test_arg_is_single_argument_arctangent() {
        // left half-plane folds onto the right one
        assert_abs_diff_eq!(Complex::new(-1.0, -1.0).arg(), FRAC_PI_4, epsilon = 1.0e-15);
        assert_abs_diff_eq!(Complex::new(0.0, 2.0).arg(), FRAC_PI_2, epsilon = 1.0e-15);
        assert!(Complex::ZERO.arg().is_nan());
    }

    #[test]
    fn test_powc_matches_reference() {
        let base = Complex::new(1.0, 0.5);
        let exponent = Complex::new(2.0, -0.5);
        let expected = num_complex::Complex::new(1.0, 0.5).powc(num_complex::Complex::new(2.0, -0.5));
        assert_close(base.powc(exponent), expected.into(), 1.0e-12);
    }

    #[test]
    fn test_powf_integer_exponent() {
        let z = Complex::new(1.0, 2.0);
        assert_close(z.powf(2.0), z * z, 1.0e-12);
        assert_close(z.powf(3.0), z * z * z, 1.0e-12);
        assert_close(z.powf(-1.0), 1.0 / z, 1.0e-12);
    }

    #[test]
    fn test_pow_trait_combinations() {
        let z = Complex::new(0.5, 0.25);
        assert_eq!(z.pow(2.0f64), z.powf(2.0));
        assert_eq!(z.pow(Complex::I), z.powc(Complex::I));
        assert_eq!(2.0f64.pow(z), Complex::from(2.0).powc(z));
    }

    #[test]
    fn test_sqrt() {
        assert_close(Complex::new(4.0, 0.0).sqrt(), Complex::new(2.0, 0.0), 1.0e-15);
        assert_close(Complex::new(3.0, 4.0).sqrt(), Complex::new(2.0, 1.0), 1.0e-14);
        let z = Complex::new(0.3, -0.8);
        let r = z.sqrt();
        assert_close(r * r, z, 1.0e-14);
    }

    #[test]
    fn test_exp() {
        let r = Complex::new(1.0, 2.0).exp();
        assert_abs_diff_eq!(r.real, -1.1312043837568135, epsilon = 1.0e-12);
        assert_abs_diff_eq!(r.imag, 2.4717266720048188, epsilon = 1.0e-12);

        assert_close(Complex::ZERO.exp(), Complex::ONE, 1.0e-15);
        assert_close(Complex::new(0.0, std::f64::consts::PI).exp(), Complex::new(-1.0, 0.0), 1.0e-15);
    }

    #[test]
    fn test_ln() {
        let r = Complex::new(1.0, 1.0).ln();
        assert_abs_diff_eq!(r.real, 0.5 * 2.0f64.ln(), epsilon = 1.0e-15);
        assert_abs_diff_eq!(r.imag, FRAC_PI_4, epsilon = 1.0e-15);
        assert_eq!(Complex::ZERO.ln().real, f64::NEG_INFINITY);
    }

    #[test]
    fn test_exp_ln_round_trip() {
        for z in [
            Complex::new(1.0, 2.0),
            Complex::new(0.25, -3.0),
            Complex::new(10.0, 0.5),
            Complex::new(1.0e-3, 1.0e-3),
        ] {
            let r = z.ln().exp();
            assert_abs_diff_eq!(r.real, z.real, epsilon = 1.0e-12 * z.abs().max(1.0));
            assert_abs_diff_eq!(r.imag, z.imag, epsilon = 1.0e-12 * z.abs().max(1.0));
        }
    }

    #[test]
    fn test_log10_keeps_radian_argument() {
        let r = Complex::new(10.0, 10.0).log10();
        assert_abs_diff_eq!(r.real, 200.0f64.sqrt().log10(), epsilon = 1.0e-15);
        assert_abs_diff_eq!(r.imag, FRAC_PI_4, epsilon = 1.0e-15);
        assert_close(Complex::new(100.0, 0.0).log10(), Complex::new(2.0, 0.0), 1.0e-15);
    }

    #[test]
    fn test_log_in_base() {
        use std::f64::consts::{E, LN_10};

        for z in [Complex::new(1.0, 1.0), Complex::new(0.25, -3.0), Complex::new(10.0, 0.5)] {
            assert_close(z.log(E), z.ln(), 1.0e-15);

            let r = z.log(10.0);
            assert_abs_diff_eq!(r.real, z.log10().real, epsilon = 1.0e-14);
            assert_abs_diff_eq!(r.imag, z.log10().imag / LN_10, epsilon = 1.0e-14);
        }

        assert_close(Complex::new(8.0, 0.0).log(2.0), Complex::new(3.0, 0.0), 1.0e-15);
        assert!(Complex::ONE.log(1.0).is_nan());
    }
}
