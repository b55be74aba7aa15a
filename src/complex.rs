//! # complex.rs
//!
//! The `Complex` value type.
//!
//! A `Complex` is a plain pair of `f64` components. It never validates its
//! contents: NaN and infinite components are carried through every operation
//! exactly as IEEE-754 arithmetic produces them, so callers inspect the result
//! with [`Complex::is_finite`] and friends instead of handling errors.

use num_traits::{One, Zero};

/// A complex number `real + imag·i` over 64-bit floats.
///
/// Equality is exact component comparison, with no tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex
{
    /// Real component.
    pub real: f64,
    /// Imaginary component.
    pub imag: f64,
}

impl Complex
{
    /// The additive identity `0 + 0i`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// The multiplicative identity `1 + 0i`.
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// The imaginary unit `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Creates a complex number from its components.
    ///
    /// # Examples
    /// ```
    /// use ccalc::Complex;
    ///
    /// let z = Complex::new(1.0, 2.0);
    /// assert_eq!(z.real, 1.0);
    /// assert_eq!(z.imag, 2.0);
    /// ```
    pub const fn new(real: f64, imag: f64) -> Self
    {
        Self { real, imag }
    }

    /// Returns the conjugate `real - imag·i`.
    pub fn conj(self) -> Self
    {
        Self::new(self.real, -self.imag)
    }

    /// Returns the modulus `sqrt(real² + imag²)`.
    pub fn abs(self) -> f64
    {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }

    /// Scales the value to unit modulus.
    ///
    /// The zero value has no direction, so normalizing it yields NaN components.
    pub fn normalize(self) -> Self
    {
        self / self.abs()
    }

    /// Sign of the value: the sign of the real part, or of the imaginary part
    /// when the real part is zero. Returns `1`, `-1` or `0`, or NaN when either
    /// component is NaN.
    pub fn signum(self) -> f64
    {
        if self.is_nan() {
            f64::NAN
        } else if self.real > 0.0 {
            1.0
        } else if self.real < 0.0 {
            -1.0
        } else if self.imag > 0.0 {
            1.0
        } else if self.imag < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Returns `true` if the imaginary part is exactly zero.
    pub fn is_real(self) -> bool
    {
        self.imag == 0.0
    }

    /// Returns `true` if either component is NaN.
    pub fn is_nan(self) -> bool
    {
        self.real.is_nan() || self.imag.is_nan()
    }

    /// Returns `true` if either component is infinite and neither is NaN.
    pub fn is_infinite(self) -> bool
    {
        !self.is_nan() && (self.real.is_infinite() || self.imag.is_infinite())
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(self) -> bool
    {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl From<f64> for Complex
{
    fn from(real: f64) -> Self
    {
        Self::new(real, 0.0)
    }
}

impl From<(f64, f64)> for Complex
{
    fn from((real, imag): (f64, f64)) -> Self
    {
        Self::new(real, imag)
    }
}

impl From<Complex> for (f64, f64)
{
    fn from(z: Complex) -> Self
    {
        (z.real, z.imag)
    }
}

impl From<num_complex::Complex<f64>> for Complex
{
    fn from(z: num_complex::Complex<f64>) -> Self
    {
        Self::new(z.re, z.im)
    }
}

impl From<Complex> for num_complex::Complex<f64>
{
    fn from(z: Complex) -> Self
    {
        num_complex::Complex::new(z.real, z.imag)
    }
}

/// A complex value equals a real one only when its imaginary part is exactly zero.
impl PartialEq<f64> for Complex
{
    fn eq(&self, other: &f64) -> bool
    {
        self.real == *other && self.imag == 0.0
    }
}

impl PartialEq<Complex> for f64
{
    fn eq(&self, other: &Complex) -> bool
    {
        other == self
    }
}

impl Zero for Complex
{
    fn zero() -> Self { Self::ZERO }
    fn is_zero(&self) -> bool { self.real == 0.0 && self.imag == 0.0 }
}

impl One for Complex
{
    fn one() -> Self { Self::ONE }
}
