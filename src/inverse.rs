//! # inverse.rs
//!
//! Inverse circular and hyperbolic functions.
//!
//! Each one is the logarithmic identity of its forward function, built from
//! [`Complex::ln`] and [`Complex::sqrt`]. They therefore share the branch of
//! [`Complex::arg`]: the results are the principal values as long as every
//! intermediate logarithm and root sees a positive real part.
//!
//! The reciprocal variants (`asec` ... `acoth`) return the reciprocal of the
//! plain inverse, `asec z = 1 / acos z`, not `acos(1 / z)`.

use crate::complex::Complex;

const I: Complex = Complex::I;

impl Complex
{
    /// `-i·ln(iz + sqrt(1 - z²))`
    pub fn asin(self) -> Complex
    {
        -I * (I * self + (1.0 - self * self).sqrt()).ln()
    }

    /// `-i·ln(z + sqrt(z² - 1))`
    pub fn acos(self) -> Complex
    {
        -I * (self + (self * self - 1.0).sqrt()).ln()
    }

    /// `(i/2)·(ln(1 - iz) - ln(1 + iz))`
    pub fn atan(self) -> Complex
    {
        let iz = I * self;
        (I / 2.0) * ((1.0 - iz).ln() - (1.0 + iz).ln())
    }

    pub fn asec(self) -> Complex
    {
        1.0 / self.acos()
    }

    pub fn acsc(self) -> Complex
    {
        1.0 / self.asin()
    }

    pub fn acot(self) -> Complex
    {
        1.0 / self.atan()
    }

    /// `ln(z + sqrt(z² + 1))`
    pub fn asinh(self) -> Complex
    {
        (self + (self * self + 1.0).sqrt()).ln()
    }

    /// `ln(z + sqrt(z + 1)·sqrt(z - 1))`
    pub fn acosh(self) -> Complex
    {
        (self + (self + 1.0).sqrt() * (self - 1.0).sqrt()).ln()
    }

    /// `(ln(1 + z) - ln(1 - z)) / 2`
    pub fn atanh(self) -> Complex
    {
        0.5 * ((1.0 + self).ln() - (1.0 - self).ln())
    }

    pub fn asech(self) -> Complex
    {
        1.0 / self.acosh()
    }

    pub fn acsch(self) -> Complex
    {
        1.0 / self.asinh()
    }

    pub fn acoth(self) -> Complex
    {
        1.0 / self.atanh()
    }
}
