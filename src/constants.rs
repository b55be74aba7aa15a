//! # constants.rs
//!
//! Named complex constants.
//!
//! A compile-time table of the constants callers commonly need when working in
//! the complex plane, including the special values the engine itself produces
//! for invalid input.

use crate::complex::Complex;

use phf::Map;
use phf_macros::phf_map;

/// Map of named constants by their identifier.
static CONSTANTS: Map<&'static str, Complex> = phf_map! {
    "I" => Complex::I,
    "E" => Complex::new(std::f64::consts::E, 0.0),
    "PI" => Complex::new(std::f64::consts::PI, 0.0),
    "TAU" => Complex::new(std::f64::consts::TAU, 0.0),
    "INFINITY" => Complex::new(f64::INFINITY, 0.0),
    "NEG_INFINITY" => Complex::new(f64::NEG_INFINITY, 0.0),
    "NAN" => Complex::new(f64::NAN, 0.0),
};

/// Looks up a constant by name.
///
/// # Examples
/// ```
/// use ccalc::{constants, Complex};
///
/// assert_eq!(constants::get("I"), Some(Complex::I));
/// assert_eq!(constants::get("i"), None);
/// ```
pub fn get(name: &str) -> Option<Complex>
{
    CONSTANTS.get(name).copied()
}

/// Returns the names of all constants.
pub fn names() -> Vec<&'static str>
{
    CONSTANTS.keys().cloned().collect()
}
