//! # ccalc
//!
//! `ccalc` is a scalar complex-number arithmetic library over `f64` pairs.
//!
//! ## Overview
//! - Elementary arithmetic on any mix of real and complex operands through the
//!   standard operators (`+ - * /` and unary `-`).
//! - Generalized powers, square root, exponential, natural, base-10 and
//!   any-base logarithms.
//! - The full circular and hyperbolic families: forward, inverse and reciprocal.
//! - By-name access to the catalogue for callers that choose a function or an
//!   operator at runtime.
//!
//! Internally the functions are layered: core arithmetic, then power/log
//! (polar form), then forward trigonometry (closed forms), then the inverse
//! functions, which are logarithmic identities over the layers below.
//!
//! ## Special values instead of errors
//! Arithmetic never fails. Division by the zero value, the argument or
//! logarithm of zero and normalization of zero produce NaN or infinite
//! components that propagate through later operations; check them with
//! [`Complex::is_finite`] or [`Complex::is_nan`].
//!
//! ## Branches
//! The argument is `atan(imag / real)`, so it only agrees with the principal
//! argument in the right half-plane. Powers, roots, logarithms and every
//! inverse function inherit this.
//!
//! ## Example
//! ```rust
//! use ccalc::Complex;
//!
//! let a = Complex::new(1.0, 2.0);
//! let b = Complex::new(3.0, 4.0);
//!
//! assert_eq!(a + b, Complex::new(4.0, 6.0));
//! assert_eq!(a * b, Complex::new(-5.0, 10.0));
//! assert_eq!(b.abs(), 5.0);
//!
//! let e = a.exp();
//! assert!((e.real - -1.1312043837568135).abs() < 1.0e-12);
//! assert!((e.imag - 2.4717266720048188).abs() < 1.0e-12);
//! ```
//!
//! ## Example: Retrieving All Names
//! ```rust
//! use ccalc::{constants, functions, BinaryOperatorKind, UnaryOperatorKind};
//!
//! println!("Constants: {:?}", constants::names());
//! println!("Unary Operators: {:?}", UnaryOperatorKind::names());
//! println!("Binary Operators: {:?}", BinaryOperatorKind::names());
//! println!("Functions: {:?}", functions::names());
//! ```
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

mod complex;
mod inverse;
mod power;
mod trig;
pub mod constants;
pub mod functions;
pub mod operators;

pub use complex::Complex;
pub use functions::FuncKind;
pub use operators::{BinaryOperatorKind, Operand, UnaryOperatorKind};
