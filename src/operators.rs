//! # operators.rs
//!
//! Arithmetic on complex and real operands.
//!
//! Every combination of `Complex` and `f64` operands is covered by the
//! standard operator traits, so `1.0 - z`, `z / 2.0` and `a * b` all read the
//! way they are written on paper. A real operand behaves as a complex value
//! with a zero imaginary part.
//!
//! On top of the overloads this module provides a by-name dispatch layer:
//! [`Operand`] tags a value as real or complex, and [`UnaryOperatorKind`] /
//! [`BinaryOperatorKind`] apply an operator chosen at runtime.
//!
//! Division is never guarded: dividing by zero yields infinite or NaN
//! components.

use crate::complex::Complex;

use num_traits::Inv;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for Complex
{
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex
    {
        Complex::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for Complex
{
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex
    {
        Complex::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Mul for Complex
{
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex
    {
        Complex::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

/// Multiplies by the conjugate of the divisor, then divides by the divisor's
/// squared modulus.
impl Div for Complex
{
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex
    {
        let conj = rhs.conj();
        let numerator = self * conj;
        let denominator = rhs * conj;
        numerator / denominator.real
    }
}

impl Neg for Complex
{
    type Output = Complex;

    fn neg(self) -> Complex
    {
        Complex::new(-self.real, -self.imag)
    }
}

impl Inv for Complex
{
    type Output = Complex;

    fn inv(self) -> Complex
    {
        1.0 / self
    }
}

impl Add<f64> for Complex
{
    type Output = Complex;

    fn add(self, rhs: f64) -> Complex
    {
        Complex::new(self.real + rhs, self.imag)
    }
}

impl Sub<f64> for Complex
{
    type Output = Complex;

    fn sub(self, rhs: f64) -> Complex
    {
        Complex::new(self.real - rhs, self.imag)
    }
}

impl Mul<f64> for Complex
{
    type Output = Complex;

    fn mul(self, rhs: f64) -> Complex
    {
        Complex::new(self.real * rhs, self.imag * rhs)
    }
}

impl Div<f64> for Complex
{
    type Output = Complex;

    fn div(self, rhs: f64) -> Complex
    {
        Complex::new(self.real / rhs, self.imag / rhs)
    }
}

impl Add<Complex> for f64
{
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex
    {
        rhs + self
    }
}

impl Sub<Complex> for f64
{
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex
    {
        Complex::new(self - rhs.real, -rhs.imag)
    }
}

impl Mul<Complex> for f64
{
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex
    {
        rhs * self
    }
}

impl Div<Complex> for f64
{
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex
    {
        Complex::from(self) / rhs
    }
}

/// An operand that is either a plain real number or a complex value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand
{
    Real(f64),
    Complex(Complex),
}

impl Operand
{
    /// Promotes the operand to a complex value.
    pub fn to_complex(self) -> Complex
    {
        match self {
            Self::Real(x) => Complex::from(x),
            Self::Complex(z) => z,
        }
    }
}

impl From<f64> for Operand
{
    fn from(x: f64) -> Self { Self::Real(x) }
}

impl From<Complex> for Operand
{
    fn from(z: Complex) -> Self { Self::Complex(z) }
}

impl From<Operand> for Complex
{
    fn from(operand: Operand) -> Self { operand.to_complex() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseOperatorError {
    UnknownOperator,
}

impl std::fmt::Display for ParseOperatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator => write!(f, "unknown operator"),
        }
    }
}

impl std::error::Error for ParseOperatorError {}

macro_rules! unary_operator_kinds {
    ($( $name: ident => { symbol: $symbol:expr, apply: $apply:expr } ), + $(,)? ) => {
        /// A unary operator on complex values.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum UnaryOperatorKind {
            $($name), *
        }

        impl UnaryOperatorKind {
            /// Applies the operator to a complex value.
            pub fn apply(&self, x: Complex) -> Complex
            {
                match self {
                    $( Self::$name => $apply(x), )*
                }
            }

            /// Returns all supported unary operator symbols.
            pub fn names() -> &'static [&'static str]
            {
                &[ $( $symbol ),+ ]
            }

            /// Returns the symbol of this operator.
            pub fn symbol(&self) -> &'static str
            {
                match self {
                    $( Self::$name => $symbol, )*
                }
            }
        }

        impl std::str::FromStr for UnaryOperatorKind {
            type Err = ParseOperatorError;

            fn from_str(s: &str) -> Result<Self, Self::Err>
            {
                match s {
                    $(
                        $symbol => Ok(Self::$name),
                    )+
                    _ => Err(ParseOperatorError::UnknownOperator),
                }
            }
        }

        impl std::fmt::Display for UnaryOperatorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

unary_operator_kinds! {
    Pos  => { symbol: "+", apply: |x: Complex| x },
    Neg  => { symbol: "-", apply: |x: Complex| -x },
    Conj => { symbol: "~", apply: |x: Complex| x.conj() },
}

macro_rules! binary_operator_kinds {
    ($( $name: ident => {
        symbol: $symbol:expr,
        real: $real:expr,
        apply: $apply:expr
    } ), + $(,)? ) => {
        /// A binary operator on real or complex operands.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum BinaryOperatorKind {
            $($name), *
        }

        impl BinaryOperatorKind {
            /// Applies the operator to two operands.
            ///
            /// Two real operands stay real where the operator is closed over the
            /// reals; any other combination is evaluated in the complex domain.
            pub fn apply<L, R>(&self, l: L, r: R) -> Operand
            where
                L: Into<Operand>,
                R: Into<Operand>,
            {
                let (l, r): (Operand, Operand) = (l.into(), r.into());
                match (self, l, r) {
                    $(
                        (Self::$name, Operand::Real(l), Operand::Real(r)) => $real(l, r),
                        (Self::$name, l, r) => Operand::Complex($apply(l.to_complex(), r.to_complex())),
                    )*
                }
            }

            /// Returns all supported binary operator symbols.
            pub fn names() -> &'static [&'static str]
            {
                &[ $( $symbol ),+ ]
            }

            /// Returns the symbol of this operator.
            pub fn symbol(&self) -> &'static str
            {
                match self {
                    $( Self::$name => $symbol, )*
                }
            }
        }

        impl std::str::FromStr for BinaryOperatorKind {
            type Err = ParseOperatorError;

            fn from_str(s: &str) -> Result<Self, Self::Err>
            {
                match s {
                    $(
                        $symbol => Ok(Self::$name),
                    )+
                    _ => Err(ParseOperatorError::UnknownOperator),
                }
            }
        }

        impl std::fmt::Display for BinaryOperatorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

binary_operator_kinds! {
    Add => { symbol: "+", real: |l: f64, r: f64| Operand::Real(l + r), apply: |l: Complex, r: Complex| l + r },
    Sub => { symbol: "-", real: |l: f64, r: f64| Operand::Real(l - r), apply: |l: Complex, r: Complex| l - r },
    Mul => { symbol: "*", real: |l: f64, r: f64| Operand::Real(l * r), apply: |l: Complex, r: Complex| l * r },
    Div => { symbol: "/", real: |l: f64, r: f64| Operand::Real(l / r), apply: |l: Complex, r: Complex| l / r },
    // `^` inherits the argument's folding of the left half-plane: a negative real base acts as its absolute value
    Pow => {
        symbol: "^",
        real: |l: f64, r: f64| Operand::Complex(Complex::from(l).powc(Complex::from(r))),
        apply: |l: Complex, r: Complex| l.powc(r)
    },
}
