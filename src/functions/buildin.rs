//! # buildin.rs
//!
//! The built-in function catalogue.
//!
//! Every function of the engine is listed once in `define_functions!`, which
//! generates the [`FuncKind`] enum, its name table, `FromStr`, and the mapping
//! to a callable [`FunctionImpl`].

use crate::complex::Complex;

/// Error type for parsing built-in function names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseFuncError {
    /// The function name is not recognized.
    UnknownFunction,
}

impl std::fmt::Display for ParseFuncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction => write!(f, "unknown function"),
        }
    }
}

impl std::error::Error for ParseFuncError {}

macro_rules! define_functions {
    ( $( $name:ident => $imp:expr), + $(,)? ) => {
        /// Enumeration of the built-in functions.
        #[allow(non_camel_case_types)] // To use ident as string to compare them.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum FuncKind {
            $( $name ), +
        }

        impl FuncKind {
            /// Returns a list of available function names.
            pub fn available_names() -> &'static [&'static str]
            {
                &[ $( stringify!($name) ),+ ]
            }

            /// Returns the name of this function.
            pub fn name(&self) -> &'static str
            {
                match self {
                    $( Self::$name => stringify!($name), )+
                }
            }
        }

        impl std::str::FromStr for FuncKind {
            type Err = ParseFuncError;

            /// Parses a string into a FuncKind variant.
            fn from_str(s: &str) -> Result<Self, Self::Err>
            {
                match s {
                    $(
                        stringify!($name) => Ok(Self::$name),
                    )+
                    _ => Err(ParseFuncError::UnknownFunction),
                }
            }
        }

        impl From<FuncKind> for FunctionImpl {
            /// Converts a FuncKind into its implementation.
            fn from(kind: FuncKind) -> Self
            {
                match kind {
                    $(
                        FuncKind::$name => $imp,
                    )+
                }
            }
        }
    };
}

define_functions!(
    sin       => FunctionImpl::Unary(|x: Complex| x.sin()),
    cos       => FunctionImpl::Unary(|x: Complex| x.cos()),
    tan       => FunctionImpl::Unary(|x: Complex| x.tan()),
    sec       => FunctionImpl::Unary(|x: Complex| x.sec()),
    csc       => FunctionImpl::Unary(|x: Complex| x.csc()),
    cot       => FunctionImpl::Unary(|x: Complex| x.cot()),
    asin      => FunctionImpl::Unary(|x: Complex| x.asin()),
    acos      => FunctionImpl::Unary(|x: Complex| x.acos()),
    atan      => FunctionImpl::Unary(|x: Complex| x.atan()),
    asec      => FunctionImpl::Unary(|x: Complex| x.asec()),
    acsc      => FunctionImpl::Unary(|x: Complex| x.acsc()),
    acot      => FunctionImpl::Unary(|x: Complex| x.acot()),
    sinh      => FunctionImpl::Unary(|x: Complex| x.sinh()),
    cosh      => FunctionImpl::Unary(|x: Complex| x.cosh()),
    tanh      => FunctionImpl::Unary(|x: Complex| x.tanh()),
    sech      => FunctionImpl::Unary(|x: Complex| x.sech()),
    csch      => FunctionImpl::Unary(|x: Complex| x.csch()),
    coth      => FunctionImpl::Unary(|x: Complex| x.coth()),
    asinh     => FunctionImpl::Unary(|x: Complex| x.asinh()),
    acosh     => FunctionImpl::Unary(|x: Complex| x.acosh()),
    atanh     => FunctionImpl::Unary(|x: Complex| x.atanh()),
    asech     => FunctionImpl::Unary(|x: Complex| x.asech()),
    acsch     => FunctionImpl::Unary(|x: Complex| x.acsch()),
    acoth     => FunctionImpl::Unary(|x: Complex| x.acoth()),
    exp       => FunctionImpl::Unary(|x: Complex| x.exp()),
    ln        => FunctionImpl::Unary(|x: Complex| x.ln()),
    log10     => FunctionImpl::Unary(|x: Complex| x.log10()),
    // only the real part of the base is used
    log       => FunctionImpl::Binary(|x: Complex, base: Complex| x.log(base.real)),
    sqrt      => FunctionImpl::Unary(|x: Complex| x.sqrt()),
    abs       => FunctionImpl::Unary(|x: Complex| Complex::from(x.abs())),
    arg       => FunctionImpl::Unary(|x: Complex| Complex::from(x.arg())),
    conj      => FunctionImpl::Unary(|x: Complex| x.conj()),
    normalize => FunctionImpl::Unary(|x: Complex| x.normalize()),
    signum    => FunctionImpl::Unary(|x: Complex| Complex::from(x.signum())),
    pow       => FunctionImpl::Binary(|l: Complex, r: Complex| l.powc(r)),
);

/// Function implementation variants.
#[derive(Clone, Copy, Debug)]
pub enum FunctionImpl
{
    /// Function of a single complex argument.
    Unary(fn(Complex) -> Complex),
    /// Function of two complex arguments.
    Binary(fn(Complex, Complex) -> Complex),
}

impl FunctionImpl
{
    /// Number of arguments the function takes.
    pub fn arity(&self) -> usize
    {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Calls the function on `args`.
    ///
    /// The argument count is only checked in debug builds; callers that take
    /// untrusted input go through [`crate::functions::evaluate`].
    ///
    /// # Panics
    /// Panics in debug builds when `args.len()` differs from [`arity`](Self::arity).
    /// Release builds panic only when `args` is shorter than the arity, and
    /// ignore any extra arguments.
    pub fn apply(&self, args: &[Complex]) -> Complex
    {
        debug_assert_eq!(args.len(), self.arity());
        match self {
            Self::Unary(f) => f(args[0]),
            Self::Binary(f) => f(args[0], args[1]),
        }
    }
}

impl FuncKind
{
    /// Number of arguments the function takes.
    pub fn arity(&self) -> usize
    {
        FunctionImpl::from(*self).arity()
    }

    /// Calls the function on `args`; see [`FunctionImpl::apply`].
    ///
    /// # Panics
    /// Panics when `args` is shorter than [`arity`](Self::arity), and in debug
    /// builds on any length mismatch. [`crate::functions::evaluate`] checks the
    /// count and returns an error instead.
    pub fn apply(&self, args: &[Complex]) -> Complex
    {
        FunctionImpl::from(*self).apply(args)
    }
}

impl std::fmt::Display for FuncKind
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
