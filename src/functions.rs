//! Top-level functions module.
//!
//! Groups the by-name access to the function catalogue:
//!
//! - `buildin`: the built-in function registry ([`FuncKind`]) and its
//!   callable implementations.
//!
//! [`evaluate`] is the checked entry point for callers that pick a function
//! from a string at runtime.
pub(crate) mod buildin;

pub use buildin::{FuncKind, FunctionImpl, ParseFuncError};

use crate::complex::Complex;

/// Return the available built-in function names.
pub fn names() -> &'static [&'static str]
{
    FuncKind::available_names()
}

/// Looks up `name` and applies it to `args`.
///
/// # Errors
/// Returns a message if the name is unknown or the number of arguments does
/// not match the function's arity. Numeric failures are not errors: they come
/// back as NaN or infinite components.
///
/// # Examples
/// ```
/// use ccalc::{functions, Complex};
///
/// let z = functions::evaluate("exp", &[Complex::new(0.0, 0.0)]).unwrap();
/// assert!((z.real - 1.0).abs() < 1.0e-15);
///
/// assert!(functions::evaluate("exp", &[]).is_err());
/// assert!(functions::evaluate("nope", &[Complex::ONE]).is_err());
/// ```
pub fn evaluate(name: &str, args: &[Complex]) -> Result<Complex, String>
{
    let kind: FuncKind = name.parse()
        .map_err(|e| format!("Invalid function '{}': {}.", name, e))?;

    let expected = kind.arity();
    if args.len() != expected {
        return Err(format!(
            "Invalid call: '{}' takes {} argument(s), but {} given.", name, expected, args.len()
        ));
    }
    Ok(kind.apply(args))
}
