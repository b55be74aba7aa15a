//! Computes `exp(1 + 2i)` and prints it as `<real> + <imag>i`.
use ccalc::Complex;

fn main() {
    let c1 = Complex::new(1.0, 2.0);
    let result = c1.exp();

    print!("{:.15} + {:.15}i", result.real, result.imag);
}
