pub mod arithmetic;
pub mod exponential;
pub mod other;
pub mod trig;

use crate::eval::Evaluator;

pub use arithmetic::{add, divide, multiply, power, subtract};
pub use exponential::{exp, log, log10, sqrt};
pub use other::{abs, factorial};
pub use trig::{acos, asin, atan, cos, sin, tan};

/// Installs the named single-argument functions the parser can call.
pub fn register_functions(evaluator: &mut Evaluator) {
    trig::register(evaluator);
    exponential::register(evaluator);
    other::register(evaluator);
}
