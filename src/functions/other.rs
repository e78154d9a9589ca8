use crate::eval::{CalcError, EvalResult, Evaluator};
use scicalc_macros::calc_fn;

/// Largest argument whose factorial still fits in a finite `f64`.
pub const MAX_FACTORIAL_ARG: f64 = 170.0;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("abs", try_abs);
    evaluator.register_function("factorial", try_factorial);
}

#[calc_fn]
pub fn abs(value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput(
            "abs requires a finite argument".to_string(),
        ));
    }
    Ok(value.abs())
}

/// Factorial of a non-negative integral value, computed iteratively.
#[calc_fn]
pub fn factorial(value: f64) -> Result<f64, CalcError> {
    if !(value >= 0.0 && value == value.floor()) {
        return Err(CalcError::MathDomain(
            "factorial requires a non-negative integer".to_string(),
        ));
    }
    if value > MAX_FACTORIAL_ARG {
        return Err(CalcError::Overflow(
            "factorial argument exceeds 170".to_string(),
        ));
    }

    let n = value as u32;
    Ok((2..=n).fold(1.0, |acc, i| acc * i as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::ErrorKind;

    #[test]
    fn test_abs() {
        assert_eq!(abs(-3.5), EvalResult::success(3.5));
        assert_eq!(abs(2.0), EvalResult::success(2.0));
        assert_eq!(abs(f64::NEG_INFINITY).error, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), EvalResult::success(1.0));
        assert_eq!(factorial(1.0), EvalResult::success(1.0));
        assert_eq!(factorial(5.0), EvalResult::success(120.0));
        assert_eq!(factorial(10.0), EvalResult::success(3_628_800.0));
    }

    #[test]
    fn test_factorial_domain() {
        assert_eq!(factorial(-1.0).error, ErrorKind::MathDomain);
        assert_eq!(factorial(3.5).error, ErrorKind::MathDomain);
        assert_eq!(factorial(f64::NAN).error, ErrorKind::MathDomain);
    }

    #[test]
    fn test_factorial_overflow_threshold() {
        let largest = factorial(170.0);
        assert!(largest.is_ok());
        assert!(largest.value.is_finite());
        assert_eq!(factorial(171.0).error, ErrorKind::Overflow);
        assert_eq!(factorial(f64::INFINITY).error, ErrorKind::Overflow);
    }
}
