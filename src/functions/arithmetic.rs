use crate::eval::{CalcError, EvalResult};
use scicalc_macros::calc_fn;

/// Addition, refusing sums beyond the finite `f64` range.
#[calc_fn]
pub fn add(a: f64, b: f64) -> Result<f64, CalcError> {
    if (b > 0.0 && a > f64::MAX - b) || (b < 0.0 && a < f64::MIN - b) {
        return Err(CalcError::Overflow("sum exceeds the finite range".to_string()));
    }
    let sum = a + b;
    if !sum.is_finite() {
        return Err(CalcError::Overflow("sum is not finite".to_string()));
    }
    Ok(sum)
}

/// Subtraction, refusing differences beyond the finite `f64` range.
#[calc_fn]
pub fn subtract(a: f64, b: f64) -> Result<f64, CalcError> {
    if (b < 0.0 && a > f64::MAX + b) || (b > 0.0 && a < f64::MIN + b) {
        return Err(CalcError::Overflow("difference exceeds the finite range".to_string()));
    }
    let difference = a - b;
    if !difference.is_finite() {
        return Err(CalcError::Overflow("difference is not finite".to_string()));
    }
    Ok(difference)
}

#[calc_fn]
pub fn multiply(a: f64, b: f64) -> Result<f64, CalcError> {
    let product = a * b;
    if !product.is_finite() {
        return Err(CalcError::Overflow("product is not finite".to_string()));
    }
    Ok(product)
}

#[calc_fn]
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    let quotient = a / b;
    if !quotient.is_finite() {
        return Err(CalcError::Overflow("quotient is not finite".to_string()));
    }
    Ok(quotient)
}

/// `base` raised to `exponent`; any non-finite outcome is a domain error.
#[calc_fn]
pub fn power(base: f64, exponent: f64) -> Result<f64, CalcError> {
    let result = base.powf(exponent);
    if !result.is_finite() {
        return Err(CalcError::MathDomain(
            "power has no finite real result".to_string(),
        ));
    }
    Ok(result)
}
