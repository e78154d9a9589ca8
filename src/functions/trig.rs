use crate::eval::{CalcError, EvalResult, Evaluator};
use scicalc_macros::calc_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sin", try_sin);
    evaluator.register_function("cos", try_cos);
    evaluator.register_function("tan", try_tan);
    evaluator.register_function("asin", try_asin);
    evaluator.register_function("acos", try_acos);
    evaluator.register_function("atan", try_atan);
}

fn require_finite(name: &str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(format!(
            "{} requires a finite argument",
            name
        )))
    }
}

fn require_unit_interval(name: &str, value: f64) -> Result<f64, CalcError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CalcError::MathDomain(format!(
            "{} requires an argument in [-1, 1]",
            name
        )))
    }
}

fn finite_result(name: &str, result: f64) -> Result<f64, CalcError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::MathDomain(format!("{} result is not finite", name)))
    }
}

/// Sine of an angle in radians.
#[calc_fn]
pub fn sin(value: f64) -> Result<f64, CalcError> {
    Ok(require_finite("sin", value)?.sin())
}

/// Cosine of an angle in radians.
#[calc_fn]
pub fn cos(value: f64) -> Result<f64, CalcError> {
    Ok(require_finite("cos", value)?.cos())
}

/// Tangent of an angle in radians.
#[calc_fn]
pub fn tan(value: f64) -> Result<f64, CalcError> {
    finite_result("tan", require_finite("tan", value)?.tan())
}

#[calc_fn]
pub fn asin(value: f64) -> Result<f64, CalcError> {
    let value = require_unit_interval("asin", require_finite("asin", value)?)?;
    finite_result("asin", value.asin())
}

#[calc_fn]
pub fn acos(value: f64) -> Result<f64, CalcError> {
    let value = require_unit_interval("acos", require_finite("acos", value)?)?;
    finite_result("acos", value.acos())
}

#[calc_fn]
pub fn atan(value: f64) -> Result<f64, CalcError> {
    Ok(require_finite("atan", value)?.atan())
}
