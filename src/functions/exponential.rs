use crate::eval::{CalcError, EvalResult, Evaluator};
use scicalc_macros::calc_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("log", try_log);
    evaluator.register_function("log10", try_log10);
    evaluator.register_function("exp", try_exp);
    evaluator.register_function("sqrt", try_sqrt);
}

fn positive_log(name: &str, value: f64, log: fn(f64) -> f64) -> Result<f64, CalcError> {
    if value <= 0.0 {
        return Err(CalcError::MathDomain(format!(
            "{} requires a positive argument",
            name
        )));
    }
    let result = log(value);
    if !result.is_finite() {
        return Err(CalcError::MathDomain(format!("{} result is not finite", name)));
    }
    Ok(result)
}

/// Natural logarithm.
#[calc_fn]
pub fn log(value: f64) -> Result<f64, CalcError> {
    positive_log("log", value, f64::ln)
}

/// Base-10 logarithm.
#[calc_fn]
pub fn log10(value: f64) -> Result<f64, CalcError> {
    positive_log("log10", value, f64::log10)
}

#[calc_fn]
pub fn exp(value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput(
            "exp requires a finite argument".to_string(),
        ));
    }
    let result = value.exp();
    if !result.is_finite() {
        return Err(CalcError::Overflow("exp result is not finite".to_string()));
    }
    Ok(result)
}

#[calc_fn]
pub fn sqrt(value: f64) -> Result<f64, CalcError> {
    if value < 0.0 {
        return Err(CalcError::MathDomain(
            "sqrt requires a non-negative argument".to_string(),
        ));
    }
    Ok(value.sqrt())
}
