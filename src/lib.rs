pub mod eval;
pub mod functions;

pub use eval::{
    describe_code, CalcError, ErrorKind, EvalResult, Evaluator, EvaluatorOptions, Operator,
};

/// Evaluates `expression` with the default options and function table.
pub fn evaluate(expression: &str) -> EvalResult {
    Evaluator::new().evaluate(expression)
}

/// Evaluates independent expressions in parallel with the default evaluator.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<EvalResult>
where
    S: AsRef<str> + Sync,
{
    Evaluator::new().evaluate_batch(expressions)
}
