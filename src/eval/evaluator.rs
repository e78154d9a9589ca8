use crate::eval::parser::Parser;
use crate::eval::{CalcError, EvalResult};
use crate::functions::register_functions;
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(f64) -> Result<f64, CalcError> + Send + Sync>;

pub const DEFAULT_MAX_DEPTH: usize = 256;
pub const DEFAULT_MAX_NUMBER_LEN: usize = 63;
pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 31;

/// Parsing limits and leniency switches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Reject input left over after the first complete expression.
    pub strict_trailing: bool,
    /// Maximum nesting of parentheses, unary signs and function calls.
    pub max_depth: usize,
    pub max_number_len: usize,
    pub max_identifier_len: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            strict_trailing: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_number_len: DEFAULT_MAX_NUMBER_LEN,
            max_identifier_len: DEFAULT_MAX_IDENTIFIER_LEN,
        }
    }
}

impl EvaluatorOptions {
    pub fn strict_trailing(mut self, strict: bool) -> Self {
        self.strict_trailing = strict;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn max_number_len(mut self, len: usize) -> Self {
        self.max_number_len = len;
        self
    }

    pub fn max_identifier_len(mut self, len: usize) -> Self {
        self.max_identifier_len = len;
        self
    }
}

pub struct Evaluator {
    functions: HashMap<String, Function>,
    options: EvaluatorOptions,
}

impl Evaluator {
    /// Creates an evaluator with the default options and the built-in function table.
    pub fn new() -> Self {
        Self::with_options(EvaluatorOptions::default())
    }

    pub fn with_options(options: EvaluatorOptions) -> Self {
        let mut evaluator = Self::without_functions(options);
        register_functions(&mut evaluator);
        evaluator
    }

    /// Creates an evaluator whose function table is empty.
    pub fn without_functions(options: EvaluatorOptions) -> Self {
        Self {
            functions: HashMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Registers a named single-argument function, replacing any previous entry.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> Result<f64, CalcError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Names in the function table, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Evaluates a given expression string.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if the evaluation succeeds.
    /// * `Err(CalcError)` for the first error met, either while parsing or in a primitive.
    pub fn try_evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        if expression.trim().is_empty() {
            return Err(CalcError::InvalidInput("empty expression".to_string()));
        }
        Parser::new(self, expression).parse()
    }

    /// Evaluates a given expression string, packaging the outcome into an `EvalResult`.
    pub fn evaluate(&self, expression: &str) -> EvalResult {
        debug!("Evaluating expression: {:?}", expression);
        let result = EvalResult::from(self.try_evaluate(expression));
        debug!("Evaluation result: {:?}", result);
        result
    }

    /// Evaluates independent expressions in parallel, keeping input order.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<EvalResult>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Evaluating batch of {} expressions", expressions.len());
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
