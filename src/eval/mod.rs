mod error;
mod eval_result;
mod evaluator;
mod parser;

pub use error::*;
pub use eval_result::*;
pub use evaluator::*;

use crate::functions::arithmetic::{try_add, try_divide, try_multiply, try_subtract};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => try_add(left, right),
            Operator::Subtract => try_subtract(left, right),
            Operator::Multiply => try_multiply(left, right),
            Operator::Divide => try_divide(left, right),
        }
    }

    /// `+` and `-`, the operators joining terms.
    pub fn is_additive(&self) -> bool {
        matches!(self, Operator::Add | Operator::Subtract)
    }
}

impl TryFrom<char> for Operator {
    type Error = String;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}
