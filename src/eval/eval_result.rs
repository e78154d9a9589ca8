use crate::eval::{CalcError, ErrorKind};

/// Upper bound on the characters kept in `EvalResult::message`.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Outcome of a primitive or of a whole evaluation.
///
/// When `error` is not `Success` the `value` is a `0.0` sentinel and must be ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalResult {
    pub value: f64,
    pub error: ErrorKind,
    pub message: String,
}

impl EvalResult {
    pub fn success(value: f64) -> Self {
        Self {
            value,
            error: ErrorKind::Success,
            message: String::new(),
        }
    }

    pub fn failure(error: &CalcError) -> Self {
        let mut message = error.to_string();
        if let Some((cut, _)) = message.char_indices().nth(MAX_MESSAGE_LEN) {
            message.truncate(cut);
        }
        Self {
            value: 0.0,
            error: error.kind(),
            message,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error == ErrorKind::Success
    }

    /// Utility function to get the value only when the evaluation succeeded.
    pub fn as_number(&self) -> Option<f64> {
        self.is_ok().then_some(self.value)
    }

    /// Converts back into a `Result`, keeping the kind and message of a failure.
    pub fn into_result(self) -> Result<f64, (ErrorKind, String)> {
        if self.is_ok() {
            Ok(self.value)
        } else {
            Err((self.error, self.message))
        }
    }
}

impl From<Result<f64, CalcError>> for EvalResult {
    fn from(result: Result<f64, CalcError>) -> Self {
        match result {
            Ok(value) => EvalResult::success(value),
            Err(error) => EvalResult::failure(&error),
        }
    }
}
