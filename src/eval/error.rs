use thiserror::Error;

/// Classification tag carried by every `EvalResult`.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    #[default]
    Success = 0,
    InvalidInput = 1,
    DivisionByZero = 2,
    MathDomain = 3,
    Overflow = 4,
    ParseError = 5,
}

impl ErrorKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ErrorKind::Success => "Success",
            ErrorKind::InvalidInput => "Invalid input",
            ErrorKind::DivisionByZero => "Division by zero",
            ErrorKind::MathDomain => "Math domain error",
            ErrorKind::Overflow => "Overflow error",
            ErrorKind::ParseError => "Parse error",
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_code(code: i32) -> Option<ErrorKind> {
        match code {
            0 => Some(ErrorKind::Success),
            1 => Some(ErrorKind::InvalidInput),
            2 => Some(ErrorKind::DivisionByZero),
            3 => Some(ErrorKind::MathDomain),
            4 => Some(ErrorKind::Overflow),
            5 => Some(ErrorKind::ParseError),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Describes a raw error code, falling back to "Unknown error" outside the enumeration.
pub fn describe_code(code: i32) -> &'static str {
    ErrorKind::from_code(code).map_or("Unknown error", |kind| kind.describe())
}

/// Failure raised by a numeric primitive or by the parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Math domain error: {0}")]
    MathDomain(String),

    #[error("Overflow error: {0}")]
    Overflow(String),

    #[error("Parse error: {message} at position {position}")]
    Parse { message: String, position: usize },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidInput(_) => ErrorKind::InvalidInput,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::MathDomain(_) => ErrorKind::MathDomain,
            CalcError::Overflow(_) => ErrorKind::Overflow,
            CalcError::Parse { .. } => ErrorKind::ParseError,
        }
    }

    pub(crate) fn parse(message: impl Into<String>, position: usize) -> Self {
        CalcError::Parse {
            message: message.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_every_kind() {
        assert_eq!(ErrorKind::Success.describe(), "Success");
        assert_eq!(ErrorKind::InvalidInput.describe(), "Invalid input");
        assert_eq!(ErrorKind::DivisionByZero.describe(), "Division by zero");
        assert_eq!(ErrorKind::MathDomain.describe(), "Math domain error");
        assert_eq!(ErrorKind::Overflow.describe(), "Overflow error");
        assert_eq!(ErrorKind::ParseError.describe(), "Parse error");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(describe_code(3), "Math domain error");
        assert_eq!(describe_code(42), "Unknown error");
        assert_eq!(describe_code(-1), "Unknown error");
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..6 {
            let kind = ErrorKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert_eq!(ErrorKind::from_code(6), None);
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(CalcError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
        assert_eq!(
            CalcError::parse("unexpected end of expression", 2).kind(),
            ErrorKind::ParseError
        );
        assert_eq!(
            CalcError::MathDomain("sqrt of negative value".into()).kind(),
            ErrorKind::MathDomain
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            CalcError::parse("expected ')'", 6).to_string(),
            "Parse error: expected ')' at position 6"
        );
        assert_eq!(
            CalcError::Overflow("factorial argument exceeds 170".into()).to_string(),
            "Overflow error: factorial argument exceeds 170"
        );
    }
}
