use crate::eval::{CalcError, Evaluator, Operator};
use log::{debug, trace};

/// Position over the input and the character currently under examination.
///
/// `position` is a byte offset and only moves forward; `current` is `None` at end of input.
#[derive(Debug)]
struct Cursor<'a> {
    input: &'a str,
    position: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            current: input.chars().next(),
        }
    }

    fn advance(&mut self) {
        if let Some(c) = self.current {
            self.position += c.len_utf8();
            self.current = self.input[self.position..].chars().next();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current.is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> CalcError {
        CalcError::parse(message, self.position)
    }
}

/// Single-pass recursive-descent parser that evaluates while it recognizes.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '(' expression ')' | ('-' | '+') factor
///             | identifier '(' expression ')' | number
/// ```
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    evaluator: &'a Evaluator,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(evaluator: &'a Evaluator, input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            evaluator,
            depth: 0,
        }
    }

    /// Evaluates the first complete expression in the input.
    pub(crate) fn parse(mut self) -> Result<f64, CalcError> {
        let value = self.expression()?;
        self.finish()?;
        Ok(value)
    }

    fn finish(&mut self) -> Result<(), CalcError> {
        self.cursor.skip_whitespace();
        let Some(c) = self.cursor.current else {
            return Ok(());
        };
        if self.evaluator.options().strict_trailing {
            return Err(self
                .cursor
                .error(format!("unexpected trailing input '{}'", c)));
        }
        debug!(
            "Ignoring trailing input at position {}: {:?}",
            self.cursor.position,
            &self.cursor.input[self.cursor.position..]
        );
        Ok(())
    }

    fn expression(&mut self) -> Result<f64, CalcError> {
        trace!("expression at {}", self.cursor.position);
        let mut value = self.term()?;

        loop {
            self.cursor.skip_whitespace();
            match self.peek_operator() {
                Some(operator) if operator.is_additive() => {
                    self.cursor.advance();
                    let right = self.term()?;
                    value = operator.apply(value, right)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        trace!("term at {}", self.cursor.position);
        let mut value = self.factor()?;

        loop {
            self.cursor.skip_whitespace();
            match self.peek_operator() {
                Some(operator) if !operator.is_additive() => {
                    self.cursor.advance();
                    let right = self.factor()?;
                    value = operator.apply(value, right)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        self.cursor.skip_whitespace();
        trace!("factor at {}: {:?}", self.cursor.position, self.cursor.current);

        match self.cursor.current {
            Some('(') => {
                self.cursor.advance();
                self.nested(|parser| {
                    let value = parser.expression()?;
                    parser.expect_closing()?;
                    Ok(value)
                })
            }
            Some('-') => {
                self.cursor.advance();
                Ok(-self.nested(Self::factor)?)
            }
            Some('+') => {
                self.cursor.advance();
                self.nested(Self::factor)
            }
            Some(c) if c.is_ascii_alphabetic() => self.function_call(),
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(c) => Err(self.cursor.error(format!("unexpected character '{}'", c))),
            None => Err(self.cursor.error("unexpected end of expression")),
        }
    }

    fn function_call(&mut self) -> Result<f64, CalcError> {
        let start = self.cursor.position;
        let max_len = self.evaluator.options().max_identifier_len;
        let mut name = String::new();

        while let Some(c) = self.cursor.current.filter(char::is_ascii_alphanumeric) {
            if name.len() >= max_len {
                return Err(CalcError::parse(
                    format!("identifier exceeds {} characters", max_len),
                    start,
                ));
            }
            name.push(c);
            self.cursor.advance();
        }

        self.cursor.skip_whitespace();
        if !self.cursor.eat('(') {
            return Err(self.cursor.error(format!("expected '(' after '{}'", name)));
        }

        let evaluator = self.evaluator;
        let function = evaluator
            .function(&name)
            .ok_or_else(|| CalcError::parse(format!("unknown function '{}'", name), start))?;

        let argument = self.nested(|parser| {
            let value = parser.expression()?;
            parser.expect_closing()?;
            Ok(value)
        })?;

        trace!("calling {}({})", name, argument);
        function(argument)
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let start = self.cursor.position;
        let mut literal = String::new();

        self.digits(&mut literal, start)?;
        if self.cursor.eat('.') {
            literal.push('.');
            if !self.cursor.current.is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.cursor.error("expected digit after decimal point"));
            }
            self.digits(&mut literal, start)?;
        }

        literal
            .parse::<f64>()
            .map_err(|e| CalcError::parse(format!("invalid number '{}': {}", literal, e), start))
    }

    fn digits(&mut self, literal: &mut String, start: usize) -> Result<(), CalcError> {
        let max_len = self.evaluator.options().max_number_len;

        while let Some(c) = self.cursor.current.filter(char::is_ascii_digit) {
            if literal.len() >= max_len {
                return Err(CalcError::parse(
                    format!("numeric literal exceeds {} characters", max_len),
                    start,
                ));
            }
            literal.push(c);
            self.cursor.advance();
        }
        Ok(())
    }

    fn expect_closing(&mut self) -> Result<(), CalcError> {
        self.cursor.skip_whitespace();
        if self.cursor.eat(')') {
            Ok(())
        } else {
            Err(self.cursor.error("expected ')'"))
        }
    }

    fn peek_operator(&self) -> Option<Operator> {
        self.cursor
            .current
            .and_then(|c| Operator::try_from(c).ok())
    }

    /// Runs `f` one nesting level deeper, refusing to exceed `max_depth`.
    fn nested<F>(&mut self, f: F) -> Result<f64, CalcError>
    where
        F: FnOnce(&mut Self) -> Result<f64, CalcError>,
    {
        let max_depth = self.evaluator.options().max_depth;
        if self.depth >= max_depth {
            return Err(self
                .cursor
                .error(format!("nesting depth exceeds {}", max_depth)));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
