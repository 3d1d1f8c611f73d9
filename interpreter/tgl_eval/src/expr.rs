//! Minimal expression evaluator for free-form `log(...)` arguments.
//!
//! Recursive descent over numeric literals, quoted strings, variable and
//! list-index references, the four arithmetic operators and parentheses.
//! `+` doubles as concatenation when either operand is text. This replaces
//! the host-language `eval` the dialect originally leaned on: no general
//! evaluation, a stable contract for tests.

use tgl_ir::Value;

use crate::env::Environment;
use crate::errors::{expression_error, EvalError, EvalResult};

/// Evaluate a free-form expression against the namespace.
pub fn evaluate_expr(src: &str, env: &Environment) -> EvalResult<Value> {
    let mut parser = Parser { src, pos: 0, env };
    let value = parser.expression()?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    env: &'a Environment,
}

impl Parser<'_> {
    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> EvalResult<Value> {
        let mut acc = self.term()?;
        loop {
            self.skip_ws();
            match self.peek() {
                Some('+') => {
                    self.bump();
                    let rhs = self.term()?;
                    acc = self.add(acc, rhs)?;
                }
                Some('-') => {
                    self.bump();
                    let rhs = self.term()?;
                    acc = self.arith(acc, rhs, "-", |a, b| a - b)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> EvalResult<Value> {
        let mut acc = self.factor()?;
        loop {
            self.skip_ws();
            match self.peek() {
                Some('*') => {
                    self.bump();
                    let rhs = self.factor()?;
                    acc = self.arith(acc, rhs, "*", |a, b| a * b)?;
                }
                Some('/') => {
                    self.bump();
                    let rhs = self.factor()?;
                    acc = self.arith(acc, rhs, "/", |a, b| a / b)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    // factor := number | string | reference | '(' expression ')' | '-' factor
    fn factor(&mut self) -> EvalResult<Value> {
        self.skip_ws();
        match self.peek() {
            Some('(') => {
                self.bump();
                let value = self.expression()?;
                self.skip_ws();
                if self.peek() != Some(')') {
                    return Err(self.error("expected closing parenthesis"));
                }
                self.bump();
                Ok(value)
            }
            Some('-') => {
                self.bump();
                let value = self.factor()?;
                match value.as_number() {
                    Some(n) => Ok(Value::Number(-n)),
                    None => Err(self.error(format!("cannot negate {}", value.type_name()))),
                }
            }
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                self.string_until(quote)
            }
            Some('[') => {
                self.bump();
                let name = self.take_until(']')?;
                self.env.lookup(name.trim())
            }
            Some('/') => {
                self.bump();
                let name = self.take_until('/')?.trim().to_string();
                self.skip_ws();
                if self.peek() != Some('<') {
                    return Err(self.error("expected <index> after list name"));
                }
                self.bump();
                let digits = self.take_until('>')?;
                let index = digits
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| self.error(format!("bad list index: {digits}")))?;
                self.env.list_item(&name, index)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(self.error(format!("unexpected character '{c}'"))),
            None => Err(self.error("unexpected end of expression")),
        }
    }

    fn number(&mut self) -> EvalResult<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.bump();
        }
        let digits = &self.src[start..self.pos];
        digits
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| self.error(format!("bad number: {digits}")))
    }

    /// Consume a quoted string body. The dialect has no escape sequences.
    fn string_until(&mut self, quote: char) -> EvalResult<Value> {
        let body = self.take_until(quote)?;
        Ok(Value::text(body))
    }

    /// Consume up to (and including) the closing delimiter, returning the
    /// text before it.
    fn take_until(&mut self, close: char) -> EvalResult<String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == close {
                let body = self.src[start..self.pos].to_string();
                self.bump();
                return Ok(body);
            }
            self.bump();
        }
        Err(self.error(format!("missing closing '{close}'")))
    }

    fn add(&self, left: Value, right: Value) -> EvalResult<Value> {
        if matches!(left, Value::Text(_)) || matches!(right, Value::Text(_)) {
            return Ok(Value::text(format!("{left}{right}")));
        }
        self.arith(left, right, "+", |a, b| a + b)
    }

    fn arith(
        &self,
        left: Value,
        right: Value,
        op: &str,
        apply: fn(f64, f64) -> f64,
    ) -> EvalResult<Value> {
        match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Ok(Value::Number(apply(a, b))),
            _ => Err(self.error(format!(
                "cannot apply '{op}' to {} and {}",
                left.type_name(),
                right.type_name()
            ))),
        }
    }

    fn error(&self, detail: impl std::fmt::Display) -> EvalError {
        expression_error(format!("error evaluating \"{}\": {detail}", self.src))
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }
}
