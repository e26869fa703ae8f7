// ABOUTME: Reader module implementing a hand-written recursive-descent S-expression parser

use crate::error::EvalError;
use crate::value::{ConsCell, Value};
use std::cell::RefCell;
use std::rc::Rc;

struct Reader<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, index: 0 }
    }

    fn at_end(&self) -> bool {
        self.index >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.index + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.index += 1;
        }
        b
    }

    fn is_whitespace(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\n')
    }

    fn is_delimiter(b: u8) -> bool {
        Self::is_whitespace(b) || b == b'(' || b == b')'
    }

    /// Skips whitespace and `;`-to-end-of-line comments.
    fn skip_ws_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(b) if Self::is_whitespace(b) => {
                    self.index += 1;
                }
                Some(b';') => {
                    while let Some(b) = self.peek() {
                        self.index += 1;
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// A lone `.` surrounded by whitespace/parens/EOF is the dotted-pair
    /// separator; `.5` or `.foo` are ordinary atoms.
    fn at_dot_separator(&self) -> bool {
        self.peek() == Some(b'.')
            && match self.peek_at(1) {
                None => true,
                Some(b) => Self::is_delimiter(b),
            }
    }

    /// Parses exactly one form. On `)` returns `Value::Null` without
    /// consuming it; the caller (list parser or top-level guard) handles
    /// the close paren itself.
    fn parse_form(&mut self) -> Result<Value, EvalError> {
        self.skip_ws_and_comments();
        match self.peek() {
            None => Ok(Value::Null),
            Some(b')') => Ok(Value::Null),
            Some(b',') => {
                self.advance();
                let inner = self.parse_form()?;
                Ok(Value::list(vec![Value::symbol("quote"), inner]))
            }
            Some(b'\'') => {
                self.advance();
                self.parse_string_literal()
            }
            Some(b'(') => {
                self.advance();
                self.parse_list()
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_string_literal(&mut self) -> Result<Value, EvalError> {
        let mut bytes = Vec::new();
        loop {
            match self.advance() {
                None => return Err(EvalError::parse("unterminated string literal")),
                Some(b'\'') => break,
                Some(b'\\') => match self.advance() {
                    Some(escaped) => bytes.push(escaped),
                    None => return Err(EvalError::parse("unterminated escape in string literal")),
                },
                Some(b) => bytes.push(b),
            }
        }
        Ok(Value::string(bytes))
    }

    fn parse_list(&mut self) -> Result<Value, EvalError> {
        self.skip_ws_and_comments();

        let mut head = Value::Null;
        let mut tail: Option<ConsCell> = None;

        loop {
            self.skip_ws_and_comments();
            match self.peek() {
                None => return Err(EvalError::parse("unterminated list")),
                Some(b')') => {
                    self.advance();
                    break;
                }
                Some(b'.') if self.at_dot_separator() => {
                    self.advance();
                    let tail_value = self.parse_form()?;
                    self.skip_ws_and_comments();
                    if self.peek() == Some(b')') {
                        self.advance();
                    }
                    if let Some(cell) = &tail {
                        cell.borrow_mut().1 = tail_value;
                    } else {
                        head = tail_value;
                    }
                    break;
                }
                _ => {
                    let item = self.parse_form()?;
                    let cell: ConsCell = Rc::new(RefCell::new((item, Value::Null)));
                    if let Some(prev) = &tail {
                        prev.borrow_mut().1 = Value::Cons(cell.clone());
                    } else {
                        head = Value::Cons(cell.clone());
                    }
                    tail = Some(cell);
                }
            }
        }

        Ok(head)
    }

    fn read_span(&mut self) -> &'a [u8] {
        let start = self.index;
        while let Some(b) = self.peek() {
            if Self::is_delimiter(b) {
                break;
            }
            self.index += 1;
        }
        &self.bytes[start..self.index]
    }

    fn parse_atom(&mut self) -> Result<Value, EvalError> {
        let span = self.read_span();
        if span.is_empty() {
            // A stray unrecognized byte (e.g. a lone `.`): skip it to
            // avoid looping forever on malformed input.
            self.advance();
            return Ok(Value::Null);
        }
        let text = String::from_utf8_lossy(span);
        match text.parse::<f64>() {
            Ok(n) if is_numeric_span(&text) => Ok(Value::Number(n)),
            _ => Ok(Value::symbol(text.into_owned())),
        }
    }
}

/// Rust's `f64::from_str` accepts things like "inf" and "NaN" which are
/// not Klisp numeric atoms; restrict to digits/sign/decimal point.
fn is_numeric_span(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    if let Some(&c) = chars.peek() {
        if c == '-' || c == '+' {
            chars.next();
        }
    }
    let rest: String = chars.collect();
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Parses a full source string into a single `(do form1 form2 ... formN)`
/// wrapper value, so sequential top-level evaluation is free.
pub fn read(source: &str) -> Result<Value, EvalError> {
    let trimmed = source.trim();
    let mut reader = Reader::new(trimmed.as_bytes());
    reader.skip_ws_and_comments();

    let head: ConsCell = Rc::new(RefCell::new((Value::symbol("do"), Value::Null)));
    let mut tail: ConsCell = head.clone();

    loop {
        reader.skip_ws_and_comments();
        match reader.peek() {
            None => break,
            // A stray trailing `)` terminates reading, guarding against
            // infinite loops on unbalanced input.
            Some(b')') => {
                reader.advance();
                break;
            }
            _ => {
                let form = reader.parse_form()?;
                let cell: ConsCell = Rc::new(RefCell::new((form, Value::Null)));
                tail.borrow_mut().1 = Value::Cons(cell.clone());
                tail = cell;
            }
        }
    }

    Ok(Value::Cons(head))
}
