//! String and conversion primitives: `gets sets! point char string->number
//! number->string string->symbol symbol->string`

use super::{define_builtin, expect_bytes, expect_number, first, second, third};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `(gets 'hello world' 6 11) => 'world'`, clamped to the buffer bounds.
fn builtin_gets(args: Value) -> Result<Value, EvalError> {
    let bytes = expect_bytes(&first(&args), "gets")?;
    let len = bytes.len();
    let start = (expect_number(&second(&args), "gets")? as usize).min(len);
    let end = (expect_number(&third(&args), "gets")? as usize).clamp(start, len);
    Ok(Value::string(bytes[start..end].to_vec()))
}

/// `(sets! s 0 'X')` splices the byte value of `'X'` into `s` at index 0
/// in place and returns `s`.
fn builtin_sets(args: Value) -> Result<Value, EvalError> {
    let target = first(&args);
    let index = expect_number(&second(&args), "sets!")? as usize;
    let replacement = expect_bytes(&third(&args), "sets!")?;
    match &target {
        Value::Str(cell) => {
            let mut bytes = cell.borrow_mut();
            if index < bytes.len() {
                let end = (index + replacement.len()).min(bytes.len());
                let take = end - index;
                bytes[index..end].copy_from_slice(&replacement[..take]);
            }
        }
        other => return Err(EvalError::type_error("sets!", "string", other)),
    }
    Ok(target)
}

/// `(point 'abc') => 97` (first byte as a Number).
fn builtin_point(args: Value) -> Result<Value, EvalError> {
    let bytes = expect_bytes(&first(&args), "point")?;
    Ok(Value::Number(bytes.first().copied().unwrap_or(0) as f64))
}

/// `(char 97) => 'a'` (a single-byte String).
fn builtin_char(args: Value) -> Result<Value, EvalError> {
    let n = expect_number(&first(&args), "char")?;
    Ok(Value::string(vec![n as u8]))
}

/// `(string->number 'abc') => 0` on parse failure.
fn builtin_string_to_number(args: Value) -> Result<Value, EvalError> {
    let bytes = expect_bytes(&first(&args), "string->number")?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(Value::Number(text.trim().parse::<f64>().unwrap_or(0.0)))
}

/// `(number->string 6) => '6'`
fn builtin_number_to_string(args: Value) -> Result<Value, EvalError> {
    let n = expect_number(&first(&args), "number->string")?;
    Ok(Value::string(
        crate::printer::print(&Value::Number(n)).into_bytes(),
    ))
}

/// `(string->symbol 'foo') => foo`; strict on input type.
fn builtin_string_to_symbol(args: Value) -> Result<Value, EvalError> {
    let bytes = expect_bytes(&first(&args), "string->symbol")?;
    Ok(Value::symbol(String::from_utf8_lossy(&bytes).into_owned()))
}

/// `(symbol->string foo) => 'foo'`; strict on input type.
fn builtin_symbol_to_string(args: Value) -> Result<Value, EvalError> {
    match first(&args) {
        Value::Symbol(s) => Ok(Value::string(s.as_bytes().to_vec())),
        other => Err(EvalError::type_error("symbol->string", "symbol", &other)),
    }
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "gets", builtin_gets);
    define_builtin(env, "sets!", builtin_sets);
    define_builtin(env, "point", builtin_point);
    define_builtin(env, "char", builtin_char);
    define_builtin(env, "string->number", builtin_string_to_number);
    define_builtin(env, "number->string", builtin_number_to_string);
    define_builtin(env, "string->symbol", builtin_string_to_symbol);
    define_builtin(env, "symbol->string", builtin_symbol_to_string);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gets_substring_clamped() {
        let args = Value::list(vec![
            Value::string(b"hello world".to_vec()),
            Value::Number(6.0),
            Value::Number(11.0),
        ]);
        match builtin_gets(args).unwrap() {
            Value::Str(b) => assert_eq!(&*b.borrow(), b"world"),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_sets_mutates_in_place_and_aliases() {
        let s = Value::string(b"abc".to_vec());
        let alias = s.clone();
        let args = Value::list(vec![s.clone(), Value::Number(0.0), Value::string(b"X".to_vec())]);
        builtin_sets(args).unwrap();
        match alias {
            Value::Str(b) => assert_eq!(&*b.borrow(), b"Xbc"),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_point_and_char_roundtrip() {
        let args = Value::list(vec![Value::string(b"abc".to_vec())]);
        let point = builtin_point(args).unwrap();
        assert!(matches!(point, Value::Number(n) if n == 97.0));
        let args = Value::list(vec![point]);
        match builtin_char(args).unwrap() {
            Value::Str(b) => assert_eq!(&*b.borrow(), b"a"),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_string_to_number_failure_is_zero() {
        let args = Value::list(vec![Value::string(b"not a number".to_vec())]);
        assert!(matches!(builtin_string_to_number(args).unwrap(), Value::Number(n) if n == 0.0));
    }

    #[test]
    fn test_number_to_string_integer_form() {
        let args = Value::list(vec![Value::Number(6.0)]);
        match builtin_number_to_string(args).unwrap() {
            Value::Str(b) => assert_eq!(&*b.borrow(), b"6"),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_symbol_string_conversions() {
        let args = Value::list(vec![Value::symbol("foo")]);
        match builtin_symbol_to_string(args).unwrap() {
            Value::Str(b) => assert_eq!(&*b.borrow(), b"foo"),
            _ => panic!("expected string"),
        }
        let args = Value::list(vec![Value::string(b"bar".to_vec())]);
        assert!(matches!(builtin_string_to_symbol(args).unwrap(), Value::Symbol(s) if &*s == "bar"));
    }

    #[test]
    fn test_symbol_to_string_type_error_on_non_symbol() {
        let args = Value::list(vec![Value::Number(1.0)]);
        assert!(builtin_symbol_to_string(args).is_err());
    }
}
