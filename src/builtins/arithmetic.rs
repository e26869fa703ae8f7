//! Arithmetic operations: `+ - * / # %`
//!
//! All numeric folds over a left-to-right argument spine. `+` also
//! concatenates byte strings when its first argument is a String.

use super::{define_builtin, expect_bytes, expect_number, first};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn fold_numeric(
    name: &'static str,
    args: Value,
    op: impl Fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let mut acc = expect_number(&first(&args), name)?;
    for rest in args.cdr().iter() {
        acc = op(acc, expect_number(&rest, name)?);
    }
    Ok(Value::Number(acc))
}

/// `(+ 1 2 3) => 6`; `(+ 'ab' 'cd') => 'abcd'`
pub fn builtin_add(args: Value) -> Result<Value, EvalError> {
    match first(&args) {
        Value::Str(_) => {
            let mut bytes = expect_bytes(&first(&args), "+")?;
            for rest in args.cdr().iter() {
                bytes.extend(expect_bytes(&rest, "+")?);
            }
            Ok(Value::string(bytes))
        }
        _ => fold_numeric("+", args, |a, b| a + b),
    }
}

/// `(- 10 3 2) => 5`
pub fn builtin_sub(args: Value) -> Result<Value, EvalError> {
    fold_numeric("-", args, |a, b| a - b)
}

/// `(* 2 3 4) => 24`
pub fn builtin_mul(args: Value) -> Result<Value, EvalError> {
    fold_numeric("*", args, |a, b| a * b)
}

/// `(/ 20 4) => 5`
pub fn builtin_div(args: Value) -> Result<Value, EvalError> {
    fold_numeric("/", args, |a, b| a / b)
}

/// `(# 2 10) => 1024` (left-folded power).
pub fn builtin_pow(args: Value) -> Result<Value, EvalError> {
    fold_numeric("#", args, |a, b| a.powf(b))
}

/// `(% 17 5) => 2` (left-folded integer modulo, truncating to i64).
pub fn builtin_mod(args: Value) -> Result<Value, EvalError> {
    let mut acc = expect_number(&first(&args), "%")? as i64;
    for rest in args.cdr().iter() {
        let divisor = expect_number(&rest, "%")? as i64;
        if divisor == 0 {
            return Err(EvalError::primitive("%", "division by zero"));
        }
        acc %= divisor;
    }
    Ok(Value::Number(acc as f64))
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "+", builtin_add);
    define_builtin(env, "-", builtin_sub);
    define_builtin(env, "*", builtin_mul);
    define_builtin(env, "/", builtin_div);
    define_builtin(env, "#", builtin_pow);
    define_builtin(env, "%", builtin_mod);
}
