//! Math and environment primitives: `sin cos floor rand time`

use super::{define_builtin, expect_number, first};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

fn builtin_sin(args: Value) -> Result<Value, EvalError> {
    Ok(Value::Number(expect_number(&first(&args), "sin")?.sin()))
}

fn builtin_cos(args: Value) -> Result<Value, EvalError> {
    Ok(Value::Number(expect_number(&first(&args), "cos")?.cos()))
}

fn builtin_floor(args: Value) -> Result<Value, EvalError> {
    Ok(Value::Number(expect_number(&first(&args), "floor")?.floor()))
}

/// Uniform float in `[0, 1)`. Seeded from the system clock rather than a
/// stored PRNG state, since Klisp has no notion of a mutable generator.
fn builtin_rand(_args: Value) -> Result<Value, EvalError> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    Ok(Value::Number(nanos as f64 / 1_000_000_000.0))
}

/// Seconds since the Unix epoch.
fn builtin_time(_args: Value) -> Result<Value, EvalError> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();
    Ok(Value::Number(secs))
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "sin", builtin_sin);
    define_builtin(env, "cos", builtin_cos);
    define_builtin(env, "floor", builtin_floor);
    define_builtin(env, "rand", builtin_rand);
    define_builtin(env, "time", builtin_time);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor() {
        let args = Value::list(vec![Value::Number(3.7)]);
        assert!(matches!(builtin_floor(args).unwrap(), Value::Number(n) if n == 3.0));
    }

    #[test]
    fn test_sin_zero() {
        let args = Value::list(vec![Value::Number(0.0)]);
        assert!(matches!(builtin_sin(args).unwrap(), Value::Number(n) if n == 0.0));
    }

    #[test]
    fn test_rand_in_unit_range() {
        let v = builtin_rand(Value::Null).unwrap();
        assert!(matches!(v, Value::Number(n) if (0.0..1.0).contains(&n)));
    }

    #[test]
    fn test_time_is_positive() {
        let v = builtin_time(Value::Null).unwrap();
        assert!(matches!(v, Value::Number(n) if n > 0.0));
    }
}
