//! Type introspection: `type`

use super::{define_builtin, first};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `(type 5) => 'number'`; one of `()`, `boolean`, `number`, `string`,
/// `symbol`, `list`, `function`.
fn builtin_type(args: Value) -> Result<Value, EvalError> {
    Ok(Value::string(first(&args).type_name().as_bytes().to_vec()))
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "type", builtin_type);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_of(v: Value) -> Vec<u8> {
        match builtin_type(Value::list(vec![v])).unwrap() {
            Value::Str(b) => b.borrow().clone(),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_of(Value::Null), b"()");
        assert_eq!(type_of(Value::Boolean(true)), b"boolean");
        assert_eq!(type_of(Value::Number(1.0)), b"number");
        assert_eq!(type_of(Value::string(b"x".to_vec())), b"string");
        assert_eq!(type_of(Value::symbol("x")), b"symbol");
        assert_eq!(
            type_of(Value::list(vec![Value::Number(1.0)])),
            b"list"
        );
    }
}
