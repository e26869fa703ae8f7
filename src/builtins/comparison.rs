//! Comparison operations: `= < >`
//!
//! `=` is structural equality over the whole argument chain. `<`/`>`
//! compare Numbers numerically and Strings lexicographically by byte.

use super::{define_builtin, first};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `(= 1 1 1) => true`; compares every argument against the first.
fn builtin_eq(args: Value) -> Result<Value, EvalError> {
    let head = first(&args);
    let mut ok = true;
    for rest in args.cdr().iter() {
        ok &= head.equals(&rest);
    }
    Ok(Value::Boolean(ok))
}

enum Order {
    Less,
    Greater,
}

fn compare(name: &'static str, args: Value, order: Order) -> Result<Value, EvalError> {
    let items = args.to_vec();
    for pair in items.windows(2) {
        let holds = match (&pair[0], &pair[1]) {
            (Value::Number(a), Value::Number(b)) => match order {
                Order::Less => a < b,
                Order::Greater => a > b,
            },
            (Value::Str(a), Value::Str(b)) => {
                let a = a.borrow();
                let b = b.borrow();
                match order {
                    Order::Less => *a < *b,
                    Order::Greater => *a > *b,
                }
            }
            (other, _) => return Err(EvalError::type_error(name, "number or string", other)),
        };
        if !holds {
            return Ok(Value::Boolean(false));
        }
    }
    Ok(Value::Boolean(true))
}

/// `(< 1 2 3) => true`
fn builtin_lt(args: Value) -> Result<Value, EvalError> {
    compare("<", args, Order::Less)
}

/// `(> 3 2 1) => true`
fn builtin_gt(args: Value) -> Result<Value, EvalError> {
    compare(">", args, Order::Greater)
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "=", builtin_eq);
    define_builtin(env, "<", builtin_lt);
    define_builtin(env, ">", builtin_gt);
}
