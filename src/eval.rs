// ABOUTME: Evaluator module for special forms, application, and thunk-based TCO

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Closure, Value};
use std::rc::Rc;

/// Evaluates `form` in `env`. When `tail` is true the evaluator may
/// return a `Value::Thunk` instead of forcing a call; callers in a
/// non-tail position must `force` the result before using it. Top-level
/// callers request tail position and force the final result themselves.
pub fn eval(form: Value, env: Rc<Environment>, tail: bool) -> Result<Value, EvalError> {
    match form {
        Value::Symbol(name) => Ok(env.get(&name)),
        Value::Number(_) | Value::Str(_) | Value::Boolean(_) | Value::Null => Ok(form),
        Value::Cons(_) => eval_cons(form, env, tail),
        // Functions/macros/builtins/thunks are not produced by the
        // reader and only ever appear as already-evaluated values.
        other => Ok(other),
    }
}

fn eval_cons(form: Value, env: Rc<Environment>, tail: bool) -> Result<Value, EvalError> {
    let operator = form.car();
    if let Value::Symbol(name) = &operator {
        match name.as_ref() {
            "quote" => return Ok(form.cdr().car()),
            "def" => return eval_def(form, env),
            "do" => return eval_do(form, env, tail),
            "if" => return eval_if(form, env, tail),
            "fn" => return eval_fn(form, env),
            "macro" => return eval_macro(form, env),
            _ => {}
        }
    }

    let func = force(eval(operator, env.clone(), false)?)?;
    let raw_args = form.cdr();

    match &func {
        Value::Macro(closure) => eval_macro_application(closure.clone(), raw_args, env, tail),
        Value::Function(_) | Value::Builtin(_) => {
            let evaluated = eval_args(raw_args, env)?;
            apply(func, evaluated, tail)
        }
        _ => Err(EvalError::not_callable(&func)),
    }
}

fn eval_args(raw_args: Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    // Arguments are evaluated strictly left-to-right before the call.
    let mut items = Vec::new();
    for arg in raw_args.iter() {
        items.push(force(eval(arg, env.clone(), false)?)?);
    }
    Ok(Value::list(items))
}

fn eval_def(form: Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let name = form.cdr().car();
    let value_form = form.cdr().cdr().car();
    let value = force(eval(value_form, env.clone(), false)?)?;
    if let Value::Symbol(name) = name {
        env.define(name.to_string(), value.clone());
    }
    Ok(value)
}

fn eval_do(form: Value, env: Rc<Environment>, tail: bool) -> Result<Value, EvalError> {
    let body = form.cdr();
    if body.is_null() {
        return Ok(Value::Null);
    }
    let mut items = body.iter().peekable();
    loop {
        let item = items.next().unwrap();
        if items.peek().is_some() {
            force(eval(item, env.clone(), false)?)?;
        } else {
            return eval(item, env, tail);
        }
    }
}

fn eval_if(form: Value, env: Rc<Environment>, tail: bool) -> Result<Value, EvalError> {
    let cond_form = form.cdr().car();
    let then_form = form.cdr().cdr().car();
    let else_form = form.cdr().cdr().cdr().car();

    let cond = force(eval(cond_form, env.clone(), false)?)?;
    // Non-boolean condition values are treated as false.
    if cond.as_bool() {
        eval(then_form, env, tail)
    } else {
        eval(else_form, env, tail)
    }
}

fn eval_fn(form: Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let params = form.cdr().car();
    let body = form.cdr().cdr().car();
    Ok(Value::Function(Rc::new(Closure { params, body, env })))
}

fn eval_macro(form: Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let params = form.cdr().car();
    let body = form.cdr().cdr().car();
    Ok(Value::Macro(Rc::new(Closure { params, body, env })))
}

/// Binds `params` to `args` positionally, consuming both in lockstep.
/// Extra args beyond the params are dropped; params left over after args
/// run out stay unbound (permissive lookup later reads them as `Null`).
fn bind_params(frame: &Rc<Environment>, params: &Value, args: &Value) {
    let mut p = params.clone();
    let mut a = args.clone();
    loop {
        match (&p, &a) {
            (Value::Cons(_), Value::Cons(_)) => {
                if let Value::Symbol(name) = p.car() {
                    frame.define(name.to_string(), a.car());
                }
                p = p.cdr();
                a = a.cdr();
            }
            _ => break,
        }
    }
}

/// Applies a Function or Builtin to an already-evaluated argument list.
/// In tail position this returns an unforced `Thunk`; otherwise the
/// call is forced immediately before returning.
fn apply(func: Value, args: Value, tail: bool) -> Result<Value, EvalError> {
    let thunk = Value::Thunk(Box::new(func), Box::new(args));
    if tail {
        Ok(thunk)
    } else {
        force(thunk)
    }
}

/// A macro receives its arguments unevaluated, bound positionally just
/// like a function call. Its return value is then re-evaluated in the
/// *caller's* environment, with the caller's tail-ness, implementing
/// hygiene-free syntactic substitution.
fn eval_macro_application(
    closure: Rc<Closure>,
    raw_args: Value,
    caller_env: Rc<Environment>,
    tail: bool,
) -> Result<Value, EvalError> {
    let frame = Environment::with_parent(closure.env.clone());
    bind_params(&frame, &closure.params, &raw_args);
    let expansion = force(eval(closure.body.clone(), frame, true)?)?;
    eval(expansion, caller_env, tail)
}

/// Runs a single application step: for a builtin, just the primitive
/// call; for a user function, a fresh child frame and the body
/// evaluated in tail position (which may itself yield another thunk).
fn step(func: Value, args: Value) -> Result<Value, EvalError> {
    match func {
        Value::Builtin(builtin) => (builtin.func)(args),
        Value::Function(closure) => {
            let frame = Environment::with_parent(closure.env.clone());
            bind_params(&frame, &closure.params, &args);
            eval(closure.body.clone(), frame, true)
        }
        other => Err(EvalError::not_callable(&other)),
    }
}

/// Drives the thunk protocol to completion: `while v is Thunk { v =
/// v.fn(v.args) }`. This is what removes stack growth from tail-recursive
/// user code (no trampolined driver is needed elsewhere in the evaluator).
pub fn force(mut value: Value) -> Result<Value, EvalError> {
    while let Value::Thunk(func, args) = value {
        value = step(*func, *args)?;
    }
    Ok(value)
}
