//! Console I/O: `print`
//!
//! Writes every argument space-separated to stdout. Strings and
//! Symbols are written as their raw bytes; everything else through the
//! canonical printer.

use super::define_builtin;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::io::Write;
use std::rc::Rc;

/// `(print 'hello' ' ' 'world')` writes `hello world` with no trailing
/// newline, and returns Null.
fn builtin_print(args: Value) -> Result<Value, EvalError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, " ");
        }
        match &arg {
            Value::Str(bytes) => {
                let _ = handle.write_all(&bytes.borrow());
            }
            Value::Symbol(s) => {
                let _ = write!(handle, "{s}");
            }
            other => {
                let _ = write!(handle, "{}", crate::printer::print(other));
            }
        }
    }
    Ok(Value::Null)
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "print", builtin_print);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_returns_null() {
        let args = Value::list(vec![Value::string(b"hi".to_vec())]);
        assert!(builtin_print(args).unwrap().is_null());
    }
}
