// ABOUTME: Printer module implementing the formal inverse of the reader

use crate::value::Value;

/// Converts a Value to its canonical textual form.
///
/// `Read ∘ Print` is the identity on every Value the reader can produce
/// (Null, Boolean, representable Number, printable byte string, Symbol,
/// proper/improper list of such).
pub fn print(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("()"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(n) => write_number(*n, out),
        Value::Str(bytes) => write_string(&bytes.borrow(), out),
        Value::Symbol(s) => out.push_str(s),
        Value::Cons(_) => write_cons(value, out),
        Value::Function(_) | Value::Macro(_) | Value::Builtin(_) | Value::Thunk(_, _) => {
            out.push_str("(function)")
        }
    }
}

fn write_number(n: f64, out: &mut String) {
    // Integer-exact doubles print without a decimal point; this is
    // required for round-trip with the reader's float parse.
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e18 {
        out.push_str(&format!("{}", n as i64));
    } else {
        out.push_str(&format!("{:.8}", n));
    }
}

fn write_string(bytes: &[u8], out: &mut String) {
    out.push('\'');
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            _ => out.push(b as char),
        }
    }
    out.push('\'');
}

fn write_cons(value: &Value, out: &mut String) {
    out.push('(');
    let mut term = value.clone();
    let mut first = true;
    loop {
        match &term {
            Value::Cons(cell) => {
                let (car, cdr) = {
                    let b = cell.borrow();
                    (b.0.clone(), b.1.clone())
                };
                if !first {
                    out.push(' ');
                }
                first = false;
                write_value(&car, out);
                match &cdr {
                    Value::Cons(_) | Value::Null => term = cdr,
                    _ => {
                        out.push_str(" . ");
                        write_value(&cdr, out);
                        break;
                    }
                }
                if term.is_null() {
                    break;
                }
            }
            _ => break,
        }
    }
    out.push(')');
}
