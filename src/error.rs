// ABOUTME: Error types for reader and evaluator failures

use crate::value::Value;
use thiserror::Error;

/// Klisp has no user-level exception mechanism: every error aborts the
/// current evaluation and unwinds to the host driver as a single fatal
/// event. Undefined-symbol lookups are deliberately *not* represented
/// here; they resolve permissively to `Value::Null` (see `Environment::get`).
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// Malformed source text: unterminated string, unbalanced parens.
    #[error("parse error: {0}")]
    Parse(String),

    /// Application of a non-callable value.
    #[error("attempted to call a non-callable value: {0}")]
    NotCallable(String),

    /// A primitive rejected its arguments (wrong type, wrong arity, etc).
    #[error("{function}: {message}")]
    Primitive { function: String, message: String },
}

impl EvalError {
    pub fn parse(message: impl Into<String>) -> Self {
        EvalError::Parse(message.into())
    }

    pub fn not_callable(value: &Value) -> Self {
        EvalError::NotCallable(crate::printer::print(value))
    }

    pub fn primitive(function: &str, message: impl Into<String>) -> Self {
        EvalError::Primitive {
            function: function.to_string(),
            message: message.into(),
        }
    }

    /// Builds a primitive type error whose message embeds the
    /// offending value's printed form, per the error taxonomy.
    pub fn type_error(function: &str, expected: &str, actual: &Value) -> Self {
        EvalError::primitive(
            function,
            format!(
                "expected {}, got {} ({})",
                expected,
                actual.type_name(),
                crate::printer::print(actual)
            ),
        )
    }
}
