// ABOUTME: Version and REPL banner constants

pub const VERSION: &str = "1.0.0";
pub const WELCOME_MESSAGE: &str = "Klisp v1.0";
pub const WELCOME_SUBTITLE: &str = "A small S-expression Lisp with tail calls and first-class macros";
