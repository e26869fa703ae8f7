// ABOUTME: End-to-end tests over the public Interpreter surface

use klisp::value::Value;
use klisp::Interpreter;

fn run(source: &str) -> Value {
    Interpreter::new().run(source).expect("eval should succeed")
}

#[test]
fn test_roundtrip_through_read_and_print() {
    let form = klisp::interpreter::read("(1 2 (3 . 4) 'hi')").unwrap();
    let printed = klisp::interpreter::print(&form);
    let reread = klisp::interpreter::read(&printed).unwrap();
    assert!(reread.equals(&form));
}

#[test]
fn test_quote_fixpoint_over_nested_form() {
    let v = run("(quote (1 (2 3) four))");
    assert_eq!(klisp::interpreter::print(&v), "(1 (2 3) four)");
}

#[test]
fn test_associativity_of_plus() {
    let a = run("(+ (+ 1 2) 3)");
    let b = run("(+ 1 (+ 2 3))");
    assert!(a.equals(&b));
}

#[test]
fn test_if_short_circuits_observable_via_def() {
    let v = run("(do (def hit false) (if true 1 (def hit true)) hit)");
    assert!(matches!(v, Value::Boolean(false)));
}

#[test]
fn test_tail_call_optimization_survives_a_million_iterations() {
    let v = run("(def count (fn (n) (if (= n 0) 0 (count (- n 1))))) (count 1000000)");
    assert!(matches!(v, Value::Number(n) if n == 0.0));
}

#[test]
fn test_closure_capture_outlives_defining_form() {
    let v = run("(def make-adder (fn (x) (fn (y) (+ x y)))) (def add5 (make-adder 5)) (add5 3)");
    assert!(matches!(v, Value::Number(n) if n == 8.0));
}

#[test]
fn test_macro_hygiene_free_substitution() {
    let v = run("(def m (macro (a) a)) (m (+ 1 2))");
    assert!(matches!(v, Value::Number(n) if n == 3.0));
}

#[test]
fn test_equals_laws_reflexive_and_false_across_tags() {
    let reflexive = run("(= (quote (1 2)) (quote (1 2)))");
    assert!(matches!(reflexive, Value::Boolean(true)));
    let cross_tag = run("(= 1 'x')");
    assert!(matches!(cross_tag, Value::Boolean(false)));
}

#[test]
fn test_scenario_list_construction_and_print() {
    let v = run("(cons 1 (cons 2 (cons 3 ())))");
    assert_eq!(klisp::interpreter::print(&v), "(1 2 3)");
}

#[test]
fn test_scenario_gets_substring() {
    let v = run("(gets 'hello world' 6 11)");
    assert_eq!(klisp::interpreter::print(&v), "'world'");
}

#[test]
fn test_scenario_string_mutation_aliasing() {
    let v = run("(def s 'abc') (sets! s 0 'X') s");
    assert_eq!(klisp::interpreter::print(&v), "'Xbc'");
}

#[test]
fn test_undefined_symbol_lookup_is_permissive_null() {
    let v = run("undefined-name");
    assert!(v.is_null());
}

#[test]
fn test_calling_a_non_callable_value_is_a_fatal_error() {
    let result = Interpreter::new().run("(1 2 3)");
    assert!(result.is_err());
}

#[test]
fn test_bindings_persist_across_separate_eval_calls() {
    let interp = Interpreter::new();
    interp.run("(def counter 41)").unwrap();
    let v = interp.run("(+ counter 1)").unwrap();
    assert!(matches!(v, Value::Number(n) if n == 42.0));
}
