use pretty_assertions::assert_eq;

use super::*;

#[test]
fn define_and_lookup() {
    let mut env = Environment::default();
    env.define("x", Value::Number(1.0));
    assert_eq!(env.lookup("x"), Some(&Value::Number(1.0)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn rebinding_replaces_value() {
    let mut env = Environment::default();
    env.define("x", Value::Number(1.0));
    env.define("x", Value::text("one"));
    assert_eq!(env.lookup("x"), Some(&Value::text("one")));
}

#[test]
fn assign_requires_existing_binding() {
    let mut env = Environment::default();
    assert_eq!(env.assign("x", Value::Null), Err(AssignError::Undefined));
    env.define("x", Value::Null);
    assert_eq!(env.assign("x", Value::Boolean(true)), Ok(()));
    assert_eq!(env.lookup("x"), Some(&Value::Boolean(true)));
}

#[test]
fn flat_mode_ignores_scopes() {
    let mut env = Environment::new(ScopeMode::Flat);
    env.push_scope();
    assert_eq!(env.depth(), 1);
    env.define("inner", Value::Number(2.0));
    env.pop_scope();
    assert!(env.contains("inner"));
}

#[test]
fn lexical_mode_drops_inner_bindings() {
    let mut env = Environment::new(ScopeMode::Lexical);
    env.define("outer", Value::Number(1.0));
    env.push_scope();
    assert_eq!(env.depth(), 2);
    env.define("inner", Value::Number(2.0));
    assert!(env.contains("outer"));
    env.pop_scope();
    assert!(!env.contains("inner"));
    assert_eq!(env.depth(), 1);
}

#[test]
fn lexical_shadowing_and_outward_assignment() {
    let mut env = Environment::new(ScopeMode::Lexical);
    env.define("x", Value::Number(1.0));
    env.define("y", Value::Number(1.0));
    env.push_scope();
    env.define("x", Value::Number(10.0));
    assert_eq!(env.assign("x", Value::Number(11.0)), Ok(()));
    assert_eq!(env.assign("y", Value::Number(2.0)), Ok(()));
    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(&Value::Number(1.0)));
    assert_eq!(env.lookup("y"), Some(&Value::Number(2.0)));
}

#[test]
fn global_scope_is_never_popped() {
    let mut env = Environment::new(ScopeMode::Lexical);
    env.define("x", Value::Null);
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert!(env.contains("x"));
}
