use super::*;
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(num(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::list(vec![]).is_truthy());
    assert!(Value::symbol("x").is_truthy());
}

#[test]
fn factory_methods() {
    assert_eq!(Value::symbol("abc").as_symbol(), Some("abc"));
    assert_eq!(Value::string("abc").as_str(), Some("abc"));
    assert_eq!(Value::symbol("abc").as_str(), None);
    assert_eq!(num(2.5).as_number(), Some(2.5));
    let list = Value::list(vec![num(1.0), num(2.0)]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));
    assert!(list.is_list());
    assert!(Value::Nil.is_nil());
}

#[test]
fn type_names() {
    assert_eq!(num(1.0).type_name(), "number");
    assert_eq!(Value::symbol("a").type_name(), "symbol");
    assert_eq!(Value::Bool(true).type_name(), "boolean");
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::string("a").type_name(), "string");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(Value::native("id", |_| Ok(Value::Nil)).type_name(), "function");
    let closure = Value::closure(vec![], Value::Nil, Environment::new());
    assert_eq!(closure.type_name(), "function");
}

#[test]
fn equality_by_value() {
    assert_eq!(num(1.0), num(1.0));
    assert_ne!(num(1.0), num(2.0));
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_eq!(Value::symbol("a"), Value::symbol("a"));
    assert_eq!(Value::Nil, Value::Nil);
    assert_eq!(Value::Bool(false), Value::Bool(false));
}

#[test]
fn equality_across_tags_is_false() {
    assert_ne!(Value::string("a"), Value::symbol("a"));
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::list(vec![num(1.0)]), num(1.0));
    assert_ne!(Value::list(vec![]), Value::Nil);
}

#[test]
fn nested_list_equality() {
    let make = || Value::list(vec![num(1.0), Value::list(vec![num(2.0), num(3.0)])]);
    assert_eq!(make(), make());
    let shorter = Value::list(vec![num(1.0), Value::list(vec![num(2.0)])]);
    assert_ne!(make(), shorter);
}

#[test]
fn nan_is_not_equal_to_itself() {
    assert_ne!(num(f64::NAN), num(f64::NAN));
}

#[test]
fn functions_compare_by_identity() {
    let f = Value::native("f", |_| Ok(Value::Nil));
    let g = Value::native("f", |_| Ok(Value::Nil));
    assert_eq!(f, f.clone());
    assert_ne!(f, g);

    let env = Environment::new();
    let c1 = Value::closure(vec![], Value::Nil, env.clone());
    let c2 = Value::closure(vec![], Value::Nil, env);
    assert_eq!(c1, c1.clone());
    assert_ne!(c1, c2);
}

#[test]
fn native_call_passes_arguments() {
    let count = Value::native("count-args", |args| Ok(Value::Number(args.len() as f64)));
    let Value::NativeFunction(native) = count else {
        panic!("expected a native function");
    };
    assert_eq!(native.name(), "count-args");
    assert_eq!(native.call(&[Value::Nil, Value::Nil]), Ok(num(2.0)));
}

#[test]
fn closure_accessors() {
    let env = Environment::new();
    let Value::Symbol(a) = Value::symbol("a") else {
        panic!("expected a symbol");
    };
    let closure = Value::closure(vec![a], Value::symbol("a"), env.clone());
    let Value::Closure(closure) = closure else {
        panic!("expected a closure");
    };
    assert_eq!(closure.params().len(), 1);
    assert_eq!(&*closure.params()[0], "a");
    assert_eq!(closure.body(), &Value::symbol("a"));
    assert!(closure.env().ptr_eq(&env));
}

#[test]
fn clone_shares_heap_payload() {
    let Value::List(a) = Value::list(vec![num(1.0)]) else {
        panic!("expected a list");
    };
    let b = a.clone();
    assert!(Heap::ptr_eq(&a, &b));
}

#[test]
fn debug_output() {
    assert_eq!(format!("{:?}", num(1.0)), "Number(1.0)");
    assert_eq!(format!("{:?}", Value::symbol("x")), "Symbol(\"x\")");
    assert_eq!(
        format!("{:?}", Value::list(vec![Value::Nil, Value::Bool(true)])),
        "List([Nil, Bool(true)])"
    );
    assert_eq!(
        format!("{:?}", Value::native("+", |_| Ok(Value::Nil))),
        "NativeFunction(\"+\")"
    );
}

#[test]
fn conversions() {
    assert_eq!(Value::from(2.0), num(2.0));
    assert_eq!(Value::from(true), Value::Bool(true));
}

// === Deeply nested lists ===

fn nested(depth: usize) -> Value {
    let mut value = Value::list(vec![]);
    for _ in 1..depth {
        value = Value::list(vec![value]);
    }
    value
}

#[test]
fn deep_list_drops_without_overflow() {
    drop(nested(200_000));
}

#[test]
fn deep_list_with_shared_tail_drops_once() {
    let tail = nested(100_000);
    let head = Value::list(vec![tail.clone(), num(1.0)]);
    drop(head);
    // The shared sublist is still intact.
    assert_eq!(tail.as_list().map(<[Value]>::len), Some(1));
}

#[test]
fn deep_lists_compare_structurally() {
    let a = nested(100_000);
    let b = nested(100_000);
    assert!(a == b);
    assert!(a != nested(99_999));
}

#[test]
fn deep_list_debug_does_not_overflow() {
    let text = format!("{:?}", nested(50_000));
    assert!(text.starts_with("List([List(["));
}
