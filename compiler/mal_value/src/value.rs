//! Runtime values.
//!
//! # Heap Enforcement
//!
//! Heap variants hold a [`Heap<T>`], whose constructor is private to this
//! module. Outside code builds values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let xs = Value::list(vec![Value::Number(1.0)]);  // OK
//! let s = Value::Str(Heap::new(...));              // ERROR: Heap::new is private
//! ```
//!
//! # Code Is Data
//!
//! The reader produces `Value`s and the evaluator consumes them. A `List`
//! in code position is an application or a special form with its operator
//! at index 0.

mod function;
mod heap;
mod list;

use std::fmt;

use mal_stack::ensure_sufficient_stack;

use crate::{EvalResult, Environment};

pub use function::{Closure, NativeFn, NativeFunction};
pub use heap::Heap;
pub use list::ListItems;

/// A mal value.
#[derive(Clone)]
pub enum Value {
    /// The only numeric type.
    Number(f64),
    /// A name. Meaning comes only from environment lookup.
    Symbol(Heap<str>),
    Bool(bool),
    /// The single absence-of-value.
    Nil,
    /// String contents, already unescaped.
    Str(Heap<str>),
    List(Heap<ListItems>),
    /// User function created by `fn*`.
    Closure(Heap<Closure>),
    /// Builtin implemented in Rust.
    NativeFunction(Heap<NativeFunction>),
}

impl Value {
    // Factory methods

    /// Create a symbol.
    #[inline]
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Heap::from_text(name))
    }

    /// Create a string value.
    #[inline]
    pub fn string(text: impl AsRef<str>) -> Self {
        Value::Str(Heap::from_text(text.as_ref()))
    }

    /// Create a list.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(ListItems::new(items)))
    }

    /// Create a closure over `env`.
    pub fn closure(params: Vec<Heap<str>>, body: Value, env: Environment) -> Self {
        Value::Closure(Heap::new(Closure::new(params, body, env)))
    }

    /// Create a native function.
    pub fn native(name: &'static str, func: impl Fn(&[Value]) -> EvalResult + 'static) -> Self {
        Value::NativeFunction(Heap::new(NativeFunction::new(name, Box::new(func))))
    }

    // Inspection

    /// Falsy is exactly `nil` and `false`. `0`, `""` and `()` are truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Closure(_) | Value::NativeFunction(_) => "function",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The name of a symbol.
    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The contents of a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(&items[..]),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

/// Structural equality, as exposed by the `=` builtin.
///
/// Different variants are never equal. Lists compare element-wise. Functions
/// compare by identity. Numbers use `f64` equality, so `NaN` is not equal
/// to itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) | (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len()
                    && ensure_sufficient_stack(|| a.iter().zip(b.iter()).all(|(x, y)| x == y))
            }
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n:?})"),
            Value::Symbol(name) => write!(f, "Symbol({:?})", &**name),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Nil => write!(f, "Nil"),
            Value::Str(text) => write!(f, "Str({:?})", &**text),
            Value::List(items) => {
                ensure_sufficient_stack(|| f.debug_tuple("List").field(&**items).finish())
            }
            Value::Closure(closure) => fmt::Debug::fmt(&**closure, f),
            Value::NativeFunction(native) => fmt::Debug::fmt(&**native, f),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests;
