//! Lexical environments.
//!
//! An [`Environment`] is a handle to one [`Scope`] node; each node holds its
//! own bindings plus a pointer to its parent. Handles are cheap to clone and
//! share the node, so a closure that captures an environment keeps the whole
//! chain above it alive for as long as the closure is reachable.
//!
//! `define` only ever touches the node it is called on. Lookup walks from
//! that node out to the root.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::errors::unbound_symbol;
use crate::{EvalResult, Value};

/// A single-threaded, shared, interior-mutable cell.
///
/// Wraps `Rc<RefCell<T>>` so that scope nodes are only ever allocated through
/// [`LocalScope::new`]. Not `Send`: evaluation is single-threaded.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// One node of an environment chain.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Rc<str>, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a root scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create an empty scope below `parent`.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope only, replacing any previous binding here.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        match self.bindings.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.bindings.insert(Rc::from(name), value);
            }
        }
    }

    /// Binding in this scope only; parents are not consulted.
    #[inline]
    pub fn get_local(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    /// Number of bindings in this scope.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Handle to a scope node and, through it, its whole parent chain.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create an empty root environment.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::new()))
    }

    /// Create an empty environment whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope::with_parent(self.0.clone())))
    }

    /// Bind `name` in this environment node (never in a parent).
    #[inline]
    pub fn define(&self, name: &str, value: Value) {
        self.0.borrow_mut().define(name, value);
    }

    /// Find `name`, searching this node and then each parent in turn.
    pub fn find(&self, name: &str) -> Option<Value> {
        let mut scope = self.0.clone();
        loop {
            let next = {
                let node = scope.borrow();
                if let Some(value) = node.get_local(name) {
                    return Some(value);
                }
                node.parent().cloned()
            };
            scope = next?;
        }
    }

    /// Like [`find`](Self::find), but a miss is an `UnboundSymbol` error.
    #[inline]
    pub fn lookup(&self, name: &str) -> EvalResult {
        self.find(name).ok_or_else(|| unbound_symbol(name))
    }

    /// Number of nodes from this one up to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut scope = self.0.clone();
        loop {
            let next = scope.borrow().parent().cloned();
            match next {
                Some(parent) => {
                    depth += 1;
                    scope = parent;
                }
                None => return depth,
            }
        }
    }

    /// Do both handles refer to the same node?
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Non-owning handle, for builtins stored inside this environment.
    pub fn downgrade(&self) -> WeakEnvironment {
        WeakEnvironment(Rc::downgrade(&self.0 .0))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.0.borrow().len())
            .field("depth", &self.depth())
            .finish()
    }
}

/// Weak counterpart of [`Environment`].
#[derive(Clone)]
pub struct WeakEnvironment(Weak<RefCell<Scope>>);

impl WeakEnvironment {
    /// The environment, if anything still owns it.
    pub fn upgrade(&self) -> Option<Environment> {
        self.0.upgrade().map(|rc| Environment(LocalScope(rc)))
    }
}

impl fmt::Debug for WeakEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakEnvironment")
    }
}
