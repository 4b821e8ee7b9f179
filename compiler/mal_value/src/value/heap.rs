//! Reference-counted storage for heap-allocated value payloads.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared, immutable payload of a heap [`Value`](super::Value) variant.
///
/// The constructors are private to the value module, so every symbol,
/// string, list and function is built through a `Value` factory method
/// (`Value::symbol`, `Value::list`, ...). Cloning is a reference-count bump.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// The payload, if this is the only handle to it.
    #[inline]
    pub(super) fn try_unwrap(this: Self) -> Result<T, Self> {
        Rc::try_unwrap(this.0).map_err(Heap)
    }
}

impl Heap<str> {
    #[inline]
    pub(super) fn from_text(text: &str) -> Self {
        Heap(Rc::from(text))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Do both handles point at the same allocation?
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        Heap::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
