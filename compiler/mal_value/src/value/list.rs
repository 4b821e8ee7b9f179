//! List payload.

use std::fmt;
use std::ops::Deref;

use super::{Heap, Value};

/// Elements of a list value.
///
/// Dropping tears nested lists down with a work list instead of recursing,
/// so a list nested a hundred thousand levels deep frees in constant stack.
pub struct ListItems(Vec<Value>);

impl ListItems {
    #[inline]
    pub(super) fn new(items: Vec<Value>) -> Self {
        ListItems(items)
    }
}

impl Deref for ListItems {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl Drop for ListItems {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(value) = pending.pop() {
            // Shared sublists only lose a reference here.
            if let Value::List(list) = value {
                if let Ok(mut items) = Heap::try_unwrap(list) {
                    pending.append(&mut items.0);
                }
            }
        }
    }
}

impl fmt::Debug for ListItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
