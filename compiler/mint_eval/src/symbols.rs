//! The symbol mapping: one flat table from variable name to value.
//!
//! There is no declaration step and no nesting. The first write creates a
//! binding, later writes replace it, and reading a name that was never
//! written yields `0`.

use rustc_hash::FxHashMap;

use crate::Value;

/// Variable bindings for one program execution.
///
/// Created empty by [`Interpreter::execute`](crate::Interpreter::execute)
/// and passed by `&mut` into every evaluation call.
#[derive(Clone, Debug, Default)]
pub struct Symbols {
    bindings: FxHashMap<String, Value>,
}

impl Symbols {
    pub fn new() -> Self {
        Symbols {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Current value of `name`, or `0` if it was never assigned.
    pub fn lookup(&self, name: &str) -> Value {
        if let Some(value) = self.bindings.get(name) {
            return value.clone();
        }
        tracing::trace!(name, "read of unbound variable yields 0");
        Value::UNIT
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
