//! Recursion guard keyed on type identity

use crate::types::TypeName;
use std::collections::HashMap;

/// Per-call count of how often each type occurs on the active path
///
/// Only repeated types are curtailed: a deep chain of distinct types never
/// trips the guard, while a self- or mutually-referential type stops after
/// `max_repeat` expansions.
#[derive(Debug, Clone)]
pub struct RecursionGuard {
    counts: HashMap<TypeName, usize>,
    max_repeat: usize,
}

impl RecursionGuard {
    /// Create a guard with the given limit
    pub fn new(max_repeat: usize) -> Self {
        Self {
            counts: HashMap::new(),
            max_repeat,
        }
    }

    /// Configured limit
    pub fn max_repeat(&self) -> usize {
        self.max_repeat
    }

    /// Try to descend into a type
    ///
    /// Returns `true` and records the occurrence if the type is still within
    /// the limit. A refused entry records nothing and must not be exited.
    pub fn enter(&mut self, type_name: &TypeName) -> bool {
        let count = self.counts.get(type_name).copied().unwrap_or(0);
        if count >= self.max_repeat {
            return false;
        }
        self.counts.insert(type_name.clone(), count + 1);
        true
    }

    /// Leave a type entered with [`enter`](Self::enter)
    pub fn exit(&mut self, type_name: &TypeName) {
        if let Some(count) = self.counts.get_mut(type_name) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(type_name);
            }
        }
    }

    /// Occurrences of a type on the active path
    pub fn depth_of(&self, type_name: &TypeName) -> usize {
        self.counts.get(type_name).copied().unwrap_or(0)
    }

    /// Check if no type is currently entered
    pub fn is_idle(&self) -> bool {
        self.counts.is_empty()
    }
}
