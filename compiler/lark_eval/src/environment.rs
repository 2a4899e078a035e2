//! Environment for variable storage in the interpreter.
//!
//! Uses a scope stack. In [`ScopeMode::Flat`] the stack never grows past the
//! global scope, so every block shares one name table. In
//! [`ScopeMode::Lexical`] each block pushes a child scope; lookups and
//! assignments walk outward from the innermost scope.

use rustc_hash::FxHashMap;

use lark_ir::Value;

/// How blocks relate to variable scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScopeMode {
    /// One shared name table for the whole program.
    #[default]
    Flat,
    /// Each block gets its own scope, popped on exit.
    Lexical,
}

/// Error returned by `Environment::assign` when assignment fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found in any scope.
    Undefined,
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
}

/// Stack of scopes, global scope at the bottom.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    mode: ScopeMode,
}

impl Environment {
    /// Create an environment with only the global scope.
    pub fn new(mode: ScopeMode) -> Self {
        Environment {
            scopes: vec![Scope::default()],
            mode,
        }
    }

    /// Current scope depth. Always 1 in flat mode.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a new scope. No-op in flat mode.
    #[inline]
    pub fn push_scope(&mut self) {
        if self.mode == ScopeMode::Lexical {
            self.scopes.push(Scope::default());
        }
    }

    /// Pop the current scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    fn innermost(&mut self) -> &mut Scope {
        if self.scopes.is_empty() {
            self.scopes.push(Scope::default());
        }
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Bind `name` in the innermost scope. Rebinding an existing name is
    /// allowed and replaces its value.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.innermost().bindings.insert(name.to_owned(), value);
    }

    /// Look up a variable, innermost scope first.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name))
    }

    /// Overwrite an existing binding, innermost scope first.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        let slot = self
            .scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.bindings.get_mut(name))
            .ok_or(AssignError::Undefined)?;
        *slot = value;
        Ok(())
    }

    /// Whether `name` is bound in any visible scope.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(ScopeMode::default())
    }
}

#[cfg(test)]
mod tests;
