//! RAII scope guard for block execution.
//!
//! The guard pushes a scope on creation and pops it on drop, so the scope is
//! released on every exit path, including `?` returns and unwinding. In flat
//! mode both operations are no-ops.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Holds `&mut Interpreter` and derefs to it, so the body of a block runs
/// through the guard.
pub(crate) struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a block scope that is popped when the guard drops.
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }
}
