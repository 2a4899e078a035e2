//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::environment::{Environment, ScopeMode};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: flat scoping, a fresh environment, output to stdout.
#[derive(Default)]
pub struct InterpreterBuilder {
    scope_mode: ScopeMode,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scoping mode. Ignored when an environment is supplied.
    #[must_use]
    pub fn scope_mode(mut self, mode: ScopeMode) -> Self {
        self.scope_mode = mode;
        self
    }

    /// Start from an existing environment, keeping its bindings and mode.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the print handler. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self
                .env
                .unwrap_or_else(|| Environment::new(self.scope_mode)),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
