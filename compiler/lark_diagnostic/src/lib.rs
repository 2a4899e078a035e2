//! Diagnostic system for the Lark pipeline.
//!
//! Every stage owns its own error type; each one converts into a
//! [`Diagnostic`] at the stage boundary so that the driver can count,
//! render and map them to an exit code without knowing which stage
//! produced them.
//!
//! - [`ErrorCode`]: stable, searchable identifiers (`E0001`, `E1002`, ...)
//! - [`Diagnostic`]: the shared record, rendered as `[line N] ...`
//! - [`emitter`]: terminal and JSON output

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Phase};
pub use error_code::ErrorCode;
