//! The `explain` command: describe a diagnostic code.

use lark_diagnostic::ErrorCode;

use crate::{EXIT_OK, EXIT_USAGE};

/// `E1002: an expression was expected here`, or `None` for an unknown code.
pub fn describe_code(code: &str) -> Option<String> {
    let code = code.parse::<ErrorCode>().ok()?;
    Some(format!("{code}: {}", code.description()))
}

pub fn explain_code(code: &str) -> u8 {
    let Some(text) = describe_code(code) else {
        eprintln!("error: unknown error code '{code}'");
        eprintln!("codes look like E0001 (lexical), E1001 (syntax) or E6001 (runtime)");
        return EXIT_USAGE;
    };
    println!("{text}");
    EXIT_OK
}
