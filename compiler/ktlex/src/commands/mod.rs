//! Command handlers for the `ktlex` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! `read_file` and `location` live here in the module root.

use kt_lexer::LineIndex;

mod check;
mod lex;
mod modes;

pub use check::{check_source, CheckReport};
pub use lex::{lex_source, parse_lex_options, LexOptions};
pub use modes::mode_trajectory;

/// Read a source file, mapping I/O failures to a user-facing message.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// `line:col` of a byte offset, both 1-based.
fn location(index: &LineIndex, offset: u32) -> String {
    let (line, col) = index.line_col(offset);
    format!("{line}:{col}")
}

#[cfg(test)]
mod tests;
