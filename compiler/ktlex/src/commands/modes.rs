//! `ktlex modes`: print the mode stack trajectory.

use std::fmt::Write;

use kt_lexer::{Frame, Lexer, LineIndex, SourceBuffer, TokenKind};

use super::location;

/// One line for the starting stack, then one line per token that changed
/// the stack depth.
pub fn mode_trajectory(source: &str) -> String {
    let buffer = SourceBuffer::new(source);
    let index = LineIndex::new(source);
    let mut lexer = Lexer::new(&buffer);
    let mut out = String::new();
    let _ = writeln!(out, "start {}", render_stack(lexer.mode_stack().frames()));

    let mut depth = lexer.mode_stack().depth();
    loop {
        let tok = lexer.next_token();
        let stack = lexer.mode_stack();
        if stack.depth() != depth {
            let action = if stack.depth() > depth { "push" } else { "pop" };
            let _ = writeln!(
                out,
                "{:<8} {:<4} {:<22} {}",
                location(&index, tok.span.start),
                action,
                format!("{:?}", tok.kind),
                render_stack(stack.frames()),
            );
            depth = stack.depth();
        }
        if tok.kind == TokenKind::Eof {
            break;
        }
    }
    out
}

fn render_stack(frames: &[Frame]) -> String {
    frames
        .iter()
        .map(|f| f.mode.name())
        .collect::<Vec<_>>()
        .join(" > ")
}
