//! `ktlex lex`: print the token stream.

use std::fmt::Write;

use kt_lexer::{lex_with_config, LexerConfig, LineIndex, Mode};

use super::location;

/// Options for the `lex` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Print hidden-channel tokens too.
    pub hidden: bool,
    pub config: LexerConfig,
}

/// Parse `lex` flags. Unknown flags and bad mode names are errors.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        if arg == "--hidden" {
            options.hidden = true;
        } else if arg == "--significant-newlines" {
            options.config = options.config.significant_newlines(true);
        } else if arg == "--no-shebang" {
            options.config = options.config.recognize_shebang(false);
        } else if let Some(name) = arg.strip_prefix("--start-mode=") {
            let mode = Mode::from_name(name).ok_or_else(|| {
                format!(
                    "unknown mode '{name}' (expected default, inside, linestring or multilinestring)"
                )
            })?;
            options.config = options.config.with_start_mode(mode);
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}

/// Render one line per token: kind, `line:col`, byte span, mode, text.
pub fn lex_source(source: &str, options: &LexOptions) -> String {
    let output = lex_with_config(source, &options.config);
    let index = LineIndex::new(source);
    let mut out = String::new();
    for tok in &output.tokens {
        if tok.is_hidden() && !options.hidden {
            continue;
        }
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<24} {:<8} {:<10} {:<16} {:?}",
            format!("{:?}", tok.kind),
            location(&index, tok.span.start),
            tok.span.to_string(),
            tok.mode.name(),
            tok.text(source),
        );
    }
    if output.has_errors() {
        let _ = writeln!(out, "{} error(s)", output.errors.len());
    }
    out
}

#[cfg(test)]
mod tests;
