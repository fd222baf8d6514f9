//! Keyword resolution for the cooking layer.
//!
//! The raw scanner hands over the maximal identifier run; an exact match in
//! the keyword table wins over `Identifier`, so `classifier` never splits
//! into `class` + `ifier`.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2 to 11 chars), then matches against the keywords
//! of that length.

use crate::TokenKind;

/// Look up a keyword (or `true`/`false`/`null`) by text.
///
/// Returns `None` for a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-11 lowercase ASCII chars
    if !(2..=11).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "by" => Some(TokenKind::By),
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            _ => None,
        },
        3 => match text {
            "fun" => Some(TokenKind::Fun),
            "val" => Some(TokenKind::Val),
            "var" => Some(TokenKind::Var),
            "try" => Some(TokenKind::Try),
            "for" => Some(TokenKind::For),
            "out" => Some(TokenKind::Out),
            "get" => Some(TokenKind::Get),
            "set" => Some(TokenKind::Set),
            _ => None,
        },
        4 => match text {
            "init" => Some(TokenKind::Init),
            "this" => Some(TokenKind::This),
            "else" => Some(TokenKind::Else),
            "when" => Some(TokenKind::When),
            "enum" => Some(TokenKind::Enum),
            "data" => Some(TokenKind::Data),
            "open" => Some(TokenKind::Open),
            "true" => Some(TokenKind::BooleanLiteral),
            "null" => Some(TokenKind::NullLiteral),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "super" => Some(TokenKind::Super),
            "where" => Some(TokenKind::Where),
            "catch" => Some(TokenKind::Catch),
            "while" => Some(TokenKind::While),
            "throw" => Some(TokenKind::Throw),
            "break" => Some(TokenKind::Break),
            "inner" => Some(TokenKind::Inner),
            "infix" => Some(TokenKind::Infix),
            "final" => Some(TokenKind::Final),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::BooleanLiteral),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::Import),
            "object" => Some(TokenKind::Object),
            "typeof" => Some(TokenKind::Typeof),
            "return" => Some(TokenKind::Return),
            "public" => Some(TokenKind::Public),
            "sealed" => Some(TokenKind::Sealed),
            "inline" => Some(TokenKind::Inline),
            "vararg" => Some(TokenKind::Vararg),
            "expect" => Some(TokenKind::Expect),
            "actual" => Some(TokenKind::Actual),
            _ => None,
        },
        7 => match text {
            "package" => Some(TokenKind::Package),
            "finally" => Some(TokenKind::Finally),
            "dynamic" => Some(TokenKind::Dynamic),
            "private" => Some(TokenKind::Private),
            "tailrec" => Some(TokenKind::Tailrec),
            "suspend" => Some(TokenKind::Suspend),
            "reified" => Some(TokenKind::Reified),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "internal" => Some(TokenKind::Internal),
            "operator" => Some(TokenKind::Operator),
            "external" => Some(TokenKind::External),
            "override" => Some(TokenKind::Override),
            "abstract" => Some(TokenKind::Abstract),
            "lateinit" => Some(TokenKind::Lateinit),
            "noinline" => Some(TokenKind::Noinline),
            _ => None,
        },
        9 => match text {
            "interface" => Some(TokenKind::Interface),
            "typealias" => Some(TokenKind::TypeAlias),
            "companion" => Some(TokenKind::Companion),
            "protected" => Some(TokenKind::Protected),
            _ => None,
        },
        10 => match text {
            "annotation" => Some(TokenKind::Annotation),
            _ => None,
        },
        11 => match text {
            "constructor" => Some(TokenKind::Constructor),
            "crossinline" => Some(TokenKind::Crossinline),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve `return@l`, `break@l`, ... by the word before the `@`.
pub(crate) fn labelled_jump(text: &str) -> Option<TokenKind> {
    let word = text.split_once('@').map_or(text, |(word, _)| word);
    match word {
        "return" => Some(TokenKind::ReturnAt),
        "continue" => Some(TokenKind::ContinueAt),
        "break" => Some(TokenKind::BreakAt),
        "this" => Some(TokenKind::ThisAt),
        "super" => Some(TokenKind::SuperAt),
        _ => None,
    }
}

/// Resolve an annotation use-site target such as `@get`.
pub(crate) fn use_site_target(text: &str) -> Option<TokenKind> {
    match text.strip_prefix('@')? {
        "file" => Some(TokenKind::AtFile),
        "field" => Some(TokenKind::AtField),
        "property" => Some(TokenKind::AtProperty),
        "get" => Some(TokenKind::AtGet),
        "set" => Some(TokenKind::AtSet),
        "receiver" => Some(TokenKind::AtReceiver),
        "param" => Some(TokenKind::AtParam),
        "setparam" => Some(TokenKind::AtSetparam),
        "delegate" => Some(TokenKind::AtDelegate),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
