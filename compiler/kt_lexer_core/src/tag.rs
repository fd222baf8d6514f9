//! Raw token tags produced by the scanner.
//!
//! A [`RawTag`] names the lexical shape the scanner recognized. Keywords
//! are still `Ident` here and escapes are not yet validated; the cooking
//! layer in `kt_lexer` finishes the job.
//!
//! Discriminants are grouped by category so range checks stay cheap:
//!
//! | Range    | Category                 |
//! |----------|--------------------------|
//! | 0-15     | Identifiers & literals   |
//! | 32-79    | Operators                |
//! | 96-101   | Delimiters               |
//! | 112-127  | String fragments         |
//! | 144-150  | Trivia                   |
//! | 240-243  | Errors                   |
//! | 255      | End of input             |

use crate::Mode;

/// Lexical category of a raw token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Identifier or keyword (resolved by the cooker).
    Ident = 0,
    /// `` `any text` ``
    BacktickIdent = 1,
    /// `label@`
    IdentAt = 2,
    /// `return@l`, `continue@l`, `break@l`, `this@l`, `super@l`.
    LabelledJump = 3,
    /// `@file`, `@field`, `@get`, ... (whole word only).
    UseSiteTarget = 4,
    /// Decimal integer.
    Int = 5,
    /// Integer, hex or binary literal with `L` suffix.
    Long = 6,
    /// Decimal with fraction and/or exponent.
    Double = 7,
    /// Number with `f`/`F` suffix.
    Float = 8,
    /// `0x...`
    HexInt = 9,
    /// `0b...`
    BinInt = 10,
    /// `'c'`, `'\n'`, `'A'` (escape not yet validated).
    Char = 11,
    /// `$name` outside a string.
    FieldIdent = 12,

    // === Operators ===
    Dot = 32,
    Comma = 33,
    Star = 34,
    Percent = 35,
    Slash = 36,
    Plus = 37,
    Minus = 38,
    PlusPlus = 39,
    MinusMinus = 40,
    AmpAmp = 41,
    PipePipe = 42,
    /// `!` followed by whitespace or a newline (included in the token).
    BangWs = 43,
    Bang = 44,
    Colon = 45,
    Semicolon = 46,
    Equal = 47,
    PlusEqual = 48,
    MinusEqual = 49,
    StarEqual = 50,
    SlashEqual = 51,
    PercentEqual = 52,
    Arrow = 53,
    FatArrow = 54,
    DotDot = 55,
    /// `...` (reserved).
    Ellipsis = 56,
    ColonColon = 57,
    SemiSemi = 58,
    Hash = 59,
    At = 60,
    /// `@` followed by whitespace or a newline (included in the token).
    AtWs = 61,
    /// `?` followed by whitespace or a newline (included in the token).
    QuestionWs = 62,
    Question = 63,
    Less = 64,
    Greater = 65,
    LessEqual = 66,
    GreaterEqual = 67,
    BangEqual = 68,
    BangEqualEqual = 69,
    EqualEqual = 70,
    EqualEqualEqual = 71,
    /// `as?`
    AsSafe = 72,
    /// `!is` plus one trailing whitespace or newline, when present.
    NotIs = 73,
    /// `!in` plus one trailing whitespace or newline, when present.
    NotIn = 74,
    /// A `'` that does not start a character literal.
    SingleQuote = 75,

    // === Delimiters ===
    LeftParen = 96,
    RightParen = 97,
    LeftBracket = 98,
    RightBracket = 99,
    LeftBrace = 100,
    RightBrace = 101,

    // === String Fragments ===
    QuoteOpen = 112,
    TripleQuoteOpen = 113,
    QuoteClose = 114,
    TripleQuoteClose = 115,
    LineStrText = 116,
    /// `\` plus the escaped character, or `\u` plus up to four hex digits.
    LineStrEscape = 117,
    LineStrRef = 118,
    LineStrExprStart = 119,
    /// Quotes inside a multi-line string that do not close it.
    MultiLineQuote = 120,
    MultiLineStrText = 121,
    MultiLineStrRef = 122,
    MultiLineStrExprStart = 123,

    // === Trivia ===
    Whitespace = 144,
    Newline = 145,
    LineComment = 146,
    BlockComment = 147,
    DocComment = 148,
    ByteOrderMark = 149,
    /// `#!...` at the start of the unit. Not trivia: it stays visible.
    Shebang = 150,

    // === Errors ===
    /// One character no rule accepts.
    InvalidChar = 240,
    /// Zero-length marker for a string still open at end of input.
    UnterminatedString = 241,
    /// `/*` without a matching `*/`; runs to end of input.
    UnterminatedComment = 242,
    /// A NUL byte inside the source.
    InteriorNull = 243,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Human-readable description for diagnostics and debug output.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::BacktickIdent => "quoted identifier",
            RawTag::IdentAt => "label",
            RawTag::LabelledJump => "labelled jump",
            RawTag::UseSiteTarget => "use-site target",
            RawTag::Int => "integer literal",
            RawTag::Long => "long literal",
            RawTag::Double => "double literal",
            RawTag::Float => "float literal",
            RawTag::HexInt => "hex integer literal",
            RawTag::BinInt => "binary integer literal",
            RawTag::Char => "character literal",
            RawTag::FieldIdent => "field identifier",
            RawTag::BangWs => "`!` followed by whitespace",
            RawTag::AtWs => "`@` followed by whitespace",
            RawTag::QuestionWs => "`?` followed by whitespace",
            RawTag::NotIs => "`!is`",
            RawTag::NotIn => "`!in`",
            RawTag::QuoteOpen => "string start",
            RawTag::TripleQuoteOpen => "multi-line string start",
            RawTag::QuoteClose => "string end",
            RawTag::TripleQuoteClose => "multi-line string end",
            RawTag::LineStrText | RawTag::MultiLineStrText => "string text",
            RawTag::LineStrEscape => "escape sequence",
            RawTag::LineStrRef | RawTag::MultiLineStrRef => "string reference",
            RawTag::LineStrExprStart | RawTag::MultiLineStrExprStart => "`${`",
            RawTag::MultiLineQuote => "string quote",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::DocComment => "doc comment",
            RawTag::ByteOrderMark => "byte order mark",
            RawTag::Shebang => "shebang line",
            RawTag::InvalidChar => "invalid character",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::UnterminatedComment => "unterminated comment",
            RawTag::InteriorNull => "interior null byte",
            RawTag::Eof => "end of file",
            _ => self.operator_name(),
        }
    }

    fn operator_name(self) -> &'static str {
        match self {
            RawTag::Dot => "`.`",
            RawTag::Comma => "`,`",
            RawTag::Star => "`*`",
            RawTag::Percent => "`%`",
            RawTag::Slash => "`/`",
            RawTag::Plus => "`+`",
            RawTag::Minus => "`-`",
            RawTag::PlusPlus => "`++`",
            RawTag::MinusMinus => "`--`",
            RawTag::AmpAmp => "`&&`",
            RawTag::PipePipe => "`||`",
            RawTag::Bang => "`!`",
            RawTag::Colon => "`:`",
            RawTag::Semicolon => "`;`",
            RawTag::Equal => "`=`",
            RawTag::PlusEqual => "`+=`",
            RawTag::MinusEqual => "`-=`",
            RawTag::StarEqual => "`*=`",
            RawTag::SlashEqual => "`/=`",
            RawTag::PercentEqual => "`%=`",
            RawTag::Arrow => "`->`",
            RawTag::FatArrow => "`=>`",
            RawTag::DotDot => "`..`",
            RawTag::Ellipsis => "`...`",
            RawTag::ColonColon => "`::`",
            RawTag::SemiSemi => "`;;`",
            RawTag::Hash => "`#`",
            RawTag::At => "`@`",
            RawTag::Question => "`?`",
            RawTag::Less => "`<`",
            RawTag::Greater => "`>`",
            RawTag::LessEqual => "`<=`",
            RawTag::GreaterEqual => "`>=`",
            RawTag::BangEqual => "`!=`",
            RawTag::BangEqualEqual => "`!==`",
            RawTag::EqualEqual => "`==`",
            RawTag::EqualEqualEqual => "`===`",
            RawTag::AsSafe => "`as?`",
            RawTag::SingleQuote => "`'`",
            RawTag::LeftParen => "`(`",
            RawTag::RightParen => "`)`",
            RawTag::LeftBracket => "`[`",
            RawTag::RightBracket => "`]`",
            RawTag::LeftBrace => "`{`",
            RawTag::RightBrace => "`}`",
            _ => "token",
        }
    }
}

/// A raw token: tag, byte length, and the mode it was scanned in.
///
/// The start offset is implicit: tokens are contiguous, so it is the sum
/// of all preceding lengths.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
    pub mode: Mode,
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);

#[cfg(test)]
mod tests;
