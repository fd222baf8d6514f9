//! Token types: kinds, channels, per-token flags.
//!
//! A [`Token`] carries no text. Its [`Span`] indexes the source, and
//! [`Token::text`] slices it back out, so a token stream is lossless.

use bitflags::bitflags;
use kt_lexer_core::Mode;

use crate::Span;

/// A lexical category.
///
/// Variants are grouped the way the grammar groups them: trivia,
/// punctuation, labelled jumps, keywords, use-site targets, literals,
/// identifiers, string fragments, errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Trivia ===
    Whitespace,
    Newline,
    LineComment,
    /// `/* ... */`, possibly nested.
    DelimitedComment,
    /// `/** ... */`
    DocComment,
    ByteOrderMark,
    /// `#!...` on the first line. Not hidden.
    ShebangLine,

    // === Punctuation & Operators ===
    /// `...`
    Reserved,
    Dot,
    Comma,
    LParen,
    RParen,
    LSquare,
    RSquare,
    LCurl,
    RCurl,
    Mult,
    Mod,
    Div,
    Add,
    Sub,
    Incr,
    Decr,
    /// `&&`
    Conj,
    /// `||`
    Disj,
    /// `!` followed by whitespace.
    ExclWs,
    ExclNoWs,
    Colon,
    Semicolon,
    Assignment,
    AddAssignment,
    SubAssignment,
    MultAssignment,
    DivAssignment,
    ModAssignment,
    Arrow,
    /// `=>`
    DoubleArrow,
    /// `..`
    Range,
    ColonColon,
    DoubleSemicolon,
    Hash,
    At,
    /// `@` followed by whitespace.
    AtWs,
    /// `?` followed by whitespace.
    QuestWs,
    QuestNoWs,
    LAngle,
    RAngle,
    Le,
    Ge,
    ExclEq,
    ExclEqEq,
    AsSafe,
    EqEq,
    EqEqEq,
    /// A `'` that does not start a character literal.
    SingleQuote,

    // === Labelled Jumps ===
    ReturnAt,
    ContinueAt,
    BreakAt,
    ThisAt,
    SuperAt,

    // === Keywords ===
    Package,
    Import,
    Class,
    Interface,
    Fun,
    Object,
    Val,
    Var,
    TypeAlias,
    Constructor,
    By,
    Companion,
    Init,
    This,
    Super,
    Typeof,
    Where,
    If,
    Else,
    When,
    Try,
    Catch,
    Finally,
    For,
    Do,
    While,
    Throw,
    Return,
    Continue,
    Break,
    As,
    Is,
    In,
    /// `!is`
    NotIs,
    /// `!in`
    NotIn,
    Out,
    Get,
    Set,
    Dynamic,
    Public,
    Private,
    Protected,
    Internal,
    Enum,
    Sealed,
    Annotation,
    Data,
    Inner,
    Tailrec,
    Operator,
    Inline,
    Infix,
    External,
    Suspend,
    Override,
    Abstract,
    Final,
    Open,
    Const,
    Lateinit,
    Vararg,
    Noinline,
    Crossinline,
    Reified,
    Expect,
    Actual,

    // === Annotation Use-Site Targets ===
    AtFile,
    AtField,
    AtProperty,
    AtGet,
    AtSet,
    AtReceiver,
    AtParam,
    AtSetparam,
    AtDelegate,

    // === Literals ===
    FloatLiteral,
    DoubleLiteral,
    LongLiteral,
    IntegerLiteral,
    HexLiteral,
    BinLiteral,
    /// `true` / `false`
    BooleanLiteral,
    NullLiteral,
    CharacterLiteral,

    // === Identifiers ===
    Identifier,
    /// `label@`
    IdentifierAt,
    /// `$name` in code
    FieldIdentifier,

    // === String Fragments ===
    QuoteOpen,
    TripleQuoteOpen,
    QuoteClose,
    TripleQuoteClose,
    LineStrRef,
    LineStrText,
    LineStrEscapedChar,
    LineStrExprStart,
    /// One or more `"` inside a multi-line string that do not close it.
    MultiLineStringQuote,
    MultiLineStrRef,
    MultiLineStrText,
    MultiLineStrExprStart,

    // === Errors ===
    /// A character no rule accepts, or an interior NUL.
    ErrorCharacter,
    /// A `\` escape in a line string that is not recognized.
    InvalidEscape,
    /// Zero-length marker for a string still open at end of input.
    UnterminatedString,
    /// A `/*` comment running to end of input.
    UnterminatedComment,

    // === Control ===
    Eof,
}

/// How strongly a keyword is reserved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeywordClass {
    /// Never usable as an identifier.
    Hard,
    /// A keyword only in specific positions.
    Soft,
    /// A declaration modifier.
    Modifier,
}

impl TokenKind {
    /// Keyword class, or `None` for non-keywords.
    pub fn keyword_class(self) -> Option<KeywordClass> {
        use TokenKind::{
            Abstract, Actual, Annotation, As, AsSafe, AtDelegate, AtField, AtFile, AtGet,
            AtParam, AtProperty, AtReceiver, AtSet, AtSetparam, BooleanLiteral, Break, BreakAt,
            By, Catch, Class, Companion, Const, Constructor, Continue, ContinueAt, Crossinline,
            Data, Do, Dynamic, Else, Enum, Expect, External, Final, Finally, For, Fun, Get, If,
            Import, In, Infix, Init, Inline, Inner, Interface, Internal, Is, Lateinit, Noinline,
            NotIn, NotIs, NullLiteral, Object, Open, Operator, Out, Override, Package, Private,
            Protected, Public, Reified, Return, ReturnAt, Sealed, Set, Super, SuperAt, Suspend,
            Tailrec, This, ThisAt, Throw, Try, TypeAlias, Typeof, Val, Var, Vararg, When, Where,
            While,
        };
        let class = match self {
            As | AsSafe | Break | BreakAt | Class | Continue | ContinueAt | Do | Else | For
            | Fun | If | In | NotIn | Interface | Is | NotIs | Object | Package | Return
            | ReturnAt | Super | SuperAt | This | ThisAt | Throw | Try | TypeAlias | Typeof
            | Val | Var | When | While | BooleanLiteral | NullLiteral => KeywordClass::Hard,

            By | Catch | Constructor | Dynamic | Finally | Get | Import | Init | Set | Where
            | AtFile | AtField | AtProperty | AtGet | AtSet | AtReceiver | AtParam
            | AtSetparam | AtDelegate => KeywordClass::Soft,

            Abstract | Actual | Annotation | Companion | Const | Crossinline | Data | Enum
            | Expect | External | Final | Infix | Inline | Inner | Internal | Lateinit
            | Noinline | Open | Operator | Out | Override | Private | Protected | Public
            | Reified | Sealed | Suspend | Tailrec | Vararg => KeywordClass::Modifier,

            _ => return None,
        };
        Some(class)
    }

    /// Returns `true` for keywords of any class.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.keyword_class().is_some()
    }

    /// Whitespace, newlines, comments and the byte order mark.
    ///
    /// The shebang line is not trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::DelimitedComment
                | TokenKind::DocComment
                | TokenKind::ByteOrderMark
        )
    }

    /// Comment tokens, including an unterminated one.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment
                | TokenKind::DelimitedComment
                | TokenKind::DocComment
                | TokenKind::UnterminatedComment
        )
    }

    /// Error kinds.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::ErrorCharacter
                | TokenKind::InvalidEscape
                | TokenKind::UnterminatedString
                | TokenKind::UnterminatedComment
        )
    }

    /// Numeric, boolean, null and character literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::FloatLiteral
                | TokenKind::DoubleLiteral
                | TokenKind::LongLiteral
                | TokenKind::IntegerLiteral
                | TokenKind::HexLiteral
                | TokenKind::BinLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::NullLiteral
                | TokenKind::CharacterLiteral
        )
    }

    /// Tokens that make up the inside of a string literal, delimiters
    /// included.
    pub fn is_string_part(self) -> bool {
        matches!(
            self,
            TokenKind::QuoteOpen
                | TokenKind::TripleQuoteOpen
                | TokenKind::QuoteClose
                | TokenKind::TripleQuoteClose
                | TokenKind::LineStrRef
                | TokenKind::LineStrText
                | TokenKind::LineStrEscapedChar
                | TokenKind::LineStrExprStart
                | TokenKind::MultiLineStringQuote
                | TokenKind::MultiLineStrRef
                | TokenKind::MultiLineStrText
                | TokenKind::MultiLineStrExprStart
                | TokenKind::InvalidEscape
        )
    }
}

/// Which stream a token belongs to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Seen by the parser.
    #[default]
    Default,
    /// Kept for tooling, skipped by the parser.
    Hidden,
}

bitflags! {
    /// Layout context of a token, packed into one byte.
    ///
    /// Computed from the hidden tokens preceding a default-channel token,
    /// so a parser that never looks at trivia still knows where whitespace
    /// and newlines were. Hidden tokens only ever carry `HAS_ERROR`.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TokenFlags: u8 {
        /// Whitespace preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// A newline preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// A comment preceded this token.
        const TRIVIA_BEFORE = 1 << 2;
        /// First default-channel token on its line.
        const LINE_START = 1 << 3;
        /// Cooking reported an error for this token.
        const HAS_ERROR = 1 << 4;
        /// Nothing hidden between this token and the previous one.
        const ADJACENT = 1 << 5;
    }
}

const _: () = assert!(std::mem::size_of::<TokenFlags>() == 1);

/// One lexed token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub channel: Channel,
    /// Mode active when the token was scanned.
    pub mode: Mode,
    pub flags: TokenFlags,
}

impl Token {
    /// The token's source text.
    ///
    /// Returns `""` if `source` is not the text this token was lexed from
    /// and the span does not fit it.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or("")
    }

    /// Returns `true` for hidden-channel tokens.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }
}

#[cfg(test)]
mod tests;
