use super::*;
use pretty_assertions::assert_eq;

// === Keyword Lookup ===

#[test]
fn every_keyword_resolves() {
    let table = [
        ("package", TokenKind::Package),
        ("import", TokenKind::Import),
        ("class", TokenKind::Class),
        ("interface", TokenKind::Interface),
        ("fun", TokenKind::Fun),
        ("object", TokenKind::Object),
        ("val", TokenKind::Val),
        ("var", TokenKind::Var),
        ("typealias", TokenKind::TypeAlias),
        ("constructor", TokenKind::Constructor),
        ("by", TokenKind::By),
        ("companion", TokenKind::Companion),
        ("init", TokenKind::Init),
        ("this", TokenKind::This),
        ("super", TokenKind::Super),
        ("typeof", TokenKind::Typeof),
        ("where", TokenKind::Where),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("when", TokenKind::When),
        ("try", TokenKind::Try),
        ("catch", TokenKind::Catch),
        ("finally", TokenKind::Finally),
        ("for", TokenKind::For),
        ("do", TokenKind::Do),
        ("while", TokenKind::While),
        ("throw", TokenKind::Throw),
        ("return", TokenKind::Return),
        ("continue", TokenKind::Continue),
        ("break", TokenKind::Break),
        ("as", TokenKind::As),
        ("is", TokenKind::Is),
        ("in", TokenKind::In),
        ("out", TokenKind::Out),
        ("get", TokenKind::Get),
        ("set", TokenKind::Set),
        ("dynamic", TokenKind::Dynamic),
        ("public", TokenKind::Public),
        ("private", TokenKind::Private),
        ("protected", TokenKind::Protected),
        ("internal", TokenKind::Internal),
        ("enum", TokenKind::Enum),
        ("sealed", TokenKind::Sealed),
        ("annotation", TokenKind::Annotation),
        ("data", TokenKind::Data),
        ("inner", TokenKind::Inner),
        ("tailrec", TokenKind::Tailrec),
        ("operator", TokenKind::Operator),
        ("inline", TokenKind::Inline),
        ("infix", TokenKind::Infix),
        ("external", TokenKind::External),
        ("suspend", TokenKind::Suspend),
        ("override", TokenKind::Override),
        ("abstract", TokenKind::Abstract),
        ("final", TokenKind::Final),
        ("open", TokenKind::Open),
        ("const", TokenKind::Const),
        ("lateinit", TokenKind::Lateinit),
        ("vararg", TokenKind::Vararg),
        ("noinline", TokenKind::Noinline),
        ("crossinline", TokenKind::Crossinline),
        ("reified", TokenKind::Reified),
        ("expect", TokenKind::Expect),
        ("actual", TokenKind::Actual),
        ("true", TokenKind::BooleanLiteral),
        ("false", TokenKind::BooleanLiteral),
        ("null", TokenKind::NullLiteral),
    ];
    for (text, kind) in table {
        assert_eq!(lookup(text), Some(kind), "{text}");
        assert!(kind.keyword_class().is_some(), "{kind:?} has no class");
    }
}

#[test]
fn identifiers_are_not_keywords() {
    for text in [
        "classifier",
        "x",
        "Fun",
        "value",
        "field",
        "funny",
        "_val",
        "crossinlined",
        "",
    ] {
        assert_eq!(lookup(text), None, "{text:?}");
    }
}

#[test]
fn unicode_identifier_is_not_keyword() {
    assert_eq!(lookup("café"), None);
}

// === Labelled Jumps ===

#[test]
fn labelled_jump_words() {
    assert_eq!(labelled_jump("return@outer"), Some(TokenKind::ReturnAt));
    assert_eq!(labelled_jump("continue@l"), Some(TokenKind::ContinueAt));
    assert_eq!(labelled_jump("break@l"), Some(TokenKind::BreakAt));
    assert_eq!(labelled_jump("this@Outer"), Some(TokenKind::ThisAt));
    assert_eq!(labelled_jump("super@Base"), Some(TokenKind::SuperAt));
    assert_eq!(labelled_jump("loop@x"), None);
}

// === Use-Site Targets ===

#[test]
fn use_site_targets() {
    assert_eq!(use_site_target("@file"), Some(TokenKind::AtFile));
    assert_eq!(use_site_target("@setparam"), Some(TokenKind::AtSetparam));
    assert_eq!(use_site_target("@delegate"), Some(TokenKind::AtDelegate));
    assert_eq!(use_site_target("@getter"), None);
    assert_eq!(use_site_target("get"), None);
}
