use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

// === Options ===

#[test]
fn parse_all_flags() {
    let options = parse_lex_options(&args(&[
        "--hidden",
        "--significant-newlines",
        "--start-mode=LineString",
        "--no-shebang",
    ]));
    assert_eq!(
        options,
        Ok(LexOptions {
            hidden: true,
            config: LexerConfig::default()
                .significant_newlines(true)
                .with_start_mode(Mode::LineString)
                .recognize_shebang(false),
        })
    );
}

#[test]
fn start_mode_is_case_insensitive() {
    let options = parse_lex_options(&args(&["--start-mode=multilinestring"]));
    assert_eq!(
        options.map(|o| o.config.start_mode),
        Ok(Mode::MultiLineString)
    );
}

#[test]
fn bad_mode_and_unknown_flag() {
    assert!(parse_lex_options(&args(&["--start-mode=nope"]))
        .is_err_and(|msg| msg.contains("unknown mode 'nope'")));
    assert_eq!(
        parse_lex_options(&args(&["--verbose"])),
        Err("unknown option '--verbose'".to_owned())
    );
}

// === Rendering ===

#[test]
fn one_line_per_significant_token() {
    let out = lex_source("val x = 1", &LexOptions::default());
    let kinds: Vec<&str> = out
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(kinds, vec!["Val", "Identifier", "Assignment", "IntegerLiteral", "Eof"]);
}

#[test]
fn line_shows_location_span_mode_and_text() {
    let out = lex_source("a\n  \"s\"", &LexOptions::default());
    let line = out.lines().nth(2).unwrap_or_default();
    let fields: Vec<&str> = line.split_whitespace().collect();
    assert_eq!(fields, vec!["LineStrText", "2:4", "5..6", "LineString", "\"s\""]);
}

#[test]
fn hidden_tokens_on_request() {
    let options = LexOptions {
        hidden: true,
        ..LexOptions::default()
    };
    let out = lex_source("a // c", &options);
    assert!(out.contains("LineComment"));
    assert!(out.contains("Whitespace"));
    assert!(!lex_source("a // c", &LexOptions::default()).contains("LineComment"));
}

#[test]
fn error_count_footer() {
    let out = lex_source("a ~ ~", &LexOptions::default());
    assert!(out.ends_with("2 error(s)\n"));
}
