//! Scanner integration tests.
//!
//! Verifies token classification, malformation reporting and position
//! tracking over representative inputs.

use rustots_diagnostics::{DiagnosticCollection, Severity};
use rustots_scanner::{tokenize, Token, TokenKind};

/// Helper: scan all tokens from source together with the diagnostics.
fn scan_all(source: &str) -> (Vec<Token>, DiagnosticCollection) {
    let mut diagnostics = DiagnosticCollection::new();
    let tokens = tokenize(source, &mut diagnostics).expect("scanner invariant violated");
    (tokens, diagnostics)
}

/// Helper: (kind, value) pairs with whitespace and newlines removed.
fn significant(source: &str) -> Vec<(TokenKind, String)> {
    scan_all(source)
        .0
        .into_iter()
        .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Newline))
        .map(|t| (t.kind, t.value))
        .collect()
}

fn pair(kind: TokenKind, value: &str) -> (TokenKind, String) {
    (kind, value.to_string())
}

fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_empty_source() {
    let (tokens, diagnostics) = scan_all("");
    assert!(tokens.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_simple_variable_statement() {
    let (tokens, diagnostics) = scan_all("let x = 42;");
    assert!(diagnostics.is_empty());
    assert!(tokens.iter().all(|t| t.malformed.is_none()));
    assert_eq!(
        significant("let x = 42;"),
        vec![
            pair(TokenKind::Keyword, "let"),
            pair(TokenKind::Identifier, "x"),
            pair(TokenKind::Operator, "="),
            pair(TokenKind::Literal, "42"),
            pair(TokenKind::Punctuation, ";"),
        ]
    );
}

#[test]
fn test_whitespace_runs_are_single_tokens() {
    let (tokens, _) = scan_all("a \t  b");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Whitespace);
    assert_eq!(tokens[1].value, " \t  ");
}

#[test]
fn test_each_line_break_is_a_newline_token() {
    let (tokens, _) = scan_all("\n\n\r\n");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Newline));
}

#[test]
fn test_comments() {
    assert_eq!(
        significant("// line\n/* block */ x"),
        vec![
            pair(TokenKind::Comment, "// line"),
            pair(TokenKind::Comment, "/* block */"),
            pair(TokenKind::Identifier, "x"),
        ]
    );
}

#[test]
fn test_division_is_an_operator() {
    assert_eq!(
        significant("a / b /= c"),
        vec![
            pair(TokenKind::Identifier, "a"),
            pair(TokenKind::Operator, "/"),
            pair(TokenKind::Identifier, "b"),
            pair(TokenKind::Operator, "/="),
            pair(TokenKind::Identifier, "c"),
        ]
    );
}

#[test]
fn test_spread_is_punctuation() {
    assert_eq!(
        significant("f(...args)")[2],
        pair(TokenKind::Punctuation, "...")
    );
}

#[test]
fn test_string_literals() {
    assert_eq!(
        significant(r#"'a' "b\"c" `d`"#),
        vec![
            pair(TokenKind::Literal, "'a'"),
            pair(TokenKind::Literal, r#""b\"c""#),
            pair(TokenKind::Literal, "`d`"),
        ]
    );
}

#[test]
fn test_unicode_identifiers() {
    assert_eq!(
        significant("const café = $ñ_1;"),
        vec![
            pair(TokenKind::Keyword, "const"),
            pair(TokenKind::Identifier, "café"),
            pair(TokenKind::Operator, "="),
            pair(TokenKind::Identifier, "$ñ_1"),
            pair(TokenKind::Punctuation, ";"),
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(significant("letter"), vec![pair(TokenKind::Identifier, "letter")]);
}

// ============================================================================
// Malformation
// ============================================================================

#[test]
fn test_unterminated_string_stops_at_end_of_line() {
    let source = "let texto = \"string sem aspas finais\nx";
    let (tokens, diagnostics) = scan_all(source);
    let malformed: Vec<&Token> = tokens.iter().filter(|t| t.is_malformed()).collect();
    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].kind, TokenKind::Literal);
    assert_eq!(malformed[0].value, "\"string sem aspas finais");
    assert_eq!(malformed[0].malformed.as_deref(), Some("unterminated string"));

    let diagnostic = &diagnostics.diagnostics()[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.location.line, 1);
    assert_eq!(diagnostic.location.column, 13);
    assert_eq!(diagnostic.location.length, 24);

    // The line break is still its own token.
    assert_eq!(tokens.last().map(|t| t.value.as_str()), Some("x"));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Newline));
}

#[test]
fn test_unterminated_string_at_end_of_input() {
    let (tokens, diagnostics) = scan_all("'abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].malformed.as_deref(), Some("unterminated string"));
    assert_eq!(diagnostics.error_count(), 1);
}

#[test]
fn test_multiple_decimal_points() {
    let (tokens, diagnostics) = scan_all("let num = 1.2.3;");
    let literal = tokens.iter().find(|t| t.kind == TokenKind::Literal).unwrap();
    assert_eq!(literal.value, "1.2.3");
    assert_eq!(
        literal.malformed.as_deref(),
        Some("number with multiple decimal points (2)")
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.diagnostics()[0].code.as_deref(), Some("L002"));
}

#[test]
fn test_unterminated_block_comment() {
    let source = "/* comentário sem fechamento";
    let (tokens, diagnostics) = scan_all(source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, source);
    assert_eq!(tokens[0].malformed.as_deref(), Some("unterminated block comment"));
    assert_eq!(diagnostics.diagnostics()[0].location.length, source.chars().count() as u32);
}

#[test]
fn test_unrecognized_character() {
    let (tokens, diagnostics) = scan_all("let x = 100@;");
    let unknown: Vec<&Token> = tokens.iter().filter(|t| t.kind == TokenKind::Unknown).collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].value, "@");
    assert!(unknown[0].malformed.as_deref().unwrap().contains('@'));
    assert_eq!(unknown[0].position.column, 12);
    assert_eq!(diagnostics.len(), 1);

    let literal = tokens.iter().find(|t| t.kind == TokenKind::Literal).unwrap();
    assert_eq!(literal.value, "100");
    assert!(literal.malformed.is_none());
}

#[test]
fn test_every_malformed_token_has_one_diagnostic() {
    let (tokens, diagnostics) = scan_all("'a\n1.2.3 # @ /* x");
    let malformed = tokens.iter().filter(|t| t.is_malformed()).count();
    assert_eq!(malformed, 5);
    assert_eq!(diagnostics.error_count(), malformed);
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_positions_count_characters_not_bytes() {
    let (tokens, _) = scan_all("'é😀' x");
    assert_eq!(tokens[0].position.start, 0);
    assert_eq!(tokens[0].position.end, 4);
    assert_eq!(tokens[2].position.start, 5);
    assert_eq!(tokens[2].position.column, 6);
}

#[test]
fn test_block_comment_advances_lines() {
    let (tokens, _) = scan_all("/* a\nb\n*/ y");
    let y = tokens.last().unwrap();
    assert_eq!(y.value, "y");
    assert_eq!(y.position.line, 3);
    assert_eq!(y.position.column, 4);
}

#[test]
fn test_tokens_reconstruct_source() {
    let source = "function f(a?: number) {\r\n  return a ?? 0; // done\n}\t@";
    let (tokens, _) = scan_all(source);
    assert_eq!(concat(&tokens), source);
    for window in tokens.windows(2) {
        assert_eq!(window[0].position.end, window[1].position.start);
    }
}
