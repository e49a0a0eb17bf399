//! Property-based tests for the analysis pipeline.
//!
//! 1. **Totality**: any string analyzes without an internal error
//! 2. **Coverage**: token texts concatenate back to the input and spans are contiguous
//! 3. **Determinism**: the same input always gives the same result
//! 4. **Diagnostic order**: diagnostics come back sorted by line and column
//! 5. **Filtering is output-only**: filters never change the AST or the diagnostics

use proptest::prelude::*;
use rustots_analyzer::{analyze, analyze_with, AnalysisMode, AnalysisOptions, TokenFilter};

// ============================================================================
// Generators
// ============================================================================

const FRAGMENTS: &[&str] = &[
    "let ", "const ", "var ", "function ", "return ", "if ", "else ", "class ", "x", "foo",
    "$y", "_z", "42", "1.5", "1.2.3", "0x1F", "10n", "'s'", "\"t\"", "`u`", "'open", "(", ")",
    "{", "}", "[", "]", ";", ",", ".", ":", "?", "?.", "=", "==", "===", "+", "++", "-", "*",
    "**", "/", "<", ">", ">>", "&&", "||", "??", "!", "@", "#", " ", "\t", "\n", "\r\n",
    "// c\n", "/* c */", "/* open", "é", "日本", "\u{2028}",
];

/// 1-based line and column of a character offset, computed independently
/// of the scanner. `\n`, `\r\n` and a lone `\r` each end a line.
fn line_and_column_of(input: &str, offset: u32) -> (u32, u32) {
    let (mut line, mut column) = (1, 1);
    let mut chars = input.chars().take(offset as usize).peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
    }
    (line, column)
}

/// Source-like text assembled from fragments, which reaches far more of the
/// grammar than arbitrary characters do.
fn source_like() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..60).prop_map(|parts| parts.concat())
}

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

fn assert_covers(source: &str, tokens: &[rustots_scanner::Token]) -> Result<(), TestCaseError> {
    let text: String = tokens.iter().map(|t| t.value.as_str()).collect();
    prop_assert_eq!(&text, source);

    let mut offset = 0u32;
    for token in tokens {
        prop_assert_eq!(token.position.start, offset);
        prop_assert!(token.position.end > token.position.start);
        prop_assert_eq!(token.len() as usize, token.value.chars().count());
        offset = token.position.end;
    }
    prop_assert_eq!(offset as usize, source.chars().count());
    Ok(())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn analysis_is_total(input in "\\PC{0,300}") {
        prop_assert!(analyze(&input).is_ok());
    }

    #[test]
    fn analysis_is_total_on_source_like_input(input in source_like()) {
        let analysis = analyze(&input);
        prop_assert!(analysis.is_ok(), "internal error: {:?}", analysis.err());
    }

    #[test]
    fn tokens_cover_arbitrary_input(input in "\\PC{0,300}") {
        let analysis = analyze(&input).unwrap();
        assert_covers(&input, &analysis.tokens)?;
    }

    #[test]
    fn tokens_cover_source_like_input(input in source_like()) {
        let analysis = analyze(&input).unwrap();
        assert_covers(&input, &analysis.tokens)?;
    }

    #[test]
    fn token_lines_match_offsets(input in source_like()) {
        let analysis = analyze(&input).unwrap();
        for token in &analysis.tokens {
            let expected = line_and_column_of(&input, token.position.start);
            prop_assert_eq!((token.position.line, token.position.column), expected);
        }
    }

    #[test]
    fn analysis_is_deterministic(input in source_like()) {
        let first = analyze(&input).unwrap();
        let second = analyze(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn diagnostics_are_sorted(input in source_like()) {
        let analysis = analyze(&input).unwrap();
        let positions: Vec<(u32, u32)> = analysis
            .diagnostics
            .iter()
            .map(|d| (d.location.line, d.location.column))
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn filtering_only_changes_tokens(input in source_like()) {
        let full = analyze(&input).unwrap();
        let options = AnalysisOptions {
            mode: AnalysisMode::Full,
            filter: TokenFilter {
                kinds: None,
                exclude_whitespace: true,
                only_malformed: true,
            },
        };
        let filtered = analyze_with(&input, &options).unwrap();
        prop_assert_eq!(&filtered.ast, &full.ast);
        prop_assert_eq!(&filtered.diagnostics, &full.diagnostics);
        prop_assert!(filtered.tokens.iter().all(|t| t.is_malformed()));
        let expected = full.tokens.iter().filter(|t| t.is_malformed()).count();
        prop_assert_eq!(filtered.tokens.len(), expected);
    }
}
