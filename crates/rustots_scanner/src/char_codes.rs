//! Character classes, the keyword set and the operator table used by the scanner.

use crate::token::TokenKind;

/// Reserved and contextual words classified as `keyword` tokens.
pub static KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "asserts", "async", "await", "bigint", "boolean", "break", "case",
    "catch", "class", "const", "continue", "debugger", "declare", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "from", "function", "get",
    "if", "implements", "import", "in", "infer", "instanceof", "interface", "is", "keyof", "let",
    "module", "namespace", "never", "new", "null", "number", "object", "of", "package",
    "private", "protected", "public", "readonly", "require", "return", "set", "static",
    "string", "super", "switch", "symbol", "this", "throw", "true", "try", "type", "typeof",
    "undefined", "unique", "unknown", "var", "void", "while", "with", "yield",
];

/// Check if an identifier run is a keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

/// Operators and punctuators, longest first so the first match is the
/// maximal munch.
pub(crate) static PUNCTUATORS: &[(&str, TokenKind)] = &[
    // 4
    (">>>=", TokenKind::Operator),
    // 3
    ("===", TokenKind::Operator),
    ("!==", TokenKind::Operator),
    ("**=", TokenKind::Operator),
    ("<<=", TokenKind::Operator),
    (">>=", TokenKind::Operator),
    (">>>", TokenKind::Operator),
    ("&&=", TokenKind::Operator),
    ("||=", TokenKind::Operator),
    ("??=", TokenKind::Operator),
    ("...", TokenKind::Punctuation),
    // 2
    ("==", TokenKind::Operator),
    ("!=", TokenKind::Operator),
    ("<=", TokenKind::Operator),
    (">=", TokenKind::Operator),
    ("&&", TokenKind::Operator),
    ("||", TokenKind::Operator),
    ("??", TokenKind::Operator),
    ("?.", TokenKind::Operator),
    ("++", TokenKind::Operator),
    ("--", TokenKind::Operator),
    ("+=", TokenKind::Operator),
    ("-=", TokenKind::Operator),
    ("*=", TokenKind::Operator),
    ("/=", TokenKind::Operator),
    ("%=", TokenKind::Operator),
    ("&=", TokenKind::Operator),
    ("|=", TokenKind::Operator),
    ("^=", TokenKind::Operator),
    ("**", TokenKind::Operator),
    ("<<", TokenKind::Operator),
    (">>", TokenKind::Operator),
    ("=>", TokenKind::Operator),
    // 1
    ("+", TokenKind::Operator),
    ("-", TokenKind::Operator),
    ("*", TokenKind::Operator),
    ("/", TokenKind::Operator),
    ("%", TokenKind::Operator),
    ("=", TokenKind::Operator),
    ("!", TokenKind::Operator),
    ("<", TokenKind::Operator),
    (">", TokenKind::Operator),
    ("&", TokenKind::Operator),
    ("|", TokenKind::Operator),
    ("^", TokenKind::Operator),
    ("~", TokenKind::Operator),
    ("?", TokenKind::Operator),
    (":", TokenKind::Operator),
    ("{", TokenKind::Punctuation),
    ("}", TokenKind::Punctuation),
    ("(", TokenKind::Punctuation),
    (")", TokenKind::Punctuation),
    ("[", TokenKind::Punctuation),
    ("]", TokenKind::Punctuation),
    (";", TokenKind::Punctuation),
    (",", TokenKind::Punctuation),
    (".", TokenKind::Punctuation),
];

/// Check if a character starts a line break (`\n`, `\r\n` or a lone `\r`).
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Check if a character is whitespace (not line break).
///
/// U+2028 and U+2029 are folded in here: positions only count `\n` and
/// `\r` as line breaks.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{2028}' // line separator
            | '\u{2029}' // paragraph separator
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character is a digit in the given radix.
#[inline]
pub fn is_radix_digit(ch: char, radix: u32) -> bool {
    ch.is_digit(radix)
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}
