//! Parser utility functions.

use rustots_ast::LiteralValue;
use rustots_scanner::Token;

/// Keywords that open a construct the grammar does not model yet.
///
/// `type` is only such a keyword when an identifier follows it; the caller
/// checks that.
pub const UNSUPPORTED_STATEMENT_KEYWORDS: &[&str] = &[
    "if", "for", "while", "do", "switch", "try", "throw", "break", "continue", "class",
    "interface", "type", "enum", "import", "export", "namespace", "module", "declare",
    "abstract",
];

/// Keywords that extend a skipped construct past its closing `}` or `;`.
pub fn is_continuation_keyword(token: &Token, construct: &str) -> bool {
    ["else", "catch", "finally"]
        .iter()
        .any(|keyword| token.is_keyword(keyword))
        || (construct == "do" && token.is_keyword("while"))
}

/// Check if a keyword token can start a statement on its own.
pub fn can_start_statement(token: &Token) -> bool {
    ["let", "const", "var", "function", "return"]
        .iter()
        .chain(UNSUPPORTED_STATEMENT_KEYWORDS)
        .any(|keyword| token.is_keyword(keyword))
}

/// Describe a token (or end of input) for an "expected X, found Y" message.
pub fn describe_token(token: Option<&Token>) -> String {
    match token {
        Some(token) => format!("'{}'", token.value),
        None => "end of input".to_string(),
    }
}

/// Resolve the escapes of a string or template literal.
///
/// `raw` includes the quotes. An unterminated literal has no closing quote
/// to strip.
pub fn cook_string_literal(raw: &str, terminated: bool) -> String {
    let mut chars: Vec<char> = raw.chars().collect();
    if terminated && chars.len() >= 2 {
        chars.pop();
    }
    if !chars.is_empty() {
        chars.remove(0);
    }

    let mut result = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        i += 1;
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        let Some(&escaped) = chars.get(i) else {
            result.push('\\');
            break;
        };
        i += 1;
        match escaped {
            'n' => result.push('\n'),
            't' => result.push('\t'),
            'r' => result.push('\r'),
            'b' => result.push('\u{0008}'),
            'f' => result.push('\u{000C}'),
            'v' => result.push('\u{000B}'),
            '0' if !chars.get(i).map_or(false, |c| c.is_ascii_digit()) => result.push('\0'),
            // Line continuation
            '\r' => {
                if chars.get(i) == Some(&'\n') {
                    i += 1;
                }
            }
            '\n' => {}
            'x' => match read_hex(&chars, i, 2) {
                Some(c) => {
                    result.push(c);
                    i += 2;
                }
                None => result.push('x'),
            },
            'u' if chars.get(i) == Some(&'{') => {
                let close = chars[i..].iter().position(|&c| c == '}');
                let code = close.and_then(|len| {
                    let digits: String = chars[i + 1..i + len].iter().collect();
                    u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)
                });
                match (close, code) {
                    (Some(len), Some(c)) => {
                        result.push(c);
                        i += len + 1;
                    }
                    _ => result.push('u'),
                }
            }
            'u' => match read_hex(&chars, i, 4) {
                Some(c) => {
                    result.push(c);
                    i += 4;
                }
                None => result.push('u'),
            },
            other => result.push(other),
        }
    }
    result
}

fn read_hex(chars: &[char], start: usize, len: usize) -> Option<char> {
    let digits: String = chars.get(start..start + len)?.iter().collect();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)
}

/// Compute the value of a numeric literal token.
///
/// A malformed run has no value.
pub fn cook_number_literal(raw: &str, malformed: bool) -> LiteralValue {
    if malformed {
        return LiteralValue::Invalid;
    }
    let text: String = raw.chars().filter(|&c| c != '_').collect();

    let (body, is_bigint) = match text.strip_suffix('n') {
        Some(body) => (body, true),
        None => (text.as_str(), false),
    };

    let radix = match body.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => 10,
    };

    if is_bigint {
        if radix == 10 {
            return LiteralValue::BigInt(body.to_string());
        }
        return match u128::from_str_radix(&body[2..], radix) {
            Ok(value) => LiteralValue::BigInt(value.to_string()),
            Err(_) => LiteralValue::BigInt(body.to_string()),
        };
    }

    if radix != 10 {
        let value = body[2..]
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0f64, |acc, digit| acc * radix as f64 + digit as f64);
        return LiteralValue::Number(value);
    }

    match body.parse::<f64>() {
        Ok(value) => LiteralValue::Number(value),
        Err(_) => LiteralValue::Invalid,
    }
}
