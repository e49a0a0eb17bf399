//! Operator precedence for binary operators.

use rustots_scanner::{Token, TokenKind};

/// Binary operator precedence levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Lowest = 0,
    NullishCoalescing = 1,
    LogicalOr = 2,
    LogicalAnd = 3,
    BitwiseOr = 4,
    BitwiseXor = 5,
    BitwiseAnd = 6,
    Equality = 7,
    Relational = 8,
    Shift = 9,
    Additive = 10,
    Multiplicative = 11,
    Exponentiation = 12,
    Invalid = 255,
}

/// Get the binary operator precedence for a token.
pub fn get_binary_operator_precedence(token: &Token) -> OperatorPrecedence {
    match token.kind {
        TokenKind::Operator => match token.value.as_str() {
            "??" => OperatorPrecedence::NullishCoalescing,
            "||" => OperatorPrecedence::LogicalOr,
            "&&" => OperatorPrecedence::LogicalAnd,
            "|" => OperatorPrecedence::BitwiseOr,
            "^" => OperatorPrecedence::BitwiseXor,
            "&" => OperatorPrecedence::BitwiseAnd,
            "==" | "!=" | "===" | "!==" => OperatorPrecedence::Equality,
            "<" | ">" | "<=" | ">=" => OperatorPrecedence::Relational,
            "<<" | ">>" | ">>>" => OperatorPrecedence::Shift,
            "+" | "-" => OperatorPrecedence::Additive,
            "*" | "/" | "%" => OperatorPrecedence::Multiplicative,
            "**" => OperatorPrecedence::Exponentiation,
            _ => OperatorPrecedence::Invalid,
        },
        TokenKind::Keyword => match token.value.as_str() {
            "instanceof" | "in" => OperatorPrecedence::Relational,
            _ => OperatorPrecedence::Invalid,
        },
        _ => OperatorPrecedence::Invalid,
    }
}

/// The minimum precedence to pass when parsing the right operand.
///
/// `**` is right associative, so its right operand may itself be a `**`.
pub fn right_operand_precedence(precedence: OperatorPrecedence) -> OperatorPrecedence {
    match precedence {
        OperatorPrecedence::Exponentiation => OperatorPrecedence::Multiplicative,
        other => other,
    }
}

/// Check if a token is an assignment operator.
pub fn is_assignment_operator(token: &Token) -> bool {
    token.kind == TokenKind::Operator
        && matches!(
            token.value.as_str(),
            "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "**="
                | "<<=" | ">>=" | ">>>="
                | "&=" | "|=" | "^="
                | "&&=" | "||=" | "??="
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustots_scanner::Position;

    fn token(kind: TokenKind, value: &str) -> Token {
        Token {
            kind,
            value: value.to_string(),
            position: Position {
                start: 0,
                end: value.chars().count() as u32,
                line: 1,
                column: 1,
            },
            malformed: None,
        }
    }

    #[test]
    fn test_precedence_ordering() {
        let add = get_binary_operator_precedence(&token(TokenKind::Operator, "+"));
        let mul = get_binary_operator_precedence(&token(TokenKind::Operator, "*"));
        let or = get_binary_operator_precedence(&token(TokenKind::Operator, "||"));
        assert!(mul > add);
        assert!(add > or);
    }

    #[test]
    fn test_keyword_operators() {
        assert_eq!(
            get_binary_operator_precedence(&token(TokenKind::Keyword, "instanceof")),
            OperatorPrecedence::Relational
        );
        assert_eq!(
            get_binary_operator_precedence(&token(TokenKind::Keyword, "typeof")),
            OperatorPrecedence::Invalid
        );
        // Only operator tokens carry operator text.
        assert_eq!(
            get_binary_operator_precedence(&token(TokenKind::Literal, "'+'")),
            OperatorPrecedence::Invalid
        );
    }

    #[test]
    fn test_assignment_operators() {
        assert!(is_assignment_operator(&token(TokenKind::Operator, "??=")));
        assert!(is_assignment_operator(&token(TokenKind::Operator, ">>>=")));
        assert!(!is_assignment_operator(&token(TokenKind::Operator, "==")));
    }

    #[test]
    fn test_exponent_is_right_associative() {
        assert!(
            right_operand_precedence(OperatorPrecedence::Exponentiation)
                < OperatorPrecedence::Exponentiation
        );
        assert_eq!(
            right_operand_precedence(OperatorPrecedence::Additive),
            OperatorPrecedence::Additive
        );
    }
}
