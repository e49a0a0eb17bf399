//! The parser implementation.
//!
//! A recursive descent parser with one token of lookahead and precedence
//! climbing for binary operators. Grammar rules return `ParseResult`; a
//! syntax error travels up to the nearest statement boundary, where it is
//! recorded as a diagnostic and the parser skips to a synchronization point.

use rustots_ast::node::*;
use rustots_core::error::InternalError;
use rustots_core::text::{TextPos, TextRange};
use rustots_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage, Location};
use rustots_scanner::{Token, TokenKind};
use tracing::debug;

use crate::precedence::{
    get_binary_operator_precedence, is_assignment_operator, right_operand_precedence,
    OperatorPrecedence,
};
use crate::token_stream::TokenStream;
use crate::utilities::*;

/// Maximum nesting depth of statements, expressions and types.
pub const MAX_RECURSION_DEPTH: u32 = 200;

/// Why a grammar rule gave up.
enum ParseError {
    /// A syntax error, already rendered; reported at the statement boundary.
    Syntax(Diagnostic),
    Internal(InternalError),
}

impl From<InternalError> for ParseError {
    fn from(err: InternalError) -> Self {
        ParseError::Internal(err)
    }
}

type ParseResult<T> = Result<T, ParseError>;

/// The parser produces a `Program` from a scanned token sequence.
pub struct Parser<'t, 'd> {
    stream: TokenStream<'t>,
    diagnostics: &'d mut DiagnosticCollection,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
    /// `>` characters still owed by a `>>` or `>>>` token that closed nested
    /// type arguments.
    pending_type_closers: u32,
}

impl<'t, 'd> Parser<'t, 'd> {
    pub fn new(tokens: &'t [Token], diagnostics: &'d mut DiagnosticCollection) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            diagnostics,
            recursion_depth: 0,
            pending_type_closers: 0,
        }
    }

    /// Parse the whole token sequence.
    ///
    /// Syntax errors are recorded as diagnostics; `Err` is reserved for
    /// parser defects.
    #[tracing::instrument(skip_all, fields(token_count = self.stream.len()))]
    pub fn parse_program(mut self) -> Result<Program, InternalError> {
        let body = self.parse_statements(false)?;
        let program = Program::new(body, TextRange::new(0, self.stream.end_offset()));
        debug!(statement_count = program.body.len(), "parsed program");
        Ok(program)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn current_token(&self) -> Option<&'t Token> {
        self.stream.peek()
    }

    #[inline]
    fn next_token(&mut self) -> Option<&'t Token> {
        self.stream.advance()
    }

    /// Whether the current token is the given punctuation or operator.
    #[inline]
    fn at(&self, text: &str) -> bool {
        self.current_token().map_or(false, |t| t.is(text))
    }

    /// Start offset of the current token, or the end of input.
    fn token_pos(&self) -> TextPos {
        self.current_token()
            .map_or_else(|| self.stream.end_offset(), |t| t.position.start)
    }

    /// End offset of the last consumed token.
    fn last_end(&self) -> TextPos {
        self.stream.previous().map_or(0, |t| t.position.end)
    }

    fn range_from(&self, start: TextPos) -> TextRange {
        TextRange::new(start, self.last_end().max(start))
    }

    fn expect_token(&mut self, text: &str) -> ParseResult<&'t Token> {
        match self.current_token() {
            Some(token) if token.is(text) => {
                self.next_token();
                Ok(token)
            }
            _ => Err(self.unexpected(&format!("'{}'", text))),
        }
    }

    fn optional_token(&mut self, text: &str) -> Option<&'t Token> {
        if self.at(text) {
            self.next_token()
        } else {
            None
        }
    }

    fn expect_identifier(&mut self) -> ParseResult<Identifier> {
        match self.current_token() {
            Some(token) if token.kind == TokenKind::Identifier => {
                self.next_token();
                Ok(Identifier::new(token.value.clone(), token.range()))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Consume a statement terminator, applying automatic semicolon insertion.
    fn parse_expected_semicolon(&mut self) -> ParseResult<()> {
        if self.optional_token(";").is_some() {
            return Ok(());
        }
        // ASI: no error before a line break, a close brace, or end of input
        if self.stream.is_eof() || self.at("}") || self.stream.has_preceding_line_break() {
            return Ok(());
        }
        Err(self.unexpected("';'"))
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Build a diagnostic located at the current token, or just after the
    /// last token at end of input.
    fn diagnostic_here(&self, message: &DiagnosticMessage, args: &[&str]) -> Diagnostic {
        match self.current_token() {
            Some(token) => diagnostic_at(token, message, args),
            None => Diagnostic::new(
                message,
                args,
                self.stream.end_offset(),
                Location::at(self.stream.end_location(), 0),
            ),
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let found = describe_token(self.current_token());
        ParseError::Syntax(self.diagnostic_here(&messages::EXPECTED_0_FOUND_1, &[expected, &found]))
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.add(diagnostic);
    }

    /// Record a syntax error and skip to the next synchronization point.
    fn recover(&mut self, err: ParseError) -> Result<(), InternalError> {
        match err {
            ParseError::Syntax(diagnostic) => {
                self.report(diagnostic);
                self.skip_to_next_statement();
                Ok(())
            }
            ParseError::Internal(err) => Err(err),
        }
    }

    /// Error recovery: skip past the next `;` at brace depth zero, past a
    /// `{ ... }` group that ends its line, or up to (not past) an unmatched
    /// `}`, or to end of input.
    fn skip_to_next_statement(&mut self) {
        self.pending_type_closers = 0;
        let mut depth: u32 = 0;
        while let Some(token) = self.current_token() {
            if depth == 0 && token.is("}") {
                return;
            }
            self.next_token();
            if token.is("{") {
                depth += 1;
            } else if token.is("}") {
                depth -= 1;
                if depth == 0 && (self.stream.is_eof() || self.stream.has_preceding_line_break()) {
                    return;
                }
            } else if depth == 0 && token.is(";") {
                return;
            }
        }
    }

    /// Run `f` one nesting level deeper, refusing past `MAX_RECURSION_DEPTH`.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            let limit = MAX_RECURSION_DEPTH.to_string();
            return Err(ParseError::Syntax(
                self.diagnostic_here(&messages::NESTING_TOO_DEEP, &[&limit]),
            ));
        }
        self.recursion_depth += 1;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_statements(&mut self, in_block: bool) -> Result<Vec<Statement>, InternalError> {
        let mut statements = Vec::new();
        while let Some(token) = self.current_token() {
            if token.is("}") {
                if in_block {
                    break;
                }
                // Stray top-level close brace
                let found = describe_token(Some(token));
                self.report(diagnostic_at(token, &messages::EXPECTED_0_FOUND_1, &["statement", &found]));
                self.next_token();
                continue;
            }

            let saved_pos = self.stream.position();
            match self.parse_statement() {
                Ok(Some(stmt)) => statements.push(stmt),
                Ok(None) => {}
                Err(err) => self.recover(err)?,
            }

            if self.stream.position() == saved_pos {
                return Err(InternalError::NoProgress {
                    offset: self.token_pos(),
                });
            }
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> ParseResult<Option<Statement>> {
        self.nested(|p| p.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Option<Statement>> {
        let Some(token) = self.current_token() else {
            return Err(InternalError::StreamExhausted {
                context: "starting a statement",
            }
            .into());
        };

        if token.is(";") {
            self.next_token();
            self.report(diagnostic_at(token, &messages::EMPTY_STATEMENT, &[]));
            return Ok(None);
        }
        if token.is("{") {
            return Ok(Some(Statement::Block(self.parse_block()?)));
        }
        if token.kind == TokenKind::Keyword {
            if let Some(kind) = VariableKind::from_keyword(&token.value) {
                return self.parse_variable_declaration(kind);
            }
            match token.value.as_str() {
                "function" => return self.parse_function_declaration().map(|f| Some(Statement::FunctionDeclaration(f))),
                "return" => return self.parse_return_statement().map(|r| Some(Statement::Return(r))),
                _ => {}
            }
            if self.is_unsupported_statement(token) {
                self.skip_unsupported_statement(token);
                return Ok(None);
            }
        }
        self.parse_expression_statement().map(|e| Some(Statement::Expression(e)))
    }

    fn parse_block(&mut self) -> ParseResult<BlockStatement> {
        let pos = self.token_pos();
        self.expect_token("{")?;
        let body = self.parse_statements(true)?;
        if self.optional_token("}").is_none() {
            // Keep what was parsed; the block just runs to end of input.
            let err = self.diagnostic_here(&messages::EXPECTED_0_FOUND_1, &["'}'", "end of input"]);
            self.report(err);
        }
        Ok(BlockStatement {
            body,
            range: self.range_from(pos),
        })
    }

    fn parse_variable_declaration(&mut self, kind: VariableKind) -> ParseResult<Option<Statement>> {
        let pos = self.token_pos();
        self.next_token(); // let / const / var
        let mut declarations = Vec::new();

        let result = loop {
            match self.parse_variable_declarator() {
                Ok(decl) => declarations.push(decl),
                Err(err) => break Err(err),
            }
            if self.optional_token(",").is_none() {
                break self.parse_expected_semicolon();
            }
        };

        if let Err(err) = result {
            if declarations.is_empty() {
                return Err(err);
            }
            // Keep the complete declarators as a partial declaration.
            let end = declarations.last().map_or(pos, |d: &VariableDeclarator| d.range.end);
            self.recover(err)?;
            return Ok(Some(Statement::VariableDeclaration(VariableDeclaration {
                kind,
                declarations,
                range: TextRange::new(pos, end),
            })));
        }

        Ok(Some(Statement::VariableDeclaration(VariableDeclaration {
            kind,
            declarations,
            range: self.range_from(pos),
        })))
    }

    fn parse_variable_declarator(&mut self) -> ParseResult<VariableDeclarator> {
        let pos = self.token_pos();
        let mut id = self.expect_identifier()?;
        if self.optional_token(":").is_some() {
            id.type_annotation = Some(self.parse_type_annotation()?);
            id.range = self.range_from(pos);
        }
        let init = if self.optional_token("=").is_some() {
            Some(self.parse_assignment_expression()?)
        } else {
            None
        };
        Ok(VariableDeclarator {
            id,
            init,
            range: self.range_from(pos),
        })
    }

    fn parse_function_declaration(&mut self) -> ParseResult<FunctionDeclaration> {
        let pos = self.token_pos();
        self.next_token(); // function
        let id = self.expect_identifier()?;
        self.expect_token("(")?;
        let params = self.parse_parameter_list()?;
        self.expect_token(")")?;
        let return_type = if self.optional_token(":").is_some() {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        let body = self.parse_block()?;
        Ok(FunctionDeclaration {
            id,
            params,
            return_type,
            body,
            range: self.range_from(pos),
        })
    }

    fn parse_parameter_list(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut params = Vec::new();
        while !self.at(")") {
            params.push(self.parse_parameter()?);
            if self.optional_token(",").is_none() {
                break;
            }
        }
        Ok(params)
    }

    fn parse_parameter(&mut self) -> ParseResult<Identifier> {
        let pos = self.token_pos();
        let mut param = self.expect_identifier()?;
        param.optional = self.optional_token("?").is_some();
        if self.optional_token(":").is_some() {
            param.type_annotation = Some(self.parse_type_annotation()?);
        }
        param.range = self.range_from(pos);
        Ok(param)
    }

    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let pos = self.token_pos();
        self.next_token(); // return
        let has_argument = !(self.stream.is_eof()
            || self.at(";")
            || self.at("}")
            || self.stream.has_preceding_line_break());
        let argument = if has_argument {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.parse_expected_semicolon()?;
        Ok(ReturnStatement {
            argument,
            range: self.range_from(pos),
        })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement> {
        let pos = self.token_pos();
        let expression = self.parse_expression()?;
        self.parse_expected_semicolon()?;
        Ok(ExpressionStatement {
            expression,
            range: self.range_from(pos),
        })
    }

    // ========================================================================
    // Unsupported constructs
    // ========================================================================

    fn is_unsupported_statement(&self, token: &Token) -> bool {
        if !UNSUPPORTED_STATEMENT_KEYWORDS.contains(&token.value.as_str()) {
            return false;
        }
        if token.value == "type" {
            return self
                .stream
                .peek_nth(1)
                .map_or(false, |next| next.kind == TokenKind::Identifier);
        }
        true
    }

    /// Warn about a construct the grammar does not model and skip it.
    ///
    /// Skipping balances `{}`, `()` and `[]`. At depth zero it ends after a
    /// `;`, after a `}` that ends its line, before an unmatched `}`, or
    /// before a statement keyword that starts a new line. A following
    /// `else`, `catch` or `finally` (or the `while` of a `do`) continues
    /// the construct.
    fn skip_unsupported_statement(&mut self, keyword: &'t Token) {
        let warning = diagnostic_at(keyword, &messages::UNSUPPORTED_STATEMENT, &[&keyword.value]);
        self.report(warning);
        self.next_token();

        let construct = keyword.value.as_str();
        let mut depth: u32 = 0;
        while let Some(token) = self.current_token() {
            if depth == 0 {
                if token.is("}") {
                    return;
                }
                if can_start_statement(token)
                    && !is_continuation_keyword(token, construct)
                    && self.stream.has_preceding_line_break()
                {
                    return;
                }
            }

            self.next_token();
            let terminated = if token.is("{") || token.is("(") || token.is("[") {
                depth += 1;
                false
            } else if token.is("}") {
                depth -= 1;
                // `import { a } from 'm'` goes on past its `}`
                depth == 0 && (self.stream.is_eof() || self.stream.has_preceding_line_break())
            } else if token.is(")") || token.is("]") {
                depth = depth.saturating_sub(1);
                false
            } else {
                depth == 0 && token.is(";")
            };

            if terminated {
                match self.current_token() {
                    Some(next) if is_continuation_keyword(next, construct) => continue,
                    _ => return,
                }
            }
        }
    }

    // ========================================================================
    // Expression parsing
    // ========================================================================

    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.nested(|p| p.parse_assignment_expression())
    }

    fn parse_assignment_expression(&mut self) -> ParseResult<Expression> {
        let left = self.parse_binary_expression(OperatorPrecedence::Lowest)?;

        match self.current_token() {
            Some(op) if is_assignment_operator(op) => {
                if !left.is_assignment_target() {
                    self.report(Diagnostic::new(
                        &messages::INVALID_ASSIGNMENT_TARGET,
                        &[],
                        op.position.start,
                        Location::new(op.position.line, op.position.column, op.len()),
                    ));
                }
                self.next_token();
                let right = self.nested(|p| p.parse_assignment_expression())?;
                let range = left.range().cover(&right.range());
                Ok(Expression::Assignment(AssignmentExpression {
                    operator: op.value.clone(),
                    left: Box::new(left),
                    right: Box::new(right),
                    range,
                }))
            }
            _ => Ok(left),
        }
    }

    fn parse_binary_expression(&mut self, min_precedence: OperatorPrecedence) -> ParseResult<Expression> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let Some(op) = self.current_token() else {
                break;
            };
            let precedence = get_binary_operator_precedence(op);
            if precedence == OperatorPrecedence::Invalid || precedence <= min_precedence {
                break;
            }

            self.next_token();
            let right = self.nested(|p| p.parse_binary_expression(right_operand_precedence(precedence)))?;
            let range = left.range().cover(&right.range());
            left = Expression::Binary(BinaryExpression {
                operator: op.value.clone(),
                left: Box::new(left),
                right: Box::new(right),
                range,
            });
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let Some(token) = self.current_token() else {
            return Err(self.unexpected("expression"));
        };
        let is_prefix = match token.kind {
            TokenKind::Operator => matches!(token.value.as_str(), "!" | "-" | "+" | "~" | "++" | "--"),
            TokenKind::Keyword => matches!(token.value.as_str(), "typeof" | "void" | "delete"),
            _ => false,
        };
        if !is_prefix {
            return self.parse_postfix_expression();
        }

        self.next_token();
        let argument = self.nested(|p| p.parse_unary_expression())?;
        let range = TextRange::new(token.position.start, argument.range().end);
        Ok(Expression::Unary(UnaryExpression {
            operator: token.value.clone(),
            argument: Box::new(argument),
            prefix: true,
            range,
        }))
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_call_or_member_expression()?;
        match self.current_token() {
            Some(op) if (op.is("++") || op.is("--")) && !self.stream.has_preceding_line_break() => {
                self.next_token();
                let range = TextRange::new(expr.range().start, op.position.end);
                Ok(Expression::Unary(UnaryExpression {
                    operator: op.value.clone(),
                    argument: Box::new(expr),
                    prefix: false,
                    range,
                }))
            }
            _ => Ok(expr),
        }
    }

    fn parse_call_or_member_expression(&mut self) -> ParseResult<Expression> {
        let mut expr = self.parse_primary_expression()?;
        loop {
            let start = expr.range().start;
            if self.optional_token("(").is_some() {
                let arguments = self.parse_argument_list()?;
                self.expect_token(")")?;
                expr = Expression::Call(CallExpression {
                    callee: Box::new(expr),
                    arguments,
                    range: self.range_from(start),
                });
            } else if self.optional_token(".").is_some() {
                let property = self.parse_property_name()?;
                expr = Expression::Member(MemberExpression {
                    object: Box::new(expr),
                    property: Box::new(Expression::Identifier(property)),
                    computed: false,
                    range: self.range_from(start),
                });
            } else if self.optional_token("[").is_some() {
                let property = self.parse_expression()?;
                self.expect_token("]")?;
                expr = Expression::Member(MemberExpression {
                    object: Box::new(expr),
                    property: Box::new(property),
                    computed: true,
                    range: self.range_from(start),
                });
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_argument_list(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();
        while !self.at(")") {
            arguments.push(self.parse_expression()?);
            if self.optional_token(",").is_none() {
                break;
            }
        }
        Ok(arguments)
    }

    /// A name after `.`; keywords are allowed (`promise.catch`).
    fn parse_property_name(&mut self) -> ParseResult<Identifier> {
        match self.current_token() {
            Some(token) if matches!(token.kind, TokenKind::Identifier | TokenKind::Keyword) => {
                self.next_token();
                Ok(Identifier::new(token.value.clone(), token.range()))
            }
            _ => Err(self.unexpected("property name")),
        }
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let Some(token) = self.current_token() else {
            return Err(self.unexpected("expression"));
        };
        match token.kind {
            TokenKind::Identifier => {
                self.next_token();
                Ok(Expression::Identifier(Identifier::new(token.value.clone(), token.range())))
            }
            TokenKind::Literal => {
                self.next_token();
                Ok(Expression::Literal(literal_from_token(token)))
            }
            TokenKind::Keyword => {
                let value = match token.value.as_str() {
                    "true" => LiteralValue::Boolean(true),
                    "false" => LiteralValue::Boolean(false),
                    "null" => LiteralValue::Null,
                    "this" | "super" | "undefined" => {
                        self.next_token();
                        return Ok(Expression::Identifier(Identifier::new(token.value.clone(), token.range())));
                    }
                    _ => return Err(self.unexpected("expression")),
                };
                self.next_token();
                Ok(Expression::Literal(Literal {
                    value,
                    raw: token.value.clone(),
                    range: token.range(),
                }))
            }
            TokenKind::Punctuation if token.is("(") => {
                self.next_token();
                let expr = self.parse_expression()?;
                self.expect_token(")")?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    // ========================================================================
    // Type annotations
    // ========================================================================

    /// Parse a type annotation into normalized text.
    fn parse_type_annotation(&mut self) -> ParseResult<String> {
        let result = self.parse_type();
        // A surplus `>` from `A<B>>` is dropped with the annotation.
        self.pending_type_closers = 0;
        result
    }

    fn parse_type(&mut self) -> ParseResult<String> {
        self.nested(|p| p.parse_union_or_intersection_type())
    }

    fn parse_union_or_intersection_type(&mut self) -> ParseResult<String> {
        // Leading | or &
        if self.at("|") || self.at("&") {
            self.next_token();
        }
        let mut text = self.parse_type_operand()?;
        while self.pending_type_closers == 0 && (self.at("|") || self.at("&")) {
            let Some(op) = self.next_token() else {
                break;
            };
            text.push(' ');
            text.push_str(&op.value);
            text.push(' ');
            text.push_str(&self.parse_type_operand()?);
        }
        Ok(text)
    }

    fn parse_type_operand(&mut self) -> ParseResult<String> {
        let Some(token) = self.current_token() else {
            return Err(self.unexpected("type"));
        };
        let mut text = match token.kind {
            TokenKind::Identifier | TokenKind::Keyword | TokenKind::Literal => {
                self.next_token();
                let mut name = token.value.clone();
                // Qualified names: `NS.Type`
                while self.at(".") {
                    self.next_token();
                    name.push('.');
                    name.push_str(&self.parse_property_name()?.name);
                }
                name
            }
            TokenKind::Punctuation if token.is("(") => {
                self.next_token();
                let inner = self.parse_type()?;
                self.expect_token(")")?;
                format!("({})", inner)
            }
            _ => return Err(self.unexpected("type")),
        };

        if self.at("<") {
            self.next_token();
            text.push('<');
            text.push_str(&self.parse_type_arguments()?);
            text.push('>');
        }

        while self.pending_type_closers == 0 && self.at("[") {
            self.next_token();
            self.expect_token("]")?;
            text.push_str("[]");
        }
        Ok(text)
    }

    /// Parse `T, U>` after an opening `<`, splitting `>>` and `>>>`.
    fn parse_type_arguments(&mut self) -> ParseResult<String> {
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.parse_type()?);
            if self.pending_type_closers > 0 {
                self.pending_type_closers -= 1;
                break;
            }
            if self.optional_token(",").is_some() {
                continue;
            }
            match self.current_token() {
                Some(token) if token.is(">") => {
                    self.next_token();
                }
                Some(token) if token.is(">>") => {
                    self.next_token();
                    self.pending_type_closers += 1;
                }
                Some(token) if token.is(">>>") => {
                    self.next_token();
                    self.pending_type_closers += 2;
                }
                _ => return Err(self.unexpected("'>'")),
            }
            break;
        }
        Ok(arguments.join(", "))
    }
}

/// Build a diagnostic spanning `token`.
fn diagnostic_at(token: &Token, message: &DiagnosticMessage, args: &[&str]) -> Diagnostic {
    Diagnostic::new(
        message,
        args,
        token.position.start,
        Location::new(token.position.line, token.position.column, token.len()),
    )
}

fn literal_from_token(token: &Token) -> Literal {
    let first = token.value.chars().next();
    let value = match first {
        Some('"') | Some('\'') | Some('`') => {
            LiteralValue::String(cook_string_literal(&token.value, !token.is_malformed()))
        }
        _ => cook_number_literal(&token.value, token.is_malformed()),
    };
    Literal {
        value,
        raw: token.value.clone(),
        range: token.range(),
    }
}

/// Parse a scanned token sequence into a [`Program`].
///
/// Syntax errors are appended to `diagnostics`.
pub fn parse(tokens: &[Token], diagnostics: &mut DiagnosticCollection) -> Result<Program, InternalError> {
    Parser::new(tokens, diagnostics).parse_program()
}
