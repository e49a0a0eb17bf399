//! Aggregate statistics over an analysis result.

use indexmap::IndexMap;
use rustots_ast::*;
use rustots_scanner::{Token, TokenKind};
use serde::Serialize;

/// Token counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatistics {
    pub total: usize,
    pub malformed: usize,
    /// Counts per kind name, in `TokenKind` declaration order. Kinds that
    /// never occur are left out.
    pub by_kind: IndexMap<&'static str, usize>,
}

impl TokenStatistics {
    pub fn collect(tokens: &[Token]) -> Self {
        let mut counts = [0usize; TokenKind::ALL.len()];
        let mut malformed = 0;
        for token in tokens {
            if let Some(slot) = TokenKind::ALL.iter().position(|&kind| kind == token.kind) {
                counts[slot] += 1;
            }
            if token.is_malformed() {
                malformed += 1;
            }
        }

        let by_kind = TokenKind::ALL
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(kind, count)| (kind.as_str(), count))
            .collect();

        Self {
            total: tokens.len(),
            malformed,
            by_kind,
        }
    }

    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.by_kind.get(kind.as_str()).copied().unwrap_or(0)
    }
}

/// AST node counts, keyed by the serialized node type in the order each
/// type is first met in a pre-order walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AstStatistics {
    pub nodes: usize,
    pub by_kind: IndexMap<&'static str, usize>,
}

impl AstStatistics {
    pub fn collect(program: &Program) -> Self {
        let mut counter = NodeCounter::default();
        counter.visit_program(program);
        counter.stats
    }

    pub fn count_of(&self, kind: &str) -> usize {
        self.by_kind.get(kind).copied().unwrap_or(0)
    }
}

#[derive(Default)]
struct NodeCounter {
    stats: AstStatistics,
}

impl NodeCounter {
    fn record(&mut self, kind: &'static str) {
        self.stats.nodes += 1;
        *self.stats.by_kind.entry(kind).or_insert(0) += 1;
    }
}

// Blocks, declarators and leaves are counted in their own visit methods,
// since they are also reached without going through a statement or
// expression.
impl AstVisitor for NodeCounter {
    fn visit_program(&mut self, node: &Program) {
        self.record("Program");
        for stmt in node.body.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::FunctionDeclaration(n) => {
                self.record(stmt.kind_name());
                self.visit_function_declaration(n)
            }
            Statement::VariableDeclaration(n) => {
                self.record(stmt.kind_name());
                self.visit_variable_declaration(n)
            }
            Statement::Return(n) => {
                self.record(stmt.kind_name());
                self.visit_return_statement(n)
            }
            Statement::Expression(n) => {
                self.record(stmt.kind_name());
                self.visit_expression_statement(n)
            }
            Statement::Block(n) => self.visit_block(n),
        }
    }

    fn visit_block(&mut self, node: &BlockStatement) {
        self.record("BlockStatement");
        for stmt in node.body.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) {
        self.record("VariableDeclarator");
        self.visit_identifier(&node.id);
        if let Some(ref init) = node.init {
            self.visit_expression(init);
        }
    }

    fn visit_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Identifier(n) => self.visit_identifier(n),
            Expression::Literal(n) => self.visit_literal(n),
            Expression::Call(n) => {
                self.record(expr.kind_name());
                self.visit_call_expression(n)
            }
            Expression::Binary(n) => {
                self.record(expr.kind_name());
                self.visit_binary_expression(n)
            }
            Expression::Member(n) => {
                self.record(expr.kind_name());
                self.visit_member_expression(n)
            }
            Expression::Unary(n) => {
                self.record(expr.kind_name());
                self.visit_unary_expression(n)
            }
            Expression::Assignment(n) => {
                self.record(expr.kind_name());
                self.visit_assignment_expression(n)
            }
        }
    }

    fn visit_identifier(&mut self, _node: &Identifier) {
        self.record("Identifier");
    }

    fn visit_literal(&mut self, _node: &Literal) {
        self.record("Literal");
    }
}
