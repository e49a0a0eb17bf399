//! AST visitor trait for traversing the syntax tree.
//!
//! Default implementations walk into children, so an implementor only
//! overrides the node kinds it cares about.

use crate::node::*;

/// A visitor that traverses the AST. Implement this trait to perform
/// operations on each node kind. Default implementations walk into children.
pub trait AstVisitor {
    fn visit_program(&mut self, node: &Program) {
        for stmt in node.body.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::FunctionDeclaration(n) => self.visit_function_declaration(n),
            Statement::VariableDeclaration(n) => self.visit_variable_declaration(n),
            Statement::Return(n) => self.visit_return_statement(n),
            Statement::Expression(n) => self.visit_expression_statement(n),
            Statement::Block(n) => self.visit_block(n),
        }
    }

    // -- Statements --

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        self.visit_identifier(&node.id);
        for param in node.params.iter() {
            self.visit_identifier(param);
        }
        self.visit_block(&node.body);
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        for decl in node.declarations.iter() {
            self.visit_variable_declarator(decl);
        }
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) {
        self.visit_identifier(&node.id);
        if let Some(ref init) = node.init {
            self.visit_expression(init);
        }
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        if let Some(ref argument) = node.argument {
            self.visit_expression(argument);
        }
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement) {
        self.visit_expression(&node.expression);
    }

    fn visit_block(&mut self, node: &BlockStatement) {
        for stmt in node.body.iter() {
            self.visit_statement(stmt);
        }
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Identifier(n) => self.visit_identifier(n),
            Expression::Literal(n) => self.visit_literal(n),
            Expression::Call(n) => self.visit_call_expression(n),
            Expression::Binary(n) => self.visit_binary_expression(n),
            Expression::Member(n) => self.visit_member_expression(n),
            Expression::Unary(n) => self.visit_unary_expression(n),
            Expression::Assignment(n) => self.visit_assignment_expression(n),
        }
    }

    fn visit_identifier(&mut self, _node: &Identifier) {}

    fn visit_literal(&mut self, _node: &Literal) {}

    fn visit_call_expression(&mut self, node: &CallExpression) {
        self.visit_expression(&node.callee);
        for arg in node.arguments.iter() {
            self.visit_expression(arg);
        }
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression) {
        self.visit_expression(&node.left);
        self.visit_expression(&node.right);
    }

    fn visit_member_expression(&mut self, node: &MemberExpression) {
        self.visit_expression(&node.object);
        self.visit_expression(&node.property);
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) {
        self.visit_expression(&node.argument);
    }

    fn visit_assignment_expression(&mut self, node: &AssignmentExpression) {
        self.visit_expression(&node.left);
        self.visit_expression(&node.right);
    }
}
