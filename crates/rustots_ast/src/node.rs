//! AST node definitions.
//!
//! Child nodes are owned through `Box` and `Vec`, so each non-root node has
//! exactly one parent and `Program` is the only root.

use rustots_core::text::TextRange;
use serde::Serialize;

// ============================================================================
// Program
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Program {
    pub body: Vec<Statement>,
    pub range: TextRange,
}

impl Program {
    pub fn new(body: Vec<Statement>, range: TextRange) -> Self {
        Self { body, range }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    FunctionDeclaration(FunctionDeclaration),
    VariableDeclaration(VariableDeclaration),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    pub fn range(&self) -> TextRange {
        match self {
            Statement::FunctionDeclaration(n) => n.range,
            Statement::VariableDeclaration(n) => n.range,
            Statement::Return(n) => n.range,
            Statement::Expression(n) => n.range,
            Statement::Block(n) => n.range,
        }
    }

    /// The serialized `"type"` of this node.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::VariableDeclaration(_) => "VariableDeclaration",
            Statement::Return(_) => "ReturnStatement",
            Statement::Expression(_) => "ExpressionStatement",
            Statement::Block(_) => "BlockStatement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub id: Identifier,
    pub params: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub body: BlockStatement,
    pub range: TextRange,
}

/// `let`, `const` or `var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Let,
    Const,
    Var,
}

impl VariableKind {
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "let" => Some(VariableKind::Let),
            "const" => Some(VariableKind::Const),
            "var" => Some(VariableKind::Var),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Let => "let",
            VariableKind::Const => "const",
            VariableKind::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Expression>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    pub range: TextRange,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Call(CallExpression),
    Binary(BinaryExpression),
    Member(MemberExpression),
    Unary(UnaryExpression),
    Assignment(AssignmentExpression),
}

impl Expression {
    pub fn range(&self) -> TextRange {
        match self {
            Expression::Identifier(n) => n.range,
            Expression::Literal(n) => n.range,
            Expression::Call(n) => n.range,
            Expression::Binary(n) => n.range,
            Expression::Member(n) => n.range,
            Expression::Unary(n) => n.range,
            Expression::Assignment(n) => n.range,
        }
    }

    /// The serialized `"type"` of this node.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::Literal(_) => "Literal",
            Expression::Call(_) => "CallExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Member(_) => "MemberExpression",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Assignment(_) => "AssignmentExpression",
        }
    }

    /// Whether this expression may appear on the left of an assignment.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Expression::Identifier(_) | Expression::Member(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Identifier {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    pub range: TextRange,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Identifier {
    pub fn new(name: impl Into<String>, range: TextRange) -> Self {
        Self {
            name: name.into(),
            type_annotation: None,
            optional: false,
            range,
        }
    }
}

/// The cooked value of a literal.
///
/// A numeric run the scanner flagged as malformed has no value and
/// serializes as `null`, the same as the `null` keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    /// BigInt digits without the trailing `n`.
    BigInt(String),
    Boolean(bool),
    Null,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    /// `true` for `a[b]`, `false` for `a.b`.
    pub computed: bool,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Expression>,
    /// `false` only for postfix `++`/`--`.
    pub prefix: bool,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub range: TextRange,
}
