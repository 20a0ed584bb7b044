//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser converts
//! those tokens into this tree structure. The Evaluator then traverses
//! this tree to compute the final result.
//!
//! Every node owns its children outright. Nodes are built bottom-up, so a
//! parent only exists once both of its children are complete, and the tree
//! is never mutated afterwards.

use serde::Serialize;

/// Represents a parsed arithmetic expression.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Expression {
    /// A decimal literal.
    Number(f64),

    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),

    /// Unary minus. Unary plus never produces a node.
    Negate(Box<Expression>),
}

/// Binary operators, in order of precedence groups (additive is lowest).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
}

impl Expression {
    /// Builds the binary node for `op` from two finished subtrees.
    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            BinaryOperator::Add => Expression::Add(left, right),
            BinaryOperator::Subtract => Expression::Sub(left, right),
            BinaryOperator::Multiply => Expression::Mul(left, right),
            BinaryOperator::Divide => Expression::Div(left, right),
        }
    }

    pub fn negate(inner: Expression) -> Self {
        Expression::Negate(Box::new(inner))
    }

    /// Splits a binary node into its operator and operands.
    pub fn as_binary(&self) -> Option<(BinaryOperator, &Expression, &Expression)> {
        match self {
            Expression::Add(l, r) => Some((BinaryOperator::Add, &**l, &**r)),
            Expression::Sub(l, r) => Some((BinaryOperator::Subtract, &**l, &**r)),
            Expression::Mul(l, r) => Some((BinaryOperator::Multiply, &**l, &**r)),
            Expression::Div(l, r) => Some((BinaryOperator::Divide, &**l, &**r)),
            Expression::Number(_) | Expression::Negate(_) => None,
        }
    }

    /// Direct children, left before right.
    fn children(&self) -> impl Iterator<Item = &Expression> {
        let (first, second) = match self {
            Expression::Number(_) => (None, None),
            Expression::Negate(inner) => (Some(&**inner), None),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => (Some(&**l), Some(&**r)),
        };
        first.into_iter().chain(second)
    }

    /// Height of the tree; a lone number has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.children().map(|child| (child, level + 1)));
        }
        max
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Moves every non-leaf child out of `self` onto `stack`.
    fn detach_children(&mut self, stack: &mut Vec<Box<Expression>>) {
        let mut detach = |child: &mut Box<Expression>| {
            if !matches!(**child, Expression::Number(_)) {
                stack.push(std::mem::replace(child, Box::new(Expression::Number(0.0))));
            }
        };
        match self {
            Expression::Number(_) => {}
            Expression::Negate(inner) => detach(inner),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                detach(l);
                detach(r);
            }
        }
    }
}

/// Left-folded chains nest one level per operator, so teardown must not recurse.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

enum Piece<'a> {
    Node(&'a Expression),
    Operator(BinaryOperator),
    Close,
}

/// Fully parenthesized infix form, e.g. `((8 - 3) - 2)` or `-(5)`.
/// Written with an explicit stack so arbitrarily deep trees print.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Node(Expression::Number(n)) => write!(f, "{}", n)?,
                Piece::Node(Expression::Negate(inner)) => {
                    write!(f, "-(")?;
                    stack.push(Piece::Close);
                    stack.push(Piece::Node(inner));
                }
                Piece::Node(node) => {
                    if let Some((op, left, right)) = node.as_binary() {
                        write!(f, "(")?;
                        stack.push(Piece::Close);
                        stack.push(Piece::Node(right));
                        stack.push(Piece::Operator(op));
                        stack.push(Piece::Node(left));
                    }
                }
                Piece::Operator(op) => write!(f, " {} ", op)?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
