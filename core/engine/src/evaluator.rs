//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates AST expressions to a single floating-point value.
//! CONTEXT: After an expression is parsed into an AST, this module traverses
//! the tree and computes the final result.
//!
//! Evaluation is total: every well-formed tree yields an f64. Division
//! follows IEEE 754, so `1 / 0` is infinity and `0 / 0` is NaN. The tree is
//! only borrowed, so evaluating it again yields the same value.

use parser::{BinaryOperator, Expression};

/// Evaluates an AST expression and returns the result.
pub fn evaluate(expr: &Expression) -> f64 {
    let value = eval_node(expr);
    log::trace!(target: "EVAL", "{} nodes = {}", expr.node_count(), value);
    value
}

enum Step<'a> {
    Visit(&'a Expression),
    Negate,
    Apply(BinaryOperator),
}

/// Post-order walk with an explicit work stack, so left-folded chains of any
/// length evaluate without growing the call stack.
fn eval_node(expr: &Expression) -> f64 {
    let mut work = vec![Step::Visit(expr)];
    let mut values: Vec<f64> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Step::Visit(Expression::Number(n)) => values.push(*n),
            Step::Visit(Expression::Negate(inner)) => {
                work.push(Step::Negate);
                work.push(Step::Visit(inner));
            }
            Step::Visit(node) => {
                if let Some((op, left, right)) = node.as_binary() {
                    // Popped in reverse: left operand is evaluated first
                    work.push(Step::Apply(op));
                    work.push(Step::Visit(right));
                    work.push(Step::Visit(left));
                }
            }
            Step::Negate => {
                let value = pop_value(&mut values);
                values.push(-value);
            }
            Step::Apply(op) => {
                let right_val = pop_value(&mut values);
                let left_val = pop_value(&mut values);
                values.push(eval_binary_op(left_val, op, right_val));
            }
        }
    }

    pop_value(&mut values)
}

// Every Negate/Apply step runs after the visits that push its operands.
fn pop_value(values: &mut Vec<f64>) -> f64 {
    values.pop().unwrap_or(f64::NAN)
}

fn eval_binary_op(left_val: f64, op: BinaryOperator, right_val: f64) -> f64 {
    match op {
        BinaryOperator::Add => left_val + right_val,
        BinaryOperator::Subtract => left_val - right_val,
        BinaryOperator::Multiply => left_val * right_val,
        BinaryOperator::Divide => left_val / right_val,
    }
}
