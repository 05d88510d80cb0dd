//! Cyclomatic complexity
//!
//! Counts independent paths through a function body: one for the straight
//! line, plus one per decision point. The decision points are fixed:
//!
//! - `if`, `while`, `for`, `loop`
//! - every `match` arm, plus one more when the arm carries a guard
//! - each extra alternative of an or-pattern (`A | B` adds one)
//! - the short-circuit operators `&&` and `||`
//! - the `?` operator and `let ... else` divergence
//! - `continue` and labeled `break`
//!
//! A body with no decision points scores 1. Closures count inline as part
//! of the enclosing function; use [`count_pruned`] to exclude nested items
//! that are scored on their own.

use syn::{BinOp, Block, Expr, Pat};

use crate::syntax::{walk, Flow, Node};

/// Cyclomatic complexity of `body`.
pub fn count(body: &Block) -> u32 {
    count_pruned(body, |_| true)
}

/// Cyclomatic complexity of `body`, skipping pruned subtrees.
///
/// Nodes for which `include` returns false contribute nothing, and nothing
/// below them is visited.
pub fn count_pruned<P>(body: &Block, mut include: P) -> u32
where
    P: FnMut(&Node<'_>) -> bool,
{
    let mut complexity: u32 = 1;
    walk(body, |node| {
        if !include(&node) {
            return Flow::Prune;
        }
        complexity += decision_points(&node);
        Flow::Descend
    });
    complexity
}

fn decision_points(node: &Node<'_>) -> u32 {
    match node {
        Node::Expr(expr) => expr_decision_points(expr),
        Node::Arm(arm) => {
            if arm.guard.is_some() {
                2
            } else {
                1
            }
        }
        Node::Pat(Pat::Or(or_pattern)) => or_pattern.cases.len().saturating_sub(1) as u32,
        Node::Local(local) => match &local.init {
            Some(init) if init.diverge.is_some() => 1,
            _ => 0,
        },
        _ => 0,
    }
}

fn expr_decision_points(expr: &Expr) -> u32 {
    match expr {
        Expr::If(_)
        | Expr::While(_)
        | Expr::ForLoop(_)
        | Expr::Loop(_)
        | Expr::Try(_)
        | Expr::Continue(_) => 1,
        Expr::Break(expr_break) if expr_break.label.is_some() => 1,
        Expr::Binary(binary) if is_logical_operator(&binary.op) => 1,
        _ => 0,
    }
}

fn is_logical_operator(op: &BinOp) -> bool {
    matches!(op, BinOp::And(_) | BinOp::Or(_))
}
