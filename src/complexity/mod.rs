//! Size and branching metrics for function bodies.

pub mod cyclomatic;
pub mod loc;

use syn::{Item, Stmt};

use crate::syntax::Node;

pub use cyclomatic::{count as cyclomatic, count_pruned as cyclomatic_pruned};
pub use loc::{count as lines_of_code, count_pruned as lines_of_code_pruned};

/// True for a function item nested inside another body.
///
/// Both counters accept this as a prune filter so nested functions can be
/// scored on their own instead of inflating the enclosing function.
pub fn is_nested_function(node: &Node<'_>) -> bool {
    matches!(node, Node::Stmt(Stmt::Item(Item::Fn(_))))
}
