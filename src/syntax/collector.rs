//! Generic pre-order traversal and collection over function bodies
//!
//! Every counter and check in this crate walks syntax the same way: a
//! single pre-order traversal that hands each interesting node to a
//! callback, which may prune the subtree below it. [`collect`] builds on
//! that walk to gather all nodes of one shape, picked by the element type.

use syn::visit::{self, Visit};
use syn::{
    Arm, Block, Expr, ExprCall, ExprClosure, ExprForLoop, ExprIf, ExprMatch, ExprMethodCall,
    ExprReturn, ExprWhile, Local, Pat, Stmt,
};

/// One step of the traversal.
///
/// The variants nest: a `let` binding is seen first as the statement that
/// carries it, then as a [`Node::Local`], and its pattern follows as a
/// [`Node::Pat`].
#[derive(Debug, Clone, Copy)]
pub enum Node<'ast> {
    Stmt(&'ast Stmt),
    Expr(&'ast Expr),
    Local(&'ast Local),
    Arm(&'ast Arm),
    Pat(&'ast Pat),
}

/// Whether the walk continues below the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Visit the node's children.
    Descend,
    /// Skip the entire subtree under this node.
    Prune,
}

/// Walks `block` in pre-order, handing every node to `visit`.
///
/// Returning [`Flow::Prune`] skips the children of the current node; the
/// rest of the tree is unaffected.
pub fn walk<'ast, F>(block: &'ast Block, mut visit: F)
where
    F: FnMut(Node<'ast>) -> Flow,
{
    let mut driver = Driver { visit: &mut visit };
    driver.visit_block(block);
}

struct Driver<'f, F> {
    visit: &'f mut F,
}

macro_rules! driver_hooks {
    ($($method:ident($ty:ident) => $variant:ident),* $(,)?) => {
        $(
            fn $method(&mut self, node: &'ast $ty) {
                if let Flow::Descend = (self.visit)(Node::$variant(node)) {
                    visit::$method(self, node);
                }
            }
        )*
    };
}

impl<'ast, 'f, F> Visit<'ast> for Driver<'f, F>
where
    F: FnMut(Node<'ast>) -> Flow,
{
    driver_hooks! {
        visit_stmt(Stmt) => Stmt,
        visit_expr(Expr) => Expr,
        visit_local(Local) => Local,
        visit_arm(Arm) => Arm,
        visit_pat(Pat) => Pat,
    }
}

/// A node shape that can be picked out of the traversal.
///
/// Implemented for references to the broad node kinds and to the specific
/// expression kinds callers usually look for.
pub trait FromNode<'ast>: Sized {
    fn from_node(node: Node<'ast>) -> Option<Self>;
}

macro_rules! from_node_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl<'ast> FromNode<'ast> for &'ast $ty {
                fn from_node(node: Node<'ast>) -> Option<Self> {
                    match node {
                        Node::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_node_kind! {
    Stmt => Stmt,
    Expr => Expr,
    Local => Local,
    Arm => Arm,
    Pat => Pat,
}

macro_rules! from_expr_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl<'ast> FromNode<'ast> for &'ast $ty {
                fn from_node(node: Node<'ast>) -> Option<Self> {
                    match node {
                        Node::Expr(Expr::$variant(inner)) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_expr_kind! {
    ExprIf => If,
    ExprMatch => Match,
    ExprClosure => Closure,
    ExprCall => Call,
    ExprMethodCall => MethodCall,
    ExprReturn => Return,
    ExprForLoop => ForLoop,
    ExprWhile => While,
}

/// Collects every node of shape `T` under `block`, in source order.
pub fn collect<'ast, T>(block: &'ast Block) -> Vec<T>
where
    T: FromNode<'ast>,
{
    collect_pruned(block, |_| true)
}

/// Like [`collect`], but `keep` can prune subtrees.
///
/// When `keep` returns false the node is dropped together with everything
/// below it, so a single predicate excludes, say, closures and all their
/// contents.
pub fn collect_pruned<'ast, T, P>(block: &'ast Block, mut keep: P) -> Vec<T>
where
    T: FromNode<'ast>,
    P: FnMut(&Node<'ast>) -> bool,
{
    let mut found = Vec::new();
    walk(block, |node| {
        if !keep(&node) {
            return Flow::Prune;
        }
        if let Some(hit) = T::from_node(node) {
            found.push(hit);
        }
        Flow::Descend
    });
    found
}
